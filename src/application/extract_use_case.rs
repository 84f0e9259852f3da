// ============================================================
// Layer 2 — Extract Use Case
// ============================================================
// Orchestrates the extraction half of the pipeline in order:
//
//   Step 1: Start a fresh metrics.csv       (Layer 5 - infra)
//   Step 2: Stream the log through the      (Layer 4 - data)
//           pattern into the CSV sink
//   Step 3: Reload the CSV with typed       (Layer 5 - infra)
//           coercion
//   Step 4: Print the success marker and
//           a preview of the first rows
//
// The reload in Step 3 is deliberate: the CSV file is the
// contract between the two halves of the pipeline, so the
// typed records come from reading it back, not from the
// in-memory rows the extractor produced.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::Result;

use crate::data::{columns::MetricColumns, extractor::LogExtractor};
use crate::domain::record::MetricRecord;
use crate::domain::traits::RecordSource;
use crate::infra::csv_store::{CsvMetricsReader, CsvMetricsWriter};

/// Number of rows shown in the console preview
const PREVIEW_ROWS: usize = 5;

// ─── Extraction Configuration ────────────────────────────────────────────────
/// Paths for one extraction run. Built from CLI args by Layer 1.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Path to the plain-text training log
    pub input: String,

    /// Directory that receives metrics.csv (created if absent)
    pub out_dir: String,
}

// ─── ExtractUseCase ──────────────────────────────────────────────────────────
// Owns the config and runs log-to-CSV extraction plus reload.
pub struct ExtractUseCase {
    config: ExtractConfig,
}

impl ExtractUseCase {
    /// Create a new ExtractUseCase with the given configuration
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Execute extraction end to end and return the typed records.
    pub fn execute(&self) -> Result<Vec<MetricRecord>> {
        let cfg = &self.config;

        // ── Step 1: Start a fresh metrics.csv ────────────────────────────────
        // The writer creates the output directory and puts the
        // header in place before any row arrives
        tracing::info!("Extracting metrics from '{}'", cfg.input);
        let mut writer = CsvMetricsWriter::create(&cfg.out_dir)?;

        // ── Step 2: Stream the log into the CSV sink ─────────────────────────
        // One row per matched line, non-matching lines skipped
        let extractor = LogExtractor::new(&cfg.input);
        let rows = extractor.extract_into(&mut writer)?;
        tracing::info!("Wrote {} rows to '{}'", rows, writer.csv_path().display());
        writer.finish()?;

        // ── Step 3: Reload the CSV with typed coercion ───────────────────────
        let reader  = CsvMetricsReader::new(&cfg.out_dir);
        let records = reader.load_all()?;

        // ── Step 4: Success marker + preview ─────────────────────────────────
        let columns = MetricColumns::from_records(&records);
        println!("✅ Extraction complete. First rows:");
        println!("{}", columns.preview(PREVIEW_ROWS));

        Ok(records)
    }
}
