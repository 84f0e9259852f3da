// ============================================================
// Layer 5 — CSV Metrics Store
// ============================================================
// Persists extracted metrics to output/metrics.csv and reads
// them back with typed coercion.
//
// Why CSV?
//   - Easy to open in Excel or Google Sheets
//   - Permanent record of each extraction run
//   - Small enough that re-reading the whole file is cheap
//
// Write side (CsvMetricsWriter):
//   - Creates the output directory and a fresh metrics.csv
//   - Writes the header row up front, so a run that matches
//     nothing still leaves a valid header-only file
//   - Appends one row per matched log line, raw field text
//     exactly as it appeared in the log
//
// Read side (CsvMetricsReader):
//   - Deserialises each row into a typed MetricRecord
//   - Any cell that fails its type coercion is fatal
//
// Example CSV output:
//   step,loss,grad_norm,lr,consumed_samples,consumed_tokens
//   100,1.5,2.0,0.001,50,1000
//   200,1.4,1.8,0.001,100,2000
//   ...
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use crate::domain::record::{MetricRecord, RawRecord};
use crate::domain::traits::{RecordSink, RecordSource};

/// File name of the metrics table inside the output directory
pub const METRICS_FILE: &str = "metrics.csv";

/// Column order, matching MetricRecord's field order
const HEADER: [&str; 6] = [
    "step",
    "loss",
    "grad_norm",
    "lr",
    "consumed_samples",
    "consumed_tokens",
];

/// Writes extracted records to metrics.csv, one row per match.
pub struct CsvMetricsWriter {
    writer:   csv::Writer<File>,
    csv_path: PathBuf,
}

impl CsvMetricsWriter {
    /// Create the output directory if needed and start a fresh
    /// metrics.csv with the header row already in place.
    /// An existing file from a previous run is overwritten.
    pub fn create(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir).with_context(|| {
            format!("Cannot create output directory '{}'", out_dir.display())
        })?;

        let csv_path = out_dir.join(METRICS_FILE);
        let mut writer = csv::Writer::from_path(&csv_path)
            .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;

        // Header goes out immediately: a log with zero matching
        // lines must still produce a header-only file
        writer.write_record(HEADER)?;
        writer.flush()?;

        tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        Ok(Self { writer, csv_path })
    }

    /// Return the path to the metrics CSV file
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Flush any buffered rows and close the writer.
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("Cannot flush '{}'", self.csv_path.display()))?;
        Ok(())
    }
}

/// Implement the RecordSink trait so the extractor can append
/// rows without knowing the storage format
impl RecordSink for CsvMetricsWriter {
    fn append(&mut self, record: &RawRecord) -> Result<()> {
        let tokens = record.consumed_tokens.to_string();

        // Raw field text straight through; only the token count
        // was converted (comma stripping) during parsing
        self.writer
            .write_record([
                record.step.as_str(),
                record.loss.as_str(),
                record.grad_norm.as_str(),
                record.lr.as_str(),
                record.consumed_samples.as_str(),
                tokens.as_str(),
            ])
            .with_context(|| format!("Cannot append row to '{}'", self.csv_path.display()))?;
        Ok(())
    }
}

/// Reads metrics.csv back into typed records.
pub struct CsvMetricsReader {
    csv_path: PathBuf,
}

impl CsvMetricsReader {
    /// Create a reader for the metrics.csv inside `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: out_dir.into().join(METRICS_FILE),
        }
    }
}

/// Implement the RecordSource trait so the render side can load
/// typed records without knowing the storage format
impl RecordSource for CsvMetricsReader {
    fn load_all(&self) -> Result<Vec<MetricRecord>> {
        let mut reader = csv::Reader::from_path(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            // Strict per-cell coercion: step/samples/tokens must be
            // integers, loss/grad_norm/lr must be floats. One bad
            // cell fails the whole load, no partial-row recovery.
            let record: MetricRecord = row
                .with_context(|| format!("Malformed row in '{}'", self.csv_path.display()))?;
            records.push(record);
        }

        tracing::debug!(
            "Loaded {} rows from '{}'",
            records.len(),
            self.csv_path.display()
        );
        Ok(records)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_raw() -> RawRecord {
        RawRecord::new("100", "1.5", "2.0", "0.001", "50", 1000)
    }

    #[test]
    fn test_header_only_file_when_no_rows() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvMetricsWriter::create(dir.path()).unwrap();
        let path = writer.csv_path().to_path_buf();
        writer.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "step,loss,grad_norm,lr,consumed_samples,consumed_tokens\n"
        );

        // Reloading a header-only file gives an empty record set
        let records = CsvMetricsReader::new(dir.path()).load_all().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_raw_field_text_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvMetricsWriter::create(dir.path()).unwrap();
        writer.append(&sample_raw()).unwrap();
        let path = writer.csv_path().to_path_buf();
        writer.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        lines.next(); // header
        // "2.0" must not have collapsed to "2"
        assert_eq!(lines.next().unwrap(), "100,1.5,2.0,0.001,50,1000");
    }

    #[test]
    fn test_roundtrip_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvMetricsWriter::create(dir.path()).unwrap();
        writer.append(&sample_raw()).unwrap();
        writer
            .append(&RawRecord::new("200", "1.25e+00", "1.8", "5e-4", "100", 2000))
            .unwrap();
        writer.finish().unwrap();

        let records = CsvMetricsReader::new(dir.path()).load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            MetricRecord {
                step:             100,
                loss:             1.5,
                grad_norm:        2.0,
                lr:               0.001,
                consumed_samples: 50,
                consumed_tokens:  1000,
            }
        );
        // Scientific notation coerces like any other float text
        assert_eq!(records[1].loss, 1.25);
        assert_eq!(records[1].lr, 0.0005);
    }

    #[test]
    fn test_malformed_cell_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(METRICS_FILE);
        fs::write(
            &path,
            "step,loss,grad_norm,lr,consumed_samples,consumed_tokens\n\
             100,not-a-number,2.0,0.001,50,1000\n",
        )
        .unwrap();

        let err = CsvMetricsReader::new(dir.path()).load_all().unwrap_err();
        assert!(err.to_string().contains("Malformed row"));
    }

    #[test]
    fn test_missing_csv_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvMetricsReader::new(dir.path()).load_all().unwrap_err();
        assert!(err.to_string().contains(METRICS_FILE));
    }
}
