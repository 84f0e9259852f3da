// ============================================================
// Layer 2 — Render Use Case
// ============================================================
// Loads the typed records and draws the five charts:
//   1. Load metrics.csv (unless records are already in memory)
//   2. Transpose records into plotting columns
//   3. Render the four single charts and the composite
//   4. Print the completion message naming the output directory

use anyhow::Result;

use crate::data::columns::MetricColumns;
use crate::domain::record::MetricRecord;
use crate::domain::traits::RecordSource;
use crate::infra::{charts::ChartRenderer, csv_store::CsvMetricsReader};

/// Output location for one render run. Built from CLI args by Layer 1.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Directory holding metrics.csv; the charts land next to it
    pub out_dir: String,
}

pub struct RenderUseCase {
    config: RenderConfig,
}

impl RenderUseCase {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Load metrics.csv and render all charts from it.
    pub fn execute(&self) -> Result<()> {
        let records = CsvMetricsReader::new(&self.config.out_dir).load_all()?;
        self.render(&records)
    }

    /// Render all charts from records already in memory.
    /// The full pipeline uses this so the CSV is read only once.
    pub fn render(&self, records: &[MetricRecord]) -> Result<()> {
        let columns  = MetricColumns::from_records(records);
        let renderer = ChartRenderer::new(&self.config.out_dir)?;
        renderer.render_all(&columns)?;

        println!("📊 All charts saved to {}/", self.config.out_dir);
        Ok(())
    }
}
