use crate::domain::record::MetricRecord;

/// Column-major view of the reloaded metrics, ready for plotting.
/// Six parallel vectors, one entry per CSV row, in row order.
#[derive(Debug, Clone)]
pub struct MetricColumns {
    pub step:             Vec<u64>,
    pub loss:             Vec<f64>,
    pub grad_norm:        Vec<f64>,
    pub lr:               Vec<f64>,
    pub consumed_samples: Vec<u64>,
    pub consumed_tokens:  Vec<u64>,
}

const HEADERS: [&str; 6] = [
    "step",
    "loss",
    "grad_norm",
    "lr",
    "consumed_samples",
    "consumed_tokens",
];

impl MetricColumns {
    /// Transpose a row-major record list into parallel columns.
    pub fn from_records(records: &[MetricRecord]) -> Self {
        let mut cols = Self {
            step:             Vec::with_capacity(records.len()),
            loss:             Vec::with_capacity(records.len()),
            grad_norm:        Vec::with_capacity(records.len()),
            lr:               Vec::with_capacity(records.len()),
            consumed_samples: Vec::with_capacity(records.len()),
            consumed_tokens:  Vec::with_capacity(records.len()),
        };
        for r in records {
            cols.step.push(r.step);
            cols.loss.push(r.loss);
            cols.grad_norm.push(r.grad_norm);
            cols.lr.push(r.lr);
            cols.consumed_samples.push(r.consumed_samples);
            cols.consumed_tokens.push(r.consumed_tokens);
        }
        cols
    }

    pub fn len(&self) -> usize {
        self.step.len()
    }

    pub fn is_empty(&self) -> bool {
        self.step.is_empty()
    }

    /// Render the first `n` rows as an aligned text table, header
    /// included. This is the console preview shown after extraction.
    pub fn preview(&self, n: usize) -> String {
        let shown = n.min(self.len());
        let mut rows: Vec<[String; 6]> = Vec::with_capacity(shown + 1);
        rows.push(HEADERS.map(String::from));
        for i in 0..shown {
            rows.push([
                self.step[i].to_string(),
                self.loss[i].to_string(),
                self.grad_norm[i].to_string(),
                self.lr[i].to_string(),
                self.consumed_samples[i].to_string(),
                self.consumed_tokens[i].to_string(),
            ]);
        }

        // Right-align every column to its widest cell
        let mut widths = [0usize; 6];
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row.iter()) {
                *w = (*w).max(cell.len());
            }
        }

        rows.iter()
            .map(|row| {
                row.iter()
                    .zip(widths.iter())
                    .map(|(cell, w)| format!("{:>width$}", cell, width = *w))
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn record(step: u64) -> MetricRecord {
        MetricRecord {
            step,
            loss:             1.5,
            grad_norm:        2.0,
            lr:               0.001,
            consumed_samples: step / 2,
            consumed_tokens:  step * 10,
        }
    }

    #[test]
    fn test_from_records_transposes() {
        let cols = MetricColumns::from_records(&[record(100), record(200)]);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols.step, vec![100, 200]);
        assert_eq!(cols.loss, vec![1.5, 1.5]);
        assert_eq!(cols.consumed_tokens, vec![1000, 2000]);
    }

    #[test]
    fn test_empty_record_set() {
        let cols = MetricColumns::from_records(&[]);
        assert!(cols.is_empty());
        assert_eq!(cols.len(), 0);
    }

    #[test]
    fn test_preview_caps_at_available_rows() {
        let cols = MetricColumns::from_records(&[record(100), record(200)]);
        let preview = cols.preview(5);
        // Header line plus the two data rows, no padding rows
        assert_eq!(preview.lines().count(), 3);
    }

    #[test]
    fn test_preview_contains_header_and_values() {
        let cols = MetricColumns::from_records(&[record(100)]);
        let preview = cols.preview(5);
        let mut lines = preview.lines();
        let header = lines.next().unwrap();
        let row    = lines.next().unwrap();
        assert!(header.contains("grad_norm"));
        assert!(row.contains("100"));
        assert!(row.contains("1.5"));
    }

    #[test]
    fn test_preview_of_empty_columns_is_header_only() {
        let cols = MetricColumns::from_records(&[]);
        assert_eq!(cols.preview(5).lines().count(), 1);
    }
}
