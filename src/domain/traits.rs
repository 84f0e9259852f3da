// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour,
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// the pipeline stages stay decoupled from the storage format:
//   - The extractor appends to any RecordSink
//   - The loader side reads from any RecordSource
//   - Only the infra layer knows both are CSV today
//
// This also keeps the extractor unit-testable with an
// in-memory Vec sink, no filesystem required.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;

use crate::domain::record::{MetricRecord, RawRecord};

// ─── RecordSink ───────────────────────────────────────────────────────────────
/// Any component that can receive extracted records one at a time.
///
/// Implementations:
///   - CsvMetricsWriter → appends a row to metrics.csv per record
///   - Vec<RawRecord>   → in-memory collection (used in tests)
pub trait RecordSink {
    /// Append a single record to this sink.
    /// Called once per matched log line, in log order.
    fn append(&mut self, record: &RawRecord) -> Result<()>;
}

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the full typed record set.
///
/// Implementations:
///   - CsvMetricsReader → reads metrics.csv back with strict
///     per-cell type coercion
pub trait RecordSource {
    /// Load all available records from this source, in stored order.
    /// Returns an error if any cell cannot be coerced to its type.
    fn load_all(&self) -> Result<Vec<MetricRecord>>;
}

impl RecordSink for Vec<RawRecord> {
    fn append(&mut self, record: &RawRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}
