// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw log text to the typed
// column set the renderer consumes.
//
// The pipeline flows in this order:
//
//   training log (text)
//       │
//       ▼
//   LogExtractor      → streams lines, pattern-matches each one
//       │                 (LineParser holds the fixed pattern)
//       ▼
//   CsvMetricsWriter  → one CSV row per match (infra layer)
//       │
//       ▼
//   CsvMetricsReader  → reloads rows with typed coercion (infra)
//       │
//       ▼
//   MetricColumns     → parallel vectors for plotting
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Matches single log lines against the fixed metric pattern
pub mod parser;

/// Streams a log file through the parser into a RecordSink
pub mod extractor;

/// Column-major view of the typed records for the renderer
pub mod columns;
