// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Handles the concerns that touch the filesystem and external
// formats:
//
//   csv_store.rs — metrics.csv persistence
//                  Writes one row per matched log line through
//                  the RecordSink trait and reads the file back
//                  into typed records through RecordSource.
//
//   charts.rs    — PNG chart rendering
//                  Draws the four single-metric charts and the
//                  3x2 composite with plotters, using a bundled
//                  TTF so no system fonts are needed.
//
// Why is this a separate layer?
//   The data layer describes what the pipeline steps ARE;
//   this layer knows the concrete formats (CSV dialect, PNG
//   output) and could be swapped without touching the rest
//   (e.g. Parquet instead of CSV, SVG instead of PNG).
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// metrics.csv writer and typed reader
pub mod csv_store;

/// Chart rendering with plotters
pub mod charts;
