// ============================================================
// Layer 4 — Log Extractor
// ============================================================
// Streams a training log line by line and feeds every line that
// matches the metric pattern into a RecordSink.
//
// The log is read through a BufReader, so memory use stays flat
// no matter how large the log grows. Rows reach the sink in log
// order, one append per match, which is what lets the CSV sink
// write incrementally without buffering the whole run.
//
// Failure behaviour:
//   - A line that does not match is skipped silently.
//   - A missing or unreadable input file is fatal.
//   - An I/O or encoding error mid-file is fatal.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading Files)

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
};

use crate::data::parser::LineParser;
use crate::domain::traits::RecordSink;

/// Runs the extraction pass over one log file.
pub struct LogExtractor {
    /// Path to the plain-text training log
    input: String,

    /// The compiled line pattern, built once per extractor
    parser: LineParser,
}

impl LogExtractor {
    /// Create a LogExtractor for the given log path.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input:  input.into(),
            parser: LineParser::new(),
        }
    }

    /// Stream the log and append every matched record to the sink.
    /// Returns the number of rows appended.
    pub fn extract_into(&self, sink: &mut dyn RecordSink) -> Result<usize> {
        let file = File::open(&self.input)
            .with_context(|| format!("Cannot open log file '{}'", self.input))?;
        let reader = BufReader::new(file);

        let mut rows = 0usize;
        for line in reader.lines() {
            let line = line
                .with_context(|| format!("Failed reading '{}'", self.input))?;

            if let Some(record) = self.parser.parse(&line)? {
                sink.append(&record)?;
                rows += 1;
            }
        }

        tracing::info!("Extracted {} metric rows from '{}'", rows, self.input);
        Ok(rows)
    }
}
