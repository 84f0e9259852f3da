// ============================================================
// Layer 3 — Metric Record Domain Types
// ============================================================
// Represents one training-run measurement in its two forms:
//
//   RawRecord:    the capture-side form. Field text is kept
//                 verbatim from the log line, so the CSV shows
//                 the log's own formatting (a loss printed as
//                 "2.0" stays "2.0" instead of becoming "2").
//   MetricRecord: the typed form produced when the CSV is read
//                 back, every column coerced to its declared
//                 numeric type.
//
// The token count is the one exception on the raw side: the log
// prints it with thousands separators ("1,234,567"), which the
// parser strips before conversion, so RawRecord already holds it
// as a u64.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

/// One matched log line, fields still in log-text form.
///
/// Produced by the line parser and consumed by the CSV writer.
/// Never read back: reloading goes through MetricRecord.
#[derive(Debug, Clone)]
pub struct RawRecord {
    /// Training iteration counter, digits as printed in the log
    pub step: String,

    /// Train Loss value, verbatim (may carry an exponent)
    pub loss: String,

    /// Grad Norm value, verbatim
    pub grad_norm: String,

    /// Lr value, verbatim
    pub lr: String,

    /// Consumed Samples count, digits as printed
    pub consumed_samples: String,

    /// Consumed Tokens count, thousands separators already
    /// stripped and the digits converted
    pub consumed_tokens: u64,
}

impl RawRecord {
    /// Create a RawRecord from freshly captured field text.
    /// Uses impl Into<String> so callers can pass the regex
    /// capture's &str slices directly.
    pub fn new(
        step:             impl Into<String>,
        loss:             impl Into<String>,
        grad_norm:        impl Into<String>,
        lr:               impl Into<String>,
        consumed_samples: impl Into<String>,
        consumed_tokens:  u64,
    ) -> Self {
        Self {
            step:             step.into(),
            loss:             loss.into(),
            grad_norm:        grad_norm.into(),
            lr:               lr.into(),
            consumed_samples: consumed_samples.into(),
            consumed_tokens,
        }
    }
}

/// One metric record with typed columns, as reloaded from CSV.
///
/// Field order matches the CSV header
/// (step,loss,grad_norm,lr,consumed_samples,consumed_tokens),
/// so serde can drive both serialization and the strict
/// per-cell coercion on read: any cell that fails to parse as
/// its declared type surfaces as a deserialize error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Training iteration counter. Non-decreasing across a log,
    /// not necessarily strictly increasing or contiguous.
    pub step: u64,

    /// Training loss at this step
    pub loss: f64,

    /// Gradient norm at this step
    pub grad_norm: f64,

    /// Learning rate at this step
    pub lr: f64,

    /// Cumulative sample count at this step
    pub consumed_samples: u64,

    /// Cumulative token count at this step
    pub consumed_tokens: u64,
}
