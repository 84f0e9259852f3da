// ============================================================
// Layer 4 — Log Line Parser
// ============================================================
// Matches one log line against the fixed metric pattern.
//
// What the pattern requires, in order, on a single line:
//   step=<int> ... Train Loss: <num> ... Grad Norm: <num> ...
//   Lr: <num> ... Consumed Samples: <int>, Consumed Video
//   Samples: <int>, Consumed Tokens: <int with commas>
//
// Notes on the grammar:
//   - Search is unanchored: any text may appear before,
//     between, or after the captured fields.
//   - The gaps between fields are lazy (.*?), so each capture
//     binds to the first occurrence after the previous one.
//   - <num> uses the permissive class [0-9.eE+-]; strict
//     well-formedness is enforced later, when the CSV is
//     reloaded with typed coercion.
//   - The three trailing counters are joined by literal ", "
//     separators. Consumed Video Samples must be present but
//     its value is discarded.
//   - The token count may contain thousands separators,
//     stripped here before conversion to u64.
//
// A line where any required field is absent simply fails the
// match and is skipped. No count of skipped lines is kept.
//
// Reference: regex crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use regex::Regex;

use crate::domain::record::RawRecord;

/// The fixed extraction pattern. Capture groups, in order:
/// step, loss, grad_norm, lr, consumed_samples, consumed_tokens.
const LOG_PATTERN: &str = concat!(
    r"step=(\d+).*?Train Loss:\s*([0-9.eE+-]+).*?Grad Norm:\s*([0-9.eE+-]+).*?",
    r"Lr:\s*([0-9.eE+-]+).*?Consumed Samples:\s*(\d+), Consumed Video Samples:\s*\d+, Consumed Tokens:\s*([0-9,]+)",
);

/// Matches log lines against the fixed metric pattern and turns
/// the lines that carry all five metrics into RawRecords.
pub struct LineParser {
    pattern: Regex,
}

impl LineParser {
    /// Compile the fixed pattern.
    pub fn new() -> Self {
        Self {
            // A literal pattern: compilation cannot fail at runtime
            pattern: Regex::new(LOG_PATTERN).expect("valid regex"),
        }
    }

    /// Try to parse one log line.
    ///
    /// Returns Ok(None) when the line does not match (the normal
    /// case for most lines of a training log), Ok(Some(record))
    /// on a match. The only error path is a token count whose
    /// digits overflow u64 after separator stripping.
    ///
    /// All other fields are kept as the exact matched text; the
    /// CSV they land in should show the log's own formatting.
    pub fn parse(&self, line: &str) -> Result<Option<RawRecord>> {
        let caps = match self.pattern.captures(line) {
            Some(c) => c,
            None => return Ok(None),
        };

        // Groups 1..=6 are all non-optional, so indexing is safe
        // whenever captures() returned Some.
        let tokens_text = &caps[6];
        let consumed_tokens = tokens_text
            .replace(',', "")
            .parse::<u64>()
            .with_context(|| format!("Token count '{}' out of range", tokens_text))?;

        Ok(Some(RawRecord::new(
            &caps[1],
            &caps[2],
            &caps[3],
            &caps[4],
            &caps[5],
            consumed_tokens,
        )))
    }
}

/// Implement Default so LineParser can be created with LineParser::default()
impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// Reference: Rust Book §11 (Writing Automated Tests)
#[cfg(test)]
mod tests {
    use super::*;

    /// A realistic fully matching line in the expected log format
    const FULL_LINE: &str = "2025-07-07 10:15:42 step=100 | Train Loss: 1.5 | \
         Grad Norm: 2.0 | Lr: 0.001 | \
         Consumed Samples: 50, Consumed Video Samples: 0, Consumed Tokens: 1,000";

    #[test]
    fn test_full_line_matches() {
        let p = LineParser::new();
        let rec = p.parse(FULL_LINE).unwrap().unwrap();
        assert_eq!(rec.step, "100");
        assert_eq!(rec.loss, "1.5");
        assert_eq!(rec.grad_norm, "2.0");
        assert_eq!(rec.lr, "0.001");
        assert_eq!(rec.consumed_samples, "50");
        assert_eq!(rec.consumed_tokens, 1000);
    }

    #[test]
    fn test_comma_separated_tokens_stripped() {
        let p = LineParser::new();
        let line = "step=7 Train Loss: 0.9 Grad Norm: 1.1 Lr: 2e-4 \
             Consumed Samples: 3, Consumed Video Samples: 1, Consumed Tokens: 1,234,567";
        let rec = p.parse(line).unwrap().unwrap();
        assert_eq!(rec.consumed_tokens, 1_234_567);
    }

    #[test]
    fn test_token_count_overflowing_u64_is_error() {
        let p = LineParser::new();
        // 23 digits; u64::MAX has 20. The line itself matches, so
        // this exercises the one error path the parser has.
        let line = "step=1 Train Loss: 1.0 Grad Norm: 1.0 Lr: 0.001 \
             Consumed Samples: 1, Consumed Video Samples: 0, \
             Consumed Tokens: 99999999999999999999999";
        let err = p.parse(line).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_field_text_kept_verbatim() {
        let p = LineParser::new();
        let rec = p.parse(FULL_LINE).unwrap().unwrap();
        // "2.0" must survive as text; a float round-trip would print "2"
        assert_eq!(rec.grad_norm, "2.0");
    }

    #[test]
    fn test_scientific_notation_accepted() {
        let p = LineParser::new();
        let line = "step=42 Train Loss: 2.345e+00 Grad Norm: 1.9E-2 Lr: 1.5e-05 \
             Consumed Samples: 84, Consumed Video Samples: 0, Consumed Tokens: 860,160";
        let rec = p.parse(line).unwrap().unwrap();
        assert_eq!(rec.loss, "2.345e+00");
        assert_eq!(rec.lr, "1.5e-05");
    }

    #[test]
    fn test_missing_any_field_skips_line() {
        let p = LineParser::new();
        // Each line drops exactly one required piece of FULL_LINE
        let missing = [
            // no step=
            "Train Loss: 1.5 Grad Norm: 2.0 Lr: 0.001 \
             Consumed Samples: 50, Consumed Video Samples: 0, Consumed Tokens: 1,000",
            // no Train Loss
            "step=100 Grad Norm: 2.0 Lr: 0.001 \
             Consumed Samples: 50, Consumed Video Samples: 0, Consumed Tokens: 1,000",
            // no Grad Norm
            "step=100 Train Loss: 1.5 Lr: 0.001 \
             Consumed Samples: 50, Consumed Video Samples: 0, Consumed Tokens: 1,000",
            // no Lr
            "step=100 Train Loss: 1.5 Grad Norm: 2.0 \
             Consumed Samples: 50, Consumed Video Samples: 0, Consumed Tokens: 1,000",
            // no Consumed Samples
            "step=100 Train Loss: 1.5 Grad Norm: 2.0 Lr: 0.001 \
             Consumed Video Samples: 0, Consumed Tokens: 1,000",
            // no Consumed Tokens
            "step=100 Train Loss: 1.5 Grad Norm: 2.0 Lr: 0.001 \
             Consumed Samples: 50, Consumed Video Samples: 0",
        ];
        for line in missing {
            assert!(p.parse(line).unwrap().is_none(), "should skip: {}", line);
        }
    }

    #[test]
    fn test_counter_separators_are_literal() {
        let p = LineParser::new();
        // The three counters must be joined by ", " exactly;
        // a different separator breaks the match
        let line = "step=100 Train Loss: 1.5 Grad Norm: 2.0 Lr: 0.001 \
             Consumed Samples: 50 | Consumed Video Samples: 0 | Consumed Tokens: 1,000";
        assert!(p.parse(line).unwrap().is_none());
    }

    #[test]
    fn test_surrounding_text_ignored() {
        let p = LineParser::new();
        let line = format!("[rank0] INFO {} (elapsed 0.42s)", FULL_LINE);
        let rec = p.parse(&line).unwrap().unwrap();
        assert_eq!(rec.step, "100");
    }

    #[test]
    fn test_empty_line_skipped() {
        let p = LineParser::new();
        assert!(p.parse("").unwrap().is_none());
    }
}
