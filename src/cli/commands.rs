// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `run`, `extract`, `chart`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion for argument values
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::extract_use_case::ExtractConfig;
use crate::application::render_use_case::RenderConfig;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract metrics from a training log and render all charts
    Run(RunArgs),

    /// Extract metrics from a training log into metrics.csv only
    Extract(ExtractArgs),

    /// Render charts from an existing metrics.csv
    Chart(ChartArgs),
}

/// All arguments for the `run` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the plain-text training log to parse
    #[arg(long)]
    pub input: String,

    /// Directory for metrics.csv and the chart PNGs
    #[arg(long, default_value = "output")]
    pub out_dir: String,
}

/// The `run` command drives both halves of the pipeline, so one
/// RunArgs converts into both configs. By reference, since the
/// second conversion still needs the args.
impl From<&RunArgs> for ExtractConfig {
    fn from(a: &RunArgs) -> Self {
        ExtractConfig {
            input:   a.input.clone(),
            out_dir: a.out_dir.clone(),
        }
    }
}

impl From<&RunArgs> for RenderConfig {
    fn from(a: &RunArgs) -> Self {
        RenderConfig {
            out_dir: a.out_dir.clone(),
        }
    }
}

/// All arguments for the `extract` command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to the plain-text training log to parse
    #[arg(long)]
    pub input: String,

    /// Directory for metrics.csv
    #[arg(long, default_value = "output")]
    pub out_dir: String,
}

/// Convert CLI ExtractArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2:
/// the application layer never sees clap types.
impl From<ExtractArgs> for ExtractConfig {
    fn from(a: ExtractArgs) -> Self {
        ExtractConfig {
            input:   a.input,
            out_dir: a.out_dir,
        }
    }
}

/// All arguments for the `chart` command
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Directory holding metrics.csv; charts are written there too
    #[arg(long, default_value = "output")]
    pub out_dir: String,
}

impl From<ChartArgs> for RenderConfig {
    fn from(a: ChartArgs) -> Self {
        RenderConfig { out_dir: a.out_dir }
    }
}
