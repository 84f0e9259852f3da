// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `run`     — extract a log and render all charts
//   2. `extract` — extract a log into metrics.csv only
//   3. `chart`   — render charts from an existing metrics.csv
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ChartArgs, Commands, ExtractArgs, RunArgs};

use crate::application::extract_use_case::{ExtractConfig, ExtractUseCase};
use crate::application::render_use_case::{RenderConfig, RenderUseCase};

/// The main CLI struct. clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "train-log-charts",
    version = "0.1.0",
    about = "Extract training metrics from a log into CSV, then render loss/LR/grad-norm/token charts."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin: it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run(args)     => run_pipeline(args),
            Commands::Extract(args) => run_extract(args),
            Commands::Chart(args)   => run_chart(args),
        }
    }
}

/// Handles the `run` subcommand: extraction followed by rendering.
/// The typed records from extraction feed straight into the
/// renderer, so metrics.csv is written once and read once.
fn run_pipeline(args: RunArgs) -> Result<()> {
    tracing::info!("Starting full pipeline for '{}'", args.input);

    let extract = ExtractUseCase::new(ExtractConfig::from(&args));
    let records = extract.execute()?;

    let render = RenderUseCase::new(RenderConfig::from(&args));
    render.render(&records)
}

/// Handles the `extract` subcommand.
/// Converts CLI args into an ExtractConfig and hands off to Layer 2.
fn run_extract(args: ExtractArgs) -> Result<()> {
    let use_case = ExtractUseCase::new(args.into());
    use_case.execute()?;
    Ok(())
}

/// Handles the `chart` subcommand.
/// Renders the five charts from a previously extracted metrics.csv.
fn run_chart(args: ChartArgs) -> Result<()> {
    let use_case = RenderUseCase::new(args.into());
    use_case.execute()
}
