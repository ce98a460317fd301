// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and prints results.
// All work is delegated to Layer 2 (application).
//
//   1. `inspect`  — load examples and print one JSON line each
//   2. `validate` — list cuts that break the one-supervision rule
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use commands::{Commands, InspectArgs, ValidateArgs};

/// clap reads the fields and generates the argument parser.
#[derive(Parser, Debug)]
#[command(
    name = "asr-dataset",
    version,
    about = "Inspect and validate speech recognition datasets built from cut-set manifests."
)]
pub struct Cli {
    /// The subcommand to run (inspect or validate)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args)  => run_inspect(args),
            Commands::Validate(args) => run_validate(args),
        }
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    tracing::info!("Inspecting '{}'", args.manifest.display());
    let summaries = InspectUseCase::new(args.into()).execute()?;

    for s in &summaries {
        println!("{}", serde_json::to_string(s)?);
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    use crate::application::validate_use_case::ValidateUseCase;

    let report = ValidateUseCase::new(args.into()).execute()?;

    for problem in &report.problems {
        println!("{problem}");
    }
    if !report.is_clean() {
        bail!(
            "{} of {} cuts are not single-supervision examples",
            report.problems.len(),
            report.total_cuts
        );
    }
    println!("All {} cuts are valid.", report.total_cuts);
    Ok(())
}
