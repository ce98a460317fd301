// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `inspect` and `validate`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::{
    inspect_use_case::InspectConfig,
    validate_use_case::ValidateConfig,
};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load examples from a cut-set manifest and print their shape and transcript
    Inspect(InspectArgs),

    /// Check that every cut has exactly one supervision
    Validate(ValidateArgs),
}

/// All arguments for the `inspect` command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Cut-set manifest (.json or .jsonl)
    #[arg(long)]
    pub manifest: PathBuf,

    /// Directory that feature storage paths are resolved against.
    /// Without it the paths in the manifest are used as written.
    #[arg(long)]
    pub root_dir: Option<PathBuf>,

    /// Inspect a single example instead of the first --limit ones
    #[arg(long)]
    pub index: Option<usize>,

    /// How many examples to load when --index is not given
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

/// Convert CLI InspectArgs into the application-layer InspectConfig.
impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig {
            manifest: a.manifest,
            root_dir: a.root_dir,
            index:    a.index,
            limit:    a.limit,
        }
    }
}

/// All arguments for the `validate` command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Cut-set manifest (.json or .jsonl)
    #[arg(long)]
    pub manifest: PathBuf,
}

impl From<ValidateArgs> for ValidateConfig {
    fn from(a: ValidateArgs) -> Self {
        ValidateConfig { manifest: a.manifest }
    }
}
