use std::path::PathBuf;

use clap::Parser;

pub mod global;

pub use global::OutputFormat;

/// Top-level CLI parser for the `pblint` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pblint",
    version,
    about = "pblint - convention linter for protobuf service definitions"
)]
pub struct Cli {
    /// Schema files to lint
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Include directory used to resolve imports (repeatable)
    #[arg(short = 'I', long = "import-path", value_name = "DIR")]
    pub import_paths: Vec<PathBuf>,

    /// Report format: text, json (defaults to the configured format)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
