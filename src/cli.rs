use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity threshold applied when none is configured anywhere.
pub const DEFAULT_ERROR_THRESHOLD: i32 = 2;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum VerbosityLevel {
    /// Only show entries classified as errors
    Quiet,
    /// Show every entry
    #[default]
    Normal,
    /// Show every entry plus a summary
    Verbose,
}

/// Display a SpotBugs XML report on the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "spotbugs-report")]
#[command(about = "Display a SpotBugs XML report on the command line")]
#[command(version)]
pub struct Cli {
    /// Path to XML report generated by SpotBugs
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Entries with a priority at or below this value are treated as errors
    #[arg(
        short = 't',
        long = "error-threshold",
        value_name = "SEVERITY",
        help = "Entries with a priority at or below this value are treated as errors. \
                Possible values are: 0 (treat all entries as warnings), 1, 2 or 3. \
                Note that 1 is most severe and 3 is least severe."
    )]
    pub error_threshold: Option<i32>,

    /// Configuration file (TOML or JSON)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet mode (print error entries only)
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
