//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use intake_core::AdmissionConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "intake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate files against their declared type and scan them
    Check(CheckArgs),
    /// Scan files for executable headers and script payloads
    Scan(ScanArgs),
    /// Print the safe storage name for each filename
    Sanitize(SanitizeArgs),
    /// List accepted content types and their size limits
    Types,
    /// Show the expected and detected content type of a file
    Detect(DetectArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Check(_) => "check",
            Self::Scan(_) => "scan",
            Self::Sanitize(_) => "sanitize",
            Self::Types => "types",
            Self::Detect(_) => "detect",
            Self::Completion { .. } => "completion",
        }
    }
}

/// Heuristic tunables shared by `check` and `scan`.
#[derive(clap::Args)]
pub struct TuningArgs {
    /// Bytes sampled by the text printability check (e.g. 8K)
    #[arg(long, value_parser = parse_byte_size)]
    pub text_sample: Option<u64>,

    /// Maximum share of control bytes in a text sample (0.0-1.0)
    #[arg(long, value_parser = parse_ratio)]
    pub max_control_ratio: Option<f64>,

    /// Bytes searched for script markers (e.g. 4K)
    #[arg(long, value_parser = parse_byte_size)]
    pub scan_window: Option<u64>,
}

impl TuningArgs {
    /// Builds an admission config, keeping defaults for unset flags.
    pub fn to_config(&self) -> AdmissionConfig {
        let defaults = AdmissionConfig::default();
        AdmissionConfig {
            text_sample_len: self
                .text_sample
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(defaults.text_sample_len),
            max_control_ratio: self.max_control_ratio.unwrap_or(defaults.max_control_ratio),
            scan_window: self
                .scan_window
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(defaults.scan_window),
            ..defaults
        }
    }
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Files to check
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Declared content type (default: derived from the file extension)
    #[arg(short = 't', long = "type", value_name = "MIME")]
    pub content_type: Option<String>,

    /// Declared filename (default: the file's own name); single FILE only
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    #[command(flatten)]
    pub tuning: TuningArgs,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Files to scan
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub tuning: TuningArgs,
}

#[derive(clap::Args)]
pub struct SanitizeArgs {
    /// Filenames to sanitize
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

#[derive(clap::Args)]
pub struct DetectArgs {
    /// File to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Parse byte size with optional suffix (K, M, G)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
        .and_then(|n| {
            if n == 0 {
                Err("byte size must be greater than zero".to_string())
            } else {
                Ok(n)
            }
        })
}

/// Parse a ratio in 0.0..=1.0
fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid ratio: {s}"))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("ratio must be between 0.0 and 1.0: {s}"))
    }
}
