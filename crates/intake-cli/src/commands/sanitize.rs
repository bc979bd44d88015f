//! Sanitize command implementation

use crate::cli::SanitizeArgs;
use crate::output::OutputFormatter;
use crate::output::SanitizedName;
use anyhow::Result;
use intake_core::sanitize_filename;

pub fn execute(args: &SanitizeArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let names: Vec<SanitizedName> = args
        .names
        .iter()
        .map(|original| SanitizedName {
            original: original.clone(),
            sanitized: sanitize_filename(original),
        })
        .collect();

    formatter.format_sanitized(&names)
}
