//! JSON output formatter for machine-readable results.

use super::formatter::Detection;
use super::formatter::FileVerdict;
use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use super::formatter::SanitizedName;
use super::formatter::ScanVerdict;
use super::formatter::TypeEntry;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_check_results(&self, verdicts: &[FileVerdict]) -> Result<()> {
        let output = if verdicts.iter().all(|v| v.admitted) {
            JsonOutput::success("check", verdicts)
        } else {
            JsonOutput::rejected("check", verdicts)
        };
        Self::output(&output)
    }

    fn format_scan_results(&self, verdicts: &[ScanVerdict]) -> Result<()> {
        let output = if verdicts.iter().any(|v| v.dangerous) {
            JsonOutput::rejected("scan", verdicts)
        } else {
            JsonOutput::success("scan", verdicts)
        };
        Self::output(&output)
    }

    fn format_sanitized(&self, names: &[SanitizedName]) -> Result<()> {
        Self::output(&JsonOutput::success("sanitize", names))
    }

    fn format_types(&self, types: &[TypeEntry]) -> Result<()> {
        Self::output(&JsonOutput::success("types", types))
    }

    fn format_detection(&self, detection: &Detection) -> Result<()> {
        Self::output(&JsonOutput::success("detect", detection))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error(operation, format!("{error:#}"));
        if let Ok(json) = serde_json::to_string_pretty(&output) {
            let _ = writeln!(io::stderr(), "{json}");
        }
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningMessage {
            warning: String,
        }

        // Stderr keeps stdout a single JSON document.
        let output = JsonOutput::success(
            "unknown",
            WarningMessage {
                warning: message.to_string(),
            },
        );
        if let Ok(json) = serde_json::to_string(&output) {
            let _ = writeln!(io::stderr(), "{json}");
        }
    }
}
