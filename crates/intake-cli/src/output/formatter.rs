//! Output formatter trait and the result records commands hand to it.

use anyhow::Result;
use serde::Serialize;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format admission verdicts from `check`
    fn format_check_results(&self, verdicts: &[FileVerdict]) -> Result<()>;

    /// Format scanner verdicts from `scan`
    fn format_scan_results(&self, verdicts: &[ScanVerdict]) -> Result<()>;

    /// Format storage names from `sanitize`
    fn format_sanitized(&self, names: &[SanitizedName]) -> Result<()>;

    /// Format the type registry
    fn format_types(&self, types: &[TypeEntry]) -> Result<()>;

    /// Format a single detection
    fn format_detection(&self, detection: &Detection) -> Result<()>;

    /// Format a failed command; always written to stderr
    fn format_error(&self, operation: &str, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Outcome of running both gates on one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileVerdict {
    pub path: String,
    pub declared_name: String,
    pub declared_type: String,
    pub size: u64,
    pub admitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of the content scanner on one file.
#[derive(Debug, Clone, Serialize)]
pub struct ScanVerdict {
    pub path: String,
    pub dangerous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedName {
    pub original: String,
    pub sanitized: String,
}

/// One registry row.
#[derive(Debug, Clone, Serialize)]
pub struct TypeEntry {
    pub content_type: &'static str,
    pub label: &'static str,
    pub extensions: Vec<&'static str>,
    pub max_bytes: u64,
    pub text: bool,
}

/// Content type implied by a file's extension next to the one its bytes
/// carry.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    pub path: String,
    pub size: u64,
    pub expected_type: Option<&'static str>,
    pub detected_type: Option<&'static str>,
    /// Whether the bytes satisfy the content check of `expected_type`.
    pub consistent: bool,
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Rejected,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    /// Completed run where at least one input was refused.
    pub fn rejected(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Rejected,
            data: Some(data),
            error: None,
        }
    }

    /// Command that failed before or instead of producing results.
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
