//! High-level public API for upload admission.
//!
//! These functions use [`AdmissionConfig::default`]; build a
//! [`FileValidator`] directly to change the tunables.

use crate::AdmissionConfig;
use crate::Result;
use crate::ValidationRequest;
use crate::ValidationResult;
use crate::formats::registry;
use crate::security::FileValidator;

/// Validates an upload against its declared type.
///
/// This is the first gate an upload path must call. A rejected result must
/// end the upload; an admitted one must still pass
/// [`is_potentially_dangerous`](crate::is_potentially_dangerous) before
/// storage, and storage must use `sanitized_filename`.
///
/// # Arguments
///
/// * `bytes` - The uploaded bytes
/// * `original_filename` - Filename as sent by the client
/// * `declared_content_type` - Content type as sent by the client
///
/// # Examples
///
/// ```
/// use intake_core::validate_file;
///
/// let result = validate_file(b"%PDF-1.7\n...", "deal memo.pdf", "application/pdf");
/// assert!(result.is_valid);
/// assert_eq!(result.sanitized_filename.as_deref(), Some("deal memo.pdf"));
///
/// let result = validate_file(b"%PDF-1.7\n...", "deal memo.pdf.exe", "application/pdf");
/// assert!(!result.is_valid);
/// ```
pub fn validate_file(
    bytes: &[u8],
    original_filename: &str,
    declared_content_type: &str,
) -> ValidationResult {
    let config = AdmissionConfig::default();
    FileValidator::new(&config).validate(&ValidationRequest::new(
        bytes,
        original_filename,
        declared_content_type,
    ))
}

/// Runs both gates, validation then the content scanner, and returns the
/// storage name of an admitted upload.
///
/// # Errors
///
/// Returns the [`Rejection`](crate::Rejection) that refused the upload.
///
/// # Examples
///
/// ```
/// use intake_core::Rejection;
/// use intake_core::admit;
///
/// let name = admit(b"deal,amount\nacme,100\n", "deals.csv", "text/csv").unwrap();
/// assert_eq!(name, "deals.csv");
///
/// let err = admit(b"<?php system($_GET['c']); ?>", "deals.csv", "text/csv").unwrap_err();
/// assert!(matches!(err, Rejection::DangerousContent { .. }));
/// ```
pub fn admit(bytes: &[u8], original_filename: &str, declared_content_type: &str) -> Result<String> {
    let config = AdmissionConfig::default();
    FileValidator::new(&config).validate_and_scan(&ValidationRequest::new(
        bytes,
        original_filename,
        declared_content_type,
    ))
}

/// Content type registered for the extension of `filename`.
///
/// Case-insensitive; returns `None` for unknown or missing extensions.
///
/// # Examples
///
/// ```
/// use intake_core::expected_content_type;
///
/// assert_eq!(expected_content_type("IMAGE.PNG"), Some("image/png"));
/// assert_eq!(expected_content_type("file.xyz"), None);
/// ```
#[must_use]
pub fn expected_content_type(filename: &str) -> Option<&'static str> {
    registry::content_type_for_extension(filename)
}
