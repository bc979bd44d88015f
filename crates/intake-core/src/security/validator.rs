//! Upload validation orchestrator.
//!
//! This module provides the `FileValidator` type that runs every admission
//! check for one upload, in a fixed order, and turns the first failure into
//! a verdict.

use crate::AdmissionConfig;
use crate::Rejection;
use crate::Result;
use crate::ValidationRequest;
use crate::ValidationResult;
use crate::formats::MatchOutcome;
use crate::formats::detect;
use crate::formats::registry;
use crate::security::guard::check_name;
use crate::security::sanitize::sanitize_filename_with_limit;
use crate::security::scanner;

/// Runs admission checks for uploads.
///
/// Holds only a borrowed configuration, so one validator can be shared
/// across threads and reused for any number of calls.
///
/// Checks run in this order and the first failure wins:
///
/// 1. empty blob
/// 2. declared type on the allowlist
/// 3. filename guard on the original name
/// 4. magic bytes, or printability for text types
/// 5. size limit of the declared type
///
/// # Examples
///
/// ```
/// use intake_core::AdmissionConfig;
/// use intake_core::ValidationRequest;
/// use intake_core::security::FileValidator;
///
/// let config = AdmissionConfig::default();
/// let validator = FileValidator::new(&config);
///
/// let csv = b"deal,amount\nacme,100\n";
/// let result = validator.validate(&ValidationRequest::new(csv, "deals.csv", "text/csv"));
/// assert!(result.is_valid);
///
/// let result = validator.validate(&ValidationRequest::new(csv, "../deals.csv", "text/csv"));
/// assert!(!result.is_valid);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FileValidator<'a> {
    config: &'a AdmissionConfig,
}

impl<'a> FileValidator<'a> {
    /// Creates a validator.
    #[must_use]
    pub const fn new(config: &'a AdmissionConfig) -> Self {
        Self { config }
    }

    /// Validates one upload. Never panics; every failure is a rejected
    /// verdict.
    pub fn validate(&self, request: &ValidationRequest<'_>) -> ValidationResult {
        match self.admit(request) {
            Ok(sanitized) => {
                tracing::debug!(
                    content_type = request.declared_type,
                    size = request.bytes.len(),
                    sanitized = %sanitized,
                    "upload admitted"
                );
                ValidationResult::accepted(sanitized)
            }
            Err(rejection) => {
                if rejection.is_security_violation() {
                    tracing::warn!(
                        filename = ?request.declared_name,
                        content_type = request.declared_type,
                        reason = rejection.kind(),
                        "upload rejected: {rejection}"
                    );
                } else {
                    tracing::debug!(
                        content_type = request.declared_type,
                        size = request.bytes.len(),
                        reason = rejection.kind(),
                        "upload rejected: {rejection}"
                    );
                }
                ValidationResult::rejected(rejection)
            }
        }
    }

    /// Validates one upload and then runs the content scanner, the two
    /// gates an upload path must pass before storage.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] from validation, or
    /// [`Rejection::DangerousContent`] if the scanner fires.
    pub fn validate_and_scan(&self, request: &ValidationRequest<'_>) -> Result<String> {
        let sanitized = self
            .validate(request)
            .into_result()?
            .sanitized_filename;

        if let Some(finding) = scanner::scan(request.bytes, request.declared_name, self.config) {
            return Err(Rejection::DangerousContent {
                label: finding.label,
            });
        }

        Ok(sanitized)
    }

    fn admit(&self, request: &ValidationRequest<'_>) -> Result<String> {
        let bytes = request.bytes;
        if bytes.is_empty() {
            return Err(Rejection::EmptyFile);
        }

        let signature =
            registry::lookup(request.declared_type).ok_or_else(|| Rejection::TypeNotAllowed {
                content_type: request.declared_type.to_string(),
            })?;

        check_name(request.declared_name)?;

        match detect::check(bytes, signature, self.config) {
            MatchOutcome::Matched => {}
            MatchOutcome::Mismatch => {
                return Err(Rejection::ContentMismatch {
                    claimed: signature.content_type.to_string(),
                    detected: detect::detect(bytes).map(|sig| sig.content_type),
                });
            }
            MatchOutcome::NotText => {
                return Err(Rejection::BinaryContent {
                    claimed: signature.content_type.to_string(),
                });
            }
        }

        let size = bytes.len() as u64;
        if size > signature.max_bytes {
            return Err(Rejection::SizeExceeded {
                size,
                limit: signature.max_bytes,
            });
        }

        Ok(sanitize_filename_with_limit(
            request.declared_name,
            self.config.max_filename_len,
        ))
    }
}
