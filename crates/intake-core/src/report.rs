//! Validation requests and verdicts.

use crate::Rejection;
use crate::Result;

/// One upload to validate, borrowed from the caller for a single call.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRequest<'a> {
    /// Uploaded bytes.
    pub bytes: &'a [u8],
    /// Filename as supplied by the client.
    pub declared_name: &'a str,
    /// Content type as supplied by the client.
    pub declared_type: &'a str,
}

impl<'a> ValidationRequest<'a> {
    /// Creates a request.
    #[must_use]
    pub const fn new(bytes: &'a [u8], declared_name: &'a str, declared_type: &'a str) -> Self {
        Self {
            bytes,
            declared_name,
            declared_type,
        }
    }
}

/// Admission verdict for one upload.
///
/// A valid result always carries a sanitized filename; a rejected one
/// carries the rejection and never a filename. Storage keys must be built
/// from [`sanitized_filename`](Self::sanitized_filename), not from the name
/// the client sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the upload was admitted.
    pub is_valid: bool,

    /// Human-readable reason for a rejection.
    pub error: Option<String>,

    /// Safe storage name, present only when admitted.
    pub sanitized_filename: Option<String>,

    /// Registered type the content actually carries, when it differs from
    /// the declared one.
    pub detected_type: Option<&'static str>,

    /// Typed form of `error`.
    pub rejection: Option<Rejection>,
}

impl ValidationResult {
    /// Builds an admitted verdict.
    #[must_use]
    pub fn accepted(sanitized_filename: String) -> Self {
        Self {
            is_valid: true,
            error: None,
            sanitized_filename: Some(sanitized_filename),
            detected_type: None,
            rejection: None,
        }
    }

    /// Builds a rejected verdict.
    #[must_use]
    pub fn rejected(rejection: Rejection) -> Self {
        let detected_type = match &rejection {
            Rejection::ContentMismatch { detected, .. } => *detected,
            _ => None,
        };
        Self {
            is_valid: false,
            error: Some(rejection.to_string()),
            sanitized_filename: None,
            detected_type,
            rejection: Some(rejection),
        }
    }

    /// Converts the verdict into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of a rejected verdict.
    ///
    /// # Examples
    ///
    /// ```
    /// use intake_core::validate_file;
    ///
    /// let admitted = validate_file(b"%PDF-1.7\n", "deal.pdf", "application/pdf")
    ///     .into_result()
    ///     .unwrap();
    /// assert_eq!(admitted.sanitized_filename, "deal.pdf");
    /// ```
    pub fn into_result(self) -> Result<AdmittedFile> {
        match (self.rejection, self.sanitized_filename) {
            (Some(rejection), _) => Err(rejection),
            (None, Some(sanitized_filename)) => Ok(AdmittedFile { sanitized_filename }),
            (None, None) => Err(Rejection::InvalidFilename {
                name: String::new(),
            }),
        }
    }
}

/// An upload that passed admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmittedFile {
    /// Safe storage name.
    pub sanitized_filename: String,
}
