//! Rejection reasons produced by upload admission checks.

use thiserror::Error;

/// Result type alias using `Rejection`.
pub type Result<T> = std::result::Result<T, Rejection>;

/// Why an upload was refused.
///
/// Every admission check reports failure as one of these values; nothing in
/// the crate panics on hostile input. The `Display` text is the
/// human-readable `error` string carried by
/// [`ValidationResult`](crate::ValidationResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The byte blob was empty.
    #[error("File is empty")]
    EmptyFile,

    /// The declared content type is not on the allowlist.
    #[error(
        "File type '{content_type}' is not allowed. Allowed types: PDF, Excel, CSV, Word, Email, Images"
    )]
    TypeNotAllowed {
        /// The declared content type.
        content_type: String,
    },

    /// The filename contains traversal sequences or unusable characters.
    #[error("Filename contains invalid characters or patterns")]
    InvalidFilename {
        /// The offending filename, as supplied.
        name: String,
    },

    /// The filename ends in an executable or script extension.
    #[error("Filename contains invalid characters or patterns: extension '.{extension}' is not permitted")]
    DangerousExtension {
        /// The filename, as supplied.
        name: String,
        /// The denylisted extension, lowercased and without the dot.
        extension: String,
    },

    /// The leading bytes do not carry any signature of the declared type.
    #[error("File content does not match claimed type. Detected: {}", detected.unwrap_or("unknown"))]
    ContentMismatch {
        /// The declared content type.
        claimed: String,
        /// The registered type whose signature the content does carry.
        detected: Option<&'static str>,
    },

    /// A signature-less text type failed the printability heuristic.
    #[error("File appears to contain invalid or binary content")]
    BinaryContent {
        /// The declared content type.
        claimed: String,
    },

    /// The blob is larger than the type's size limit.
    #[error("File size exceeds limit of {}MB for this file type", limit / (1024 * 1024))]
    SizeExceeded {
        /// Size of the blob in bytes.
        size: u64,
        /// Limit for the declared type in bytes.
        limit: u64,
    },

    /// The content scanner found an executable header or script marker.
    #[error("File content looks executable or scripted ({label})")]
    DangerousContent {
        /// Short description of the signature that matched.
        label: &'static str,
    },
}

impl Rejection {
    /// Returns `true` if this rejection points at a hostile upload rather
    /// than an ordinary user mistake.
    ///
    /// # Examples
    ///
    /// ```
    /// use intake_core::Rejection;
    ///
    /// let err = Rejection::InvalidFilename {
    ///     name: "../../etc/passwd".to_string(),
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// let err = Rejection::EmptyFile;
    /// assert!(!err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidFilename { .. }
                | Self::DangerousExtension { .. }
                | Self::ContentMismatch { .. }
                | Self::DangerousContent { .. }
        )
    }

    /// Short machine-readable classification of the rejection.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyFile => "empty_file",
            Self::TypeNotAllowed { .. } => "type_not_allowed",
            Self::InvalidFilename { .. } | Self::DangerousExtension { .. } => "invalid_filename",
            Self::ContentMismatch { .. } | Self::BinaryContent { .. } => "content_mismatch",
            Self::SizeExceeded { .. } => "size_exceeded",
            Self::DangerousContent { .. } => "dangerous_content",
        }
    }
}
