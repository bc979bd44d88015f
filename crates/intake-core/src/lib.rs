//! Admission control for untrusted file uploads.
//!
//! `intake-core` decides, before any parsing or storage, whether an uploaded
//! byte blob is what its declared content type claims, whether its filename
//! is safe to use as a storage key, and whether its bytes carry executable
//! headers or script payloads.
//!
//! An upload path calls [`validate_file`] first and refuses the upload on a
//! rejected verdict. On success it also calls [`is_potentially_dangerous`]
//! and refuses on `true`, then stores the bytes under the returned
//! `sanitized_filename`. [`admit`] does both in one call.
//!
//! # Examples
//!
//! ```
//! use intake_core::is_potentially_dangerous;
//! use intake_core::validate_file;
//!
//! let bytes = b"%PDF-1.7\n1 0 obj\n<< /Type /Catalog >>\nendobj\n";
//! let result = validate_file(bytes, "CIM final.pdf", "application/pdf");
//! assert!(result.is_valid);
//! assert!(!is_potentially_dangerous(bytes, "CIM final.pdf"));
//! assert_eq!(result.sanitized_filename.as_deref(), Some("CIM final.pdf"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod formats;
pub mod report;
pub mod security;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main API types
pub use api::admit;
pub use api::expected_content_type;
pub use api::validate_file;
pub use config::AdmissionConfig;
pub use error::Rejection;
pub use error::Result;
pub use formats::ALLOWED_CONTENT_TYPES;
pub use formats::SIZE_LIMITS;
pub use formats::TypeSignature;
pub use report::AdmittedFile;
pub use report::ValidationRequest;
pub use report::ValidationResult;
pub use security::is_potentially_dangerous;
pub use security::sanitize_filename;
