//! Error conversion utilities for CLI.
//!
//! Converts intake-core's typed rejections (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Context;
use anyhow::anyhow;
use intake_core::Rejection;
use std::path::Path;

/// Converts a `Rejection` to a user-friendly anyhow error with context
pub fn convert_rejection(rejection: Rejection, file: &Path) -> anyhow::Error {
    match rejection {
        Rejection::EmptyFile => {
            anyhow!(
                "Upload '{}' is empty\n\
                 HINT: Zero-byte files are never admitted.",
                file.display()
            )
        }
        Rejection::TypeNotAllowed { content_type } => {
            anyhow!(
                "Upload '{}' declares unsupported type '{}'\n\
                 HINT: Run `intake types` to list accepted content types, or pass --type.",
                file.display(),
                content_type
            )
        }
        Rejection::InvalidFilename { name } => {
            anyhow!(
                "Security violation: Upload '{}' has an unsafe filename {:?}\n\
                 HINT: Run `intake sanitize` to see the name it would be stored under.",
                file.display(),
                name
            )
        }
        Rejection::DangerousExtension { name, extension } => {
            anyhow!(
                "Security violation: Upload '{}' is named {:?} with executable extension '.{}'\n\
                 HINT: Scripts and executables are never admitted, whatever their content.",
                file.display(),
                name,
                extension
            )
        }
        Rejection::ContentMismatch { claimed, detected } => {
            anyhow!(
                "Security violation: Upload '{}' does not look like '{}' (detected: {})\n\
                 HINT: The file may have been renamed. Run `intake detect` to inspect it.",
                file.display(),
                claimed,
                detected.unwrap_or("unknown")
            )
        }
        Rejection::BinaryContent { claimed } => {
            anyhow!(
                "Upload '{}' declared as '{}' contains binary data\n\
                 HINT: Use --max-control-ratio to tolerate more control bytes if legitimate.",
                file.display(),
                claimed
            )
        }
        Rejection::SizeExceeded { size, limit } => {
            anyhow!(
                "Upload '{}' is {} bytes, over the {}MB limit for its type\n\
                 HINT: Size limits are fixed per content type. Run `intake types` to list them.",
                file.display(),
                size,
                limit / 1024 / 1024
            )
        }
        Rejection::DangerousContent { label } => {
            anyhow!(
                "Security violation: Upload '{}' contains {}\n\
                 HINT: This file may be malicious. Do not store it.",
                file.display(),
                label
            )
        }
    }
}

/// Reads an upload from disk with the path attached to any I/O error
pub fn read_upload(file: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(file).with_context(|| format!("Failed to read '{}'", file.display()))
}
