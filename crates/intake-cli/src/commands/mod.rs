//! Subcommand implementations.

pub mod check;
pub mod completion;
pub mod detect;
pub mod sanitize;
pub mod scan;
pub mod types;

use std::path::Path;

/// Name a file was uploaded under, taken from its final path component.
pub(crate) fn upload_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
