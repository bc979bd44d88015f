//! Filename and extension guard.
//!
//! Runs on the name exactly as the client supplied it. Sanitization would
//! neutralize most of what is rejected here, but a hostile name is an
//! auditable event and must fail loudly instead of being laundered.

use crate::Rejection;
use crate::Result;
use crate::formats::registry::last_extension;

/// Executable and script extensions refused regardless of declared type.
pub const DANGEROUS_EXTENSIONS: &[&str] = &[
    "exe", "bat", "cmd", "com", "scr", "msi", "sh", "bash", "ps1", "vbs", "js", "jar", "php", "py",
    "rb", "pl",
];

/// Characters that are reserved on common filesystems or unsafe in URLs and
/// markup.
pub(crate) const RESERVED_CHARS: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

/// Boolean view of [`check_name`], for callers that only need a flag and a
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVerdict {
    /// Whether the name passed the guard.
    pub ok: bool,
    /// Why the name was refused.
    pub reason: Option<String>,
}

/// Parent-directory segment next to a separator, in either slash style.
fn has_traversal(name: &str) -> bool {
    name == ".."
        || name.contains("../")
        || name.contains("..\\")
        || name.ends_with("/..")
        || name.ends_with("\\..")
}

fn has_invalid_pattern(name: &str) -> bool {
    has_traversal(name)
        || (!name.is_empty() && name.chars().all(|c| c == '.'))
        || name.chars().any(|c| c.is_control() || RESERVED_CHARS.contains(&c))
        || name.trim() != name
}

/// Denylisted extension of `name`, lowercased.
///
/// Only the last extension counts, so `document.pdf.exe` yields `exe`.
/// Trailing dots and whitespace are ignored because Windows drops them when
/// the file is opened.
pub fn dangerous_extension(name: &str) -> Option<String> {
    let trimmed = name.trim_end_matches(|c: char| c == '.' || c.is_whitespace());
    let ext = last_extension(trimmed)?.to_ascii_lowercase();
    DANGEROUS_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Checks a client-supplied filename.
///
/// # Errors
///
/// - [`Rejection::InvalidFilename`] for traversal sequences, all-dot names,
///   control or reserved characters, and leading/trailing whitespace
/// - [`Rejection::DangerousExtension`] for executable or script extensions,
///   including double extensions such as `report.pdf.exe`
///
/// # Examples
///
/// ```
/// use intake_core::security::guard::check_name;
///
/// assert!(check_name("report.pdf").is_ok());
/// assert!(check_name("../../etc/passwd").is_err());
/// assert!(check_name("report.pdf.exe").is_err());
/// ```
pub fn check_name(name: &str) -> Result<()> {
    if has_invalid_pattern(name) {
        return Err(Rejection::InvalidFilename {
            name: name.to_string(),
        });
    }

    if let Some(extension) = dangerous_extension(name) {
        return Err(Rejection::DangerousExtension {
            name: name.to_string(),
            extension,
        });
    }

    Ok(())
}

/// Boolean form of [`check_name`].
pub fn is_safe_name(name: &str) -> NameVerdict {
    match check_name(name) {
        Ok(()) => NameVerdict {
            ok: true,
            reason: None,
        },
        Err(rejection) => NameVerdict {
            ok: false,
            reason: Some(rejection.to_string()),
        },
    }
}
