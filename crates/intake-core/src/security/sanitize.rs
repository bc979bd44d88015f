//! Filename sanitization.

use crate::config::DEFAULT_MAX_FILENAME_LEN;
use crate::formats::registry::last_extension;
use crate::security::guard::RESERVED_CHARS;

/// Normalizes an arbitrary filename into a safe storage-key component.
///
/// Never fails. The output is non-empty, contains no `/`, `\` or control
/// characters (C0, DEL, C1), and is at most 255 characters long. Unicode
/// letters and emoji are kept as they are.
///
/// # Examples
///
/// ```
/// use intake_core::sanitize_filename;
///
/// assert_eq!(sanitize_filename("  report.pdf  "), "report.pdf");
/// assert!(!sanitize_filename("../../../etc/passwd").contains('/'));
/// assert!(sanitize_filename("").starts_with("file_"));
/// ```
pub fn sanitize_filename(name: &str) -> String {
    sanitize_filename_with_limit(name, DEFAULT_MAX_FILENAME_LEN)
}

/// [`sanitize_filename`] with an explicit length bound in characters.
pub fn sanitize_filename_with_limit(name: &str, max_len: usize) -> String {
    let max_len = max_len.max(1);
    let cleaned: String = name
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| {
            if c == '/' || c == '\\' || RESERVED_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        return placeholder_name(max_len);
    }

    truncate_keeping_extension(trimmed, max_len)
}

/// `file_` plus a random token.
fn placeholder_name(max_len: usize) -> String {
    let mut name = format!("file_{}", uuid::Uuid::new_v4().simple());
    name.truncate(max_len);
    name
}

fn truncate_keeping_extension(name: &str, max_len: usize) -> String {
    let total = name.chars().count();
    if total <= max_len {
        return name.to_string();
    }

    // The cut can land after a space or dot; trimming again keeps the
    // output a fixed point of sanitization.
    let ext_len = last_extension(name).map_or(0, |ext| ext.chars().count() + 1);
    if ext_len == 0 || ext_len >= max_len {
        let head: String = name.chars().take(max_len).collect();
        return trim_trailing(&head).to_string();
    }

    let base: String = name.chars().take(max_len - ext_len).collect();
    let ext: String = name.chars().skip(total - ext_len).collect();
    format!("{}{ext}", trim_trailing(&base))
}

fn trim_trailing(name: &str) -> &str {
    name.trim_end_matches(|c: char| c == '.' || c.is_whitespace())
}
