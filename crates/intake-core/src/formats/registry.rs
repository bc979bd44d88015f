//! Accepted upload types.
//!
//! The registry is the single source of truth for the allowlist: a content
//! type that is not listed here is refused before any byte is inspected.
//! Everything in this module is `const` data and is shared read-only by all
//! callers.

const MIB: u64 = 1024 * 1024;

/// Size limit applied to content types the registry does not know.
pub const DEFAULT_SIZE_LIMIT: u64 = 50 * MIB;

/// ZIP local header, empty archive and spanned archive markers.
///
/// Office Open XML documents are ZIP containers.
const ZIP_SIGNATURES: &[&[u8]] = &[b"PK\x03\x04", b"PK\x05\x06", b"PK\x07\x08"];

/// OLE2 compound file header used by legacy Office and Outlook formats.
const OLE_SIGNATURES: &[&[u8]] = &[&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]];

/// One accepted content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSignature {
    /// Canonical MIME type, lowercase.
    pub content_type: &'static str,

    /// Human-facing family name ("PDF", "Excel", ...).
    pub label: &'static str,

    /// Alternative leading-byte signatures. Empty for text formats, which are
    /// checked for printability instead.
    pub magic_prefixes: &'static [&'static [u8]],

    /// Canonical extensions without the dot; the first one is preferred.
    pub extensions: &'static [&'static str],

    /// Largest accepted upload in bytes.
    pub max_bytes: u64,
}

impl TypeSignature {
    /// Returns `true` for signature-less text formats.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        self.magic_prefixes.is_empty()
    }
}

const TYPES: [TypeSignature; 10] = [
    TypeSignature {
        content_type: "application/pdf",
        label: "PDF",
        magic_prefixes: &[b"%PDF"],
        extensions: &["pdf"],
        max_bytes: 100 * MIB,
    },
    TypeSignature {
        content_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        label: "Excel",
        magic_prefixes: ZIP_SIGNATURES,
        extensions: &["xlsx"],
        max_bytes: 50 * MIB,
    },
    TypeSignature {
        content_type: "application/vnd.ms-excel",
        label: "Excel",
        magic_prefixes: OLE_SIGNATURES,
        extensions: &["xls"],
        max_bytes: 50 * MIB,
    },
    TypeSignature {
        content_type: "text/csv",
        label: "CSV",
        magic_prefixes: &[],
        extensions: &["csv"],
        max_bytes: 20 * MIB,
    },
    TypeSignature {
        content_type: "application/msword",
        label: "Word",
        magic_prefixes: OLE_SIGNATURES,
        extensions: &["doc"],
        max_bytes: 25 * MIB,
    },
    TypeSignature {
        content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        label: "Word",
        magic_prefixes: ZIP_SIGNATURES,
        extensions: &["docx"],
        max_bytes: 25 * MIB,
    },
    TypeSignature {
        content_type: "application/vnd.ms-outlook",
        label: "Email",
        magic_prefixes: OLE_SIGNATURES,
        extensions: &["msg"],
        max_bytes: 25 * MIB,
    },
    TypeSignature {
        content_type: "message/rfc822",
        label: "Email",
        magic_prefixes: &[],
        extensions: &["eml"],
        max_bytes: 10 * MIB,
    },
    TypeSignature {
        content_type: "image/jpeg",
        label: "Image",
        magic_prefixes: &[&[0xFF, 0xD8, 0xFF]],
        extensions: &["jpg", "jpeg"],
        max_bytes: 10 * MIB,
    },
    TypeSignature {
        content_type: "image/png",
        label: "Image",
        magic_prefixes: &[&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]],
        extensions: &["png"],
        max_bytes: 10 * MIB,
    },
];

/// Every accepted content type, in detection order.
pub static REGISTRY: [TypeSignature; TYPES.len()] = TYPES;

/// The allowlisted content types.
pub const ALLOWED_CONTENT_TYPES: [&str; TYPES.len()] = {
    let mut out = [""; TYPES.len()];
    let mut i = 0;
    while i < TYPES.len() {
        out[i] = TYPES[i].content_type;
        i += 1;
    }
    out
};

/// Per-type size limits in bytes.
pub const SIZE_LIMITS: [(&str, u64); TYPES.len()] = {
    let mut out = [("", 0); TYPES.len()];
    let mut i = 0;
    while i < TYPES.len() {
        out[i] = (TYPES[i].content_type, TYPES[i].max_bytes);
        i += 1;
    }
    out
};

/// Strips MIME parameters (`; charset=...`) and surrounding whitespace.
fn essence(content_type: &str) -> &str {
    content_type
        .split_once(';')
        .map_or(content_type, |(head, _)| head)
        .trim()
}

/// Looks up the signature for a declared content type.
///
/// Matching is case-insensitive and ignores MIME parameters, so
/// `Text/CSV; charset=utf-8` resolves to `text/csv`.
///
/// # Examples
///
/// ```
/// use intake_core::formats::registry::lookup;
///
/// assert_eq!(lookup("application/pdf").map(|s| s.label), Some("PDF"));
/// assert!(lookup("application/x-msdownload").is_none());
/// ```
#[must_use]
pub fn lookup(content_type: &str) -> Option<&'static TypeSignature> {
    let wanted = essence(content_type);
    REGISTRY
        .iter()
        .find(|sig| sig.content_type.eq_ignore_ascii_case(wanted))
}

/// Size limit for a content type, or [`DEFAULT_SIZE_LIMIT`] if unknown.
#[must_use]
pub fn size_limit_for(content_type: &str) -> u64 {
    lookup(content_type).map_or(DEFAULT_SIZE_LIMIT, |sig| sig.max_bytes)
}

/// Preferred extension (without dot) for a content type.
#[must_use]
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    lookup(content_type).and_then(|sig| sig.extensions.first().copied())
}

/// Returns the last extension token of `filename`, without the dot.
///
/// A name without a dot, or ending in one, has no extension.
pub(crate) fn last_extension(filename: &str) -> Option<&str> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() { None } else { Some(ext) }
}

/// Content type registered for the extension of `filename`.
///
/// Case-insensitive and suffix-based: only the last extension counts.
///
/// # Examples
///
/// ```
/// use intake_core::formats::registry::content_type_for_extension;
///
/// assert_eq!(content_type_for_extension("REPORT.PDF"), Some("application/pdf"));
/// assert_eq!(content_type_for_extension("noextension"), None);
/// ```
#[must_use]
pub fn content_type_for_extension(filename: &str) -> Option<&'static str> {
    let ext = last_extension(filename)?;
    REGISTRY
        .iter()
        .find(|sig| sig.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .map(|sig| sig.content_type)
}
