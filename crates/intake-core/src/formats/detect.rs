//! Magic-byte matching.
//!
//! Binary formats are recognised by an exact leading-byte prefix; text
//! formats, which have no signature, by a printability heuristic over a
//! bounded sample. Neither check parses the document: they only prove that
//! the header is consistent with the claimed container.

use crate::AdmissionConfig;
use crate::formats::registry::REGISTRY;
use crate::formats::registry::TypeSignature;

/// Outcome of checking a blob against one signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Leading bytes carry one of the signature's prefixes, or the sample
    /// reads as text for a signature-less type.
    Matched,
    /// Leading bytes carry none of the prefixes (or the blob is empty).
    Mismatch,
    /// The signature-less type's sample is dominated by control bytes.
    NotText,
}

impl MatchOutcome {
    /// Returns `true` for [`MatchOutcome::Matched`].
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched)
    }
}

/// Returns `true` if `bytes` is consistent with `signature` under the
/// default configuration.
///
/// # Examples
///
/// ```
/// use intake_core::formats::detect::matches;
/// use intake_core::formats::registry::lookup;
///
/// let pdf = lookup("application/pdf").unwrap();
/// assert!(matches(b"%PDF-1.7\n", pdf));
/// assert!(!matches(b"MZ\x90\x00", pdf));
/// assert!(!matches(b"", pdf));
/// ```
#[must_use]
pub fn matches(bytes: &[u8], signature: &TypeSignature) -> bool {
    check(bytes, signature, &AdmissionConfig::default()).is_match()
}

/// Checks `bytes` against `signature`.
///
/// An empty blob never matches. With prefixes, any one alternative must
/// equal the leading bytes exactly; without, at most
/// `config.max_control_ratio` of the first `config.text_sample_len` bytes
/// may be control bytes.
#[must_use]
pub fn check(bytes: &[u8], signature: &TypeSignature, config: &AdmissionConfig) -> MatchOutcome {
    if bytes.is_empty() {
        return MatchOutcome::Mismatch;
    }

    if signature.is_text() {
        return if looks_like_text(bytes, config) {
            MatchOutcome::Matched
        } else {
            MatchOutcome::NotText
        };
    }

    if has_any_prefix(bytes, signature.magic_prefixes) {
        MatchOutcome::Matched
    } else {
        MatchOutcome::Mismatch
    }
}

/// Finds the first registered binary type whose signature `bytes` carries.
///
/// Text types are never reported: printable bytes do not identify a format.
/// Types sharing a container (XLS, DOC and MSG are all OLE2) resolve to the
/// first one in registry order.
///
/// # Examples
///
/// ```
/// use intake_core::formats::detect::detect;
///
/// let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
/// assert_eq!(detect(&png).map(|s| s.content_type), Some("image/png"));
/// assert!(detect(b"hello").is_none());
/// ```
#[must_use]
pub fn detect(bytes: &[u8]) -> Option<&'static TypeSignature> {
    REGISTRY
        .iter()
        .filter(|sig| !sig.is_text())
        .find(|sig| has_any_prefix(bytes, sig.magic_prefixes))
}

pub(crate) fn has_any_prefix(bytes: &[u8], prefixes: &[&[u8]]) -> bool {
    prefixes.iter().any(|prefix| bytes.starts_with(prefix))
}

/// Whitespace control bytes that legitimately occur in text.
const fn is_text_whitespace(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Printability heuristic over a bounded leading sample.
pub(crate) fn looks_like_text(bytes: &[u8], config: &AdmissionConfig) -> bool {
    let sample = &bytes[..bytes.len().min(config.text_sample_len)];
    if sample.is_empty() {
        return false;
    }

    let control = sample
        .iter()
        .filter(|&&b| b < 0x20 && !is_text_whitespace(b))
        .count();

    control as f64 / sample.len() as f64 <= config.max_control_ratio
}
