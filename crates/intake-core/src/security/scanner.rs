//! Dangerous-content tripwire.
//!
//! A second opinion run next to the admission verdict, not instead of it.
//! It looks for native executable headers, interpreter directives and a flat
//! list of high-signal script idioms in a bounded window at the start of the
//! blob. It is substring matching, not a parser: cheap to run on every
//! upload, and easy to extend by adding a row to [`DANGER_SIGNATURES`].

use std::fmt;

use crate::AdmissionConfig;
use crate::security::guard::dangerous_extension;

/// What a signature indicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DangerKind {
    /// Native executable or binary loader format.
    Executable,
    /// Interpreted script or markup that executes code.
    Script,
}

impl fmt::Display for DangerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Executable => write!(f, "executable"),
            Self::Script => write!(f, "script"),
        }
    }
}

/// How a signature is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DangerMatcher {
    /// Leading bytes of the blob.
    Prefix(&'static [u8]),
    /// Lowercase ASCII text anywhere in the scan window, compared
    /// case-insensitively.
    Pattern(&'static str),
}

/// One row of the danger table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DangerSignature {
    /// What the match indicates.
    pub kind: DangerKind,
    /// How to match it.
    pub matcher: DangerMatcher,
    /// Short description used in logs and rejection messages.
    pub label: &'static str,
}

const fn prefix(kind: DangerKind, bytes: &'static [u8], label: &'static str) -> DangerSignature {
    DangerSignature {
        kind,
        matcher: DangerMatcher::Prefix(bytes),
        label,
    }
}

const fn script(pattern: &'static str, label: &'static str) -> DangerSignature {
    DangerSignature {
        kind: DangerKind::Script,
        matcher: DangerMatcher::Pattern(pattern),
        label,
    }
}

/// Signatures checked by [`scan`], in order.
///
/// Patterns are specific to script and shell syntax; document structure
/// keywords such as PDF `stream`/`endstream` must never appear here. Call
/// patterns carry their receiver or argument sigil so that prose like
/// "ERP System(SAP)" stays clean.
pub const DANGER_SIGNATURES: &[DangerSignature] = &[
    prefix(DangerKind::Executable, b"MZ", "Windows PE executable"),
    prefix(DangerKind::Executable, b"\x7FELF", "ELF executable"),
    prefix(DangerKind::Executable, &[0xFE, 0xED, 0xFA, 0xCE], "Mach-O executable"),
    prefix(DangerKind::Executable, &[0xFE, 0xED, 0xFA, 0xCF], "Mach-O executable"),
    prefix(DangerKind::Executable, &[0xCE, 0xFA, 0xED, 0xFE], "Mach-O executable"),
    prefix(DangerKind::Executable, &[0xCF, 0xFA, 0xED, 0xFE], "Mach-O executable"),
    prefix(DangerKind::Executable, &[0xCA, 0xFE, 0xBA, 0xBE], "Mach-O universal binary"),
    prefix(DangerKind::Script, b"#!", "interpreter directive"),
    script("<script", "inline script tag"),
    script("javascript:", "javascript URI"),
    script("<iframe", "inline frame"),
    script("<?php", "server-side script tag"),
    script("<%@", "server-side script tag"),
    script("<%=", "server-side script tag"),
    script("#!/", "interpreter directive"),
    script("/bin/sh", "shell invocation"),
    script("/bin/bash", "shell invocation"),
    script("cmd.exe", "shell invocation"),
    script("powershell -", "shell invocation"),
    script("import subprocess", "interpreter import"),
    script("require('", "module loader call"),
    script("require(\"", "module loader call"),
    script("child_process", "process spawning"),
    script("subprocess.", "process spawning"),
    script("os.system(", "process spawning"),
    script("os.popen(", "process spawning"),
    script("shell_exec(", "process spawning"),
    script("proc_open(", "process spawning"),
    script("passthru(", "process spawning"),
    script("system($", "process spawning"),
    script("eval($", "dynamic evaluation"),
    script("eval(atob(", "dynamic evaluation"),
    script("eval(function(", "dynamic evaluation"),
    script("eval(unescape(", "dynamic evaluation"),
    script("base64_decode(", "obfuscated execution"),
    script("fromcharcode(", "obfuscated execution"),
];

/// A signature that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DangerFinding {
    /// What the match indicates.
    pub kind: DangerKind,
    /// Short description of the signature.
    pub label: &'static str,
}

impl fmt::Display for DangerFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.kind)
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty()
        && haystack.len() >= needle.len()
        && haystack.windows(needle.len()).any(|w| w == needle)
}

/// Scans `bytes` and `filename` for executable or script signals.
///
/// Only the first `config.scan_window` bytes are searched for text
/// patterns. A denylisted extension on `filename` is also reported.
///
/// # Examples
///
/// ```
/// use intake_core::AdmissionConfig;
/// use intake_core::security::scanner::DangerKind;
/// use intake_core::security::scanner::scan;
///
/// let config = AdmissionConfig::default();
/// let finding = scan(b"MZ\x90\x00\x03", "invoice.pdf", &config).unwrap();
/// assert_eq!(finding.kind, DangerKind::Executable);
///
/// assert!(scan(b"%PDF-1.4\nstream\nendstream", "doc.pdf", &config).is_none());
/// ```
pub fn scan(bytes: &[u8], filename: &str, config: &AdmissionConfig) -> Option<DangerFinding> {
    let window = bytes[..bytes.len().min(config.scan_window)].to_ascii_lowercase();

    let hit = DANGER_SIGNATURES.iter().find(|sig| match sig.matcher {
        DangerMatcher::Prefix(magic) => bytes.starts_with(magic),
        DangerMatcher::Pattern(pattern) => contains(&window, pattern.as_bytes()),
    });

    if let Some(sig) = hit {
        tracing::warn!(
            filename = ?filename,
            kind = %sig.kind,
            signature = sig.label,
            "dangerous content detected"
        );
        return Some(DangerFinding {
            kind: sig.kind,
            label: sig.label,
        });
    }

    dangerous_extension(filename).map(|extension| {
        tracing::warn!(filename = ?filename, %extension, "dangerous extension detected");
        DangerFinding {
            kind: DangerKind::Executable,
            label: "denylisted extension",
        }
    })
}

/// Returns `true` if `bytes` or `filename` look executable or scripted.
///
/// Callers must treat `true` as a hard rejection even when
/// [`validate_file`](crate::validate_file) accepted the upload.
pub fn is_potentially_dangerous(bytes: &[u8], filename: &str) -> bool {
    scan(bytes, filename, &AdmissionConfig::default()).is_some()
}
