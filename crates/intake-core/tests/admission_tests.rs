//! Integration tests for the admission verdict.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use intake_core::ALLOWED_CONTENT_TYPES;
use intake_core::Rejection;
use intake_core::SIZE_LIMITS;
use intake_core::admit;
use intake_core::expected_content_type;
use intake_core::formats::registry::REGISTRY;
use intake_core::formats::registry::size_limit_for;
use intake_core::is_potentially_dangerous;
use intake_core::sanitize_filename;
use intake_core::validate_file;
use std::io::Cursor;
use std::io::Write;

const PDF_MAGIC: &[u8] = &[0x25, 0x50, 0x44, 0x46, 0x2D];
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];
const ZIP_MAGIC: &[u8] = &[0x50, 0x4B, 0x03, 0x04];
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
const EXE_MAGIC: &[u8] = &[0x4D, 0x5A];

const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

fn blob(head: &[u8], padding: usize) -> Vec<u8> {
    let mut bytes = head.to_vec();
    bytes.resize(head.len() + padding, 0);
    bytes
}

fn create_docx() -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(b"<Types/>").unwrap();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(b"<w:document><w:body>Deal memo</w:body></w:document>")
        .unwrap();
    zip.finish().unwrap().into_inner()
}

/// A blob that carries the first signature of `content_type`, or CSV-like
/// text for signature-less types.
fn sample_for(content_type: &str) -> Vec<u8> {
    let sig = REGISTRY
        .iter()
        .find(|s| s.content_type == content_type)
        .expect("registered type");
    sig.magic_prefixes.first().map_or_else(
        || b"From: a@example.com\nTo: b@example.com\n\ncol1,col2\n".to_vec(),
        |prefix| blob(prefix, 100),
    )
}

#[test]
fn test_every_registered_signature_validates() {
    for sig in &REGISTRY {
        let alternatives: Vec<Vec<u8>> = if sig.magic_prefixes.is_empty() {
            vec![b"name,amount\nacme,100\n".to_vec()]
        } else {
            sig.magic_prefixes.iter().map(|p| blob(p, 64)).collect()
        };
        let name = format!("sample.{}", sig.extensions[0]);

        for bytes in alternatives {
            let result = validate_file(&bytes, &name, sig.content_type);
            assert!(result.is_valid, "{}: {:?}", sig.content_type, result.error);
            assert_eq!(result.sanitized_filename.as_deref(), Some(name.as_str()));
        }
    }
}

#[test]
fn test_executable_header_rejected_for_every_type() {
    let exe = blob(EXE_MAGIC, 100);
    for content_type in ALLOWED_CONTENT_TYPES {
        let result = validate_file(&exe, "upload.pdf", content_type);
        assert!(!result.is_valid, "{content_type} accepted an MZ blob");
        assert!(result.sanitized_filename.is_none());
    }
}

#[test]
fn test_foreign_signature_rejected() {
    let result = validate_file(&blob(JPEG_MAGIC, 100), "photo.png", "image/png");
    assert!(!result.is_valid);
    assert_eq!(result.detected_type, Some("image/jpeg"));

    let result = validate_file(&blob(PDF_MAGIC, 100), "sheet.xlsx", XLSX);
    assert_eq!(result.detected_type, Some("application/pdf"));
}

#[test]
fn test_empty_blob_rejected() {
    let result = validate_file(b"", "x.pdf", "application/pdf");
    assert!(!result.is_valid);
    assert_eq!(result.rejection, Some(Rejection::EmptyFile));
}

#[test]
fn test_path_traversal_name_rejected() {
    let result = validate_file(&blob(PDF_MAGIC, 100), "../../../etc/passwd", "application/pdf");
    assert!(!result.is_valid);
    assert!(result.error.unwrap().contains("invalid characters"));

    let sanitized = sanitize_filename("../../../etc/passwd");
    assert!(!sanitized.contains('/'));
    assert!(!sanitized.contains('\\'));
}

#[test]
fn test_real_docx_container_validates() {
    let docx = create_docx();
    assert!(docx.starts_with(ZIP_MAGIC));
    let result = validate_file(&docx, "report.docx", DOCX);
    assert!(result.is_valid, "{:?}", result.error);
    assert!(!is_potentially_dangerous(&docx, "report.docx"));
}

#[test]
fn test_legacy_spreadsheet_validates() {
    let result = validate_file(&blob(OLE_MAGIC, 100), "spreadsheet.xls", "application/vnd.ms-excel");
    assert!(result.is_valid);
}

#[test]
fn test_octet_stream_executable_rejected() {
    for ext in ["exe", "bat", "cmd", "sh", "ps1", "vbs", "js", "jar", "php", "py", "rb", "pl"] {
        let result = validate_file(b"content", &format!("malware.{ext}"), "application/octet-stream");
        assert!(!result.is_valid, "malware.{ext}");
    }
}

#[test]
fn test_double_extension_rejected_despite_valid_pdf() {
    let result = validate_file(&blob(PDF_MAGIC, 100), "document.pdf.exe", "application/pdf");
    assert!(!result.is_valid);
    assert!(matches!(
        result.rejection,
        Some(Rejection::DangerousExtension { ref extension, .. }) if extension == "exe"
    ));
}

#[test]
fn test_disallowed_types() {
    for content_type in [
        "application/javascript",
        "text/html",
        "application/x-executable",
        "application/x-php",
        "text/x-python",
    ] {
        let result = validate_file(b"content", "test.file", content_type);
        assert!(!result.is_valid);
        assert!(result.error.unwrap().contains("not allowed"));
    }
}

#[test]
fn test_size_limit_boundary_png() {
    let limit = usize::try_from(size_limit_for("image/png")).unwrap();

    let exact = blob(PNG_MAGIC, limit - PNG_MAGIC.len());
    assert_eq!(exact.len(), limit);
    assert!(validate_file(&exact, "image.png", "image/png").is_valid);

    let over = blob(PNG_MAGIC, limit - PNG_MAGIC.len() + 1);
    let result = validate_file(&over, "image.png", "image/png");
    assert!(!result.is_valid);
    assert!(result.error.unwrap().contains("exceeds limit"));
}

#[test]
fn test_size_limit_boundary_csv() {
    let limit = usize::try_from(size_limit_for("text/csv")).unwrap();

    let exact = vec![b'a'; limit];
    assert!(validate_file(&exact, "big.csv", "text/csv").is_valid);

    let over = vec![b'a'; limit + 1];
    let result = validate_file(&over, "big.csv", "text/csv");
    assert!(matches!(
        result.rejection,
        Some(Rejection::SizeExceeded { .. })
    ));
}

#[test]
fn test_size_limit_table_is_exported() {
    let limit = |ct: &str| {
        SIZE_LIMITS
            .iter()
            .find(|(t, _)| *t == ct)
            .map(|(_, l)| *l)
            .unwrap()
    };
    assert!(limit("text/csv") < limit("application/pdf"));
    assert!(limit("image/jpeg") < limit("application/pdf"));
}

#[test]
fn test_binary_csv_rejected() {
    let bytes: Vec<u8> = (0..1000u32).map(|i| (i * 11 % 32) as u8).collect();
    let result = validate_file(&bytes, "data.csv", "text/csv");
    assert!(!result.is_valid);
    assert!(result.error.unwrap().contains("invalid or binary content"));
}

#[test]
fn test_single_character_csv_validates() {
    assert!(validate_file(b"a", "tiny.csv", "text/csv").is_valid);
}

#[test]
fn test_unicode_and_emoji_names() {
    for name in ["文档.pdf", "📄document🎉.pdf"] {
        let result = validate_file(&blob(PDF_MAGIC, 100), name, "application/pdf");
        assert!(result.is_valid);
        assert_eq!(result.sanitized_filename.as_deref(), Some(name));
    }
}

#[test]
fn test_sample_helper_covers_allowlist() {
    for content_type in ALLOWED_CONTENT_TYPES {
        let bytes = sample_for(content_type);
        let name = format!(
            "sample.{}",
            intake_core::formats::registry::extension_for(content_type).unwrap()
        );
        assert!(validate_file(&bytes, &name, content_type).is_valid);
    }
}

#[test]
fn test_expected_content_type() {
    assert_eq!(expected_content_type("document.pdf"), Some("application/pdf"));
    assert_eq!(expected_content_type("spreadsheet.xlsx"), Some(XLSX));
    assert_eq!(expected_content_type("data.csv"), Some("text/csv"));
    assert_eq!(expected_content_type("report.docx"), Some(DOCX));
    assert_eq!(expected_content_type("photo.jpg"), Some("image/jpeg"));
    assert_eq!(expected_content_type("image.png"), Some("image/png"));
    assert_eq!(expected_content_type("FILE.PDF"), Some("application/pdf"));
    assert_eq!(expected_content_type("IMAGE.PNG"), Some("image/png"));
    assert_eq!(expected_content_type("file.xyz"), None);
    assert_eq!(expected_content_type("noextension"), None);
}

#[test]
fn test_scanner_second_gate() {
    assert!(is_potentially_dangerous(&blob(EXE_MAGIC, 100), "app.exe"));
    assert!(is_potentially_dangerous(&blob(EXE_MAGIC, 100), "harmless.pdf"));
    assert!(is_potentially_dangerous(b"#!/bin/bash\nrm -rf /", "script.sh"));
    assert!(is_potentially_dangerous(b"<script>alert(1)</script>", "file.txt"));

    let mut pdf = PDF_MAGIC.to_vec();
    pdf.extend_from_slice(b"1.4\n%....normal pdf content\nstream\nendstream");
    assert!(!is_potentially_dangerous(&pdf, "document.pdf"));
    assert!(!is_potentially_dangerous(
        b"name,email,phone\nJohn,john@example.com,555-1234",
        "contacts.csv"
    ));
}

#[test]
fn test_admit_runs_both_gates() {
    // Validation passes (printable CSV) but the scanner fires.
    let csv = b"name,formula\nx,=cmd.exe /c calc\n";
    assert!(validate_file(csv, "sheet.csv", "text/csv").is_valid);
    let err = admit(csv, "sheet.csv", "text/csv").unwrap_err();
    assert!(matches!(err, Rejection::DangerousContent { .. }));
    assert!(err.is_security_violation());

    assert_eq!(
        admit(&blob(PDF_MAGIC, 100), "CIM.pdf", "application/pdf").unwrap(),
        "CIM.pdf"
    );
}

#[test]
fn test_validation_is_deterministic() {
    let bytes = blob(PDF_MAGIC, 100);
    let first = validate_file(&bytes, "deal.pdf", "application/pdf");
    let second = validate_file(&bytes, "deal.pdf", "application/pdf");
    assert_eq!(first, second);
}

#[test]
fn test_parallel_validation() {
    let bytes = blob(PDF_MAGIC, 1024);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let bytes = &bytes;
                s.spawn(move || validate_file(bytes, &format!("deal-{i}.pdf"), "application/pdf"))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_valid);
        }
    });
}
