//! Test utilities for building upload blobs.
//!
//! # Panics
//!
//! Functions in this module may panic on I/O errors since they are designed
//! for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

/// `%PDF-`
pub const PDF_MAGIC: &[u8] = &[0x25, 0x50, 0x44, 0x46, 0x2D];

/// PNG file signature.
pub const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// JPEG SOI marker followed by an APP0 marker.
pub const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

/// ZIP local file header.
pub const ZIP_MAGIC: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

/// OLE2 compound file header.
pub const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// `head` followed by `padding` zero bytes.
#[must_use]
pub fn blob(head: &[u8], padding: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(head.len() + padding);
    bytes.extend_from_slice(head);
    bytes.resize(head.len() + padding, 0);
    bytes
}

/// Creates an in-memory ZIP container from a list of entries, the shape of
/// an Office Open XML document.
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (path, data) in entries {
        zip.start_file(path, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// A minimal `.docx`-shaped ZIP container.
#[must_use]
pub fn create_test_docx() -> Vec<u8> {
    create_test_zip(vec![
        (
            "[Content_Types].xml",
            b"<?xml version=\"1.0\"?><Types/>".as_slice(),
        ),
        (
            "word/document.xml",
            b"<w:document><w:body><w:p>Deal memo</w:p></w:body></w:document>".as_slice(),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob() {
        let bytes = blob(b"MZ", 3);
        assert_eq!(bytes, vec![b'M', b'Z', 0, 0, 0]);
    }

    #[test]
    fn test_zip_starts_with_local_header() {
        assert!(create_test_docx().starts_with(ZIP_MAGIC));
    }
}
