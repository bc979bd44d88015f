//! Admission check benchmarks for intake.
//!
//! Measures:
//! - Full validation of binary and text uploads
//! - Content scanning
//! - Filename sanitization
//!
//! Validation and scanning only read a bounded prefix, so timings should
//! stay flat as the blob grows.

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use intake_core::is_potentially_dangerous;
use intake_core::sanitize_filename;
use intake_core::validate_file;
use std::hint::black_box;

const SIZES: [usize; 3] = [1024, 1024 * 1024, 8 * 1024 * 1024];

fn pdf_blob(size: usize) -> Vec<u8> {
    let mut bytes = b"%PDF-1.7\n".to_vec();
    bytes.resize(size, b' ');
    bytes
}

fn csv_blob(size: usize) -> Vec<u8> {
    b"company,ev,ebitda\n"
        .iter()
        .copied()
        .cycle()
        .take(size)
        .collect()
}

/// Validation cost against blob size.
fn benchmark_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_file");

    for size in SIZES {
        let pdf = pdf_blob(size);
        group.bench_with_input(BenchmarkId::new("pdf", size), &pdf, |b, pdf| {
            b.iter(|| validate_file(black_box(pdf), "deal.pdf", "application/pdf"));
        });

        let csv = csv_blob(size);
        group.bench_with_input(BenchmarkId::new("csv", size), &csv, |b, csv| {
            b.iter(|| validate_file(black_box(csv), "comps.csv", "text/csv"));
        });
    }

    group.finish();
}

/// Scanner cost against blob size.
fn benchmark_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_potentially_dangerous");

    for size in SIZES {
        let csv = csv_blob(size);
        group.bench_with_input(BenchmarkId::new("clean_csv", size), &csv, |b, csv| {
            b.iter(|| is_potentially_dangerous(black_box(csv), "comps.csv"));
        });
    }

    group.finish();
}

/// Filename sanitization.
fn benchmark_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_filename");

    group.bench_function("clean", |b| {
        b.iter(|| sanitize_filename(black_box("Project Falcon CIM.pdf")));
    });

    group.bench_function("hostile", |b| {
        b.iter(|| sanitize_filename(black_box("..\\..\\<script>\0evil\x1F.pdf")));
    });

    let long = "a".repeat(1000) + ".xlsx";
    group.bench_function("long", |b| {
        b.iter(|| sanitize_filename(black_box(&long)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_validation,
    benchmark_scanner,
    benchmark_sanitize
);
criterion_main!(benches);
