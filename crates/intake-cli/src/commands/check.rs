//! Check command implementation

use super::upload_name;
use crate::cli::CheckArgs;
use crate::error::convert_rejection;
use crate::error::read_upload;
use crate::output::FileVerdict;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use anyhow::bail;
use intake_core::AdmissionConfig;
use intake_core::Rejection;
use intake_core::ValidationRequest;
use intake_core::expected_content_type;
use intake_core::security::FileValidator;
use intake_core::security::scan;
use std::path::Path;
use std::path::PathBuf;

/// Declared type used when neither `--type` nor the extension names one.
const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

pub fn execute(args: &CheckArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    if args.name.is_some() && args.files.len() > 1 {
        bail!(
            "--name declares the filename of a single upload, but {} files were given\n\
             HINT: Check files one at a time, or drop --name to use each file's own name.",
            args.files.len()
        );
    }

    let config = args.tuning.to_config();
    let validator = FileValidator::new(&config);

    let mut progress = (!quiet && args.files.len() > 1 && CliProgress::should_show())
        .then(|| CliProgress::new(args.files.len(), "Checking"));

    let mut verdicts = Vec::with_capacity(args.files.len());
    let mut failures: Vec<(PathBuf, Rejection)> = Vec::new();

    for path in &args.files {
        let bytes = read_upload(path)?;
        let declared_name = args.name.clone().unwrap_or_else(|| upload_name(path));
        let declared_type = declared_type(args, &declared_name, formatter);

        let (verdict, rejection) = check_one(
            &validator,
            &config,
            path,
            &bytes,
            &declared_name,
            &declared_type,
        );
        verdicts.push(verdict);
        if let Some(rejection) = rejection {
            failures.push((path.clone(), rejection));
        }

        if let Some(progress) = progress.as_mut() {
            progress.file_done(bytes.len() as u64, args.files.len());
        }
    }
    drop(progress);

    formatter.format_check_results(&verdicts)?;

    // Non-zero exit when anything was refused.
    let total = verdicts.len();
    let rejected = failures.len();
    match failures.into_iter().next() {
        None => Ok(()),
        Some((path, rejection)) if rejected == 1 => Err(convert_rejection(rejection, &path)),
        Some((path, rejection)) => Err(convert_rejection(rejection, &path)
            .context(format!("{rejected} of {total} uploads rejected"))),
    }
}

fn declared_type(args: &CheckArgs, declared_name: &str, formatter: &dyn OutputFormatter) -> String {
    if let Some(content_type) = &args.content_type {
        return content_type.clone();
    }
    expected_content_type(declared_name).map_or_else(
        || {
            formatter.format_warning(&format!(
                "No content type registered for '{declared_name}'; pass --type to declare one"
            ));
            UNKNOWN_CONTENT_TYPE.to_string()
        },
        str::to_string,
    )
}

/// Runs validation and then the content scanner on one upload.
fn check_one(
    validator: &FileValidator<'_>,
    config: &AdmissionConfig,
    path: &Path,
    bytes: &[u8],
    declared_name: &str,
    declared_type: &str,
) -> (FileVerdict, Option<Rejection>) {
    let result = validator.validate(&ValidationRequest::new(bytes, declared_name, declared_type));
    let detected_type = result.detected_type;

    let rejection = match result.into_result() {
        Ok(admitted) => scan(bytes, declared_name, config)
            .map(|finding| Rejection::DangerousContent {
                label: finding.label,
            })
            .map_or(Ok(admitted.sanitized_filename), Err),
        Err(rejection) => Err(rejection),
    };

    let mut verdict = FileVerdict {
        path: path.display().to_string(),
        declared_name: declared_name.to_string(),
        declared_type: declared_type.to_string(),
        size: bytes.len() as u64,
        admitted: rejection.is_ok(),
        sanitized_filename: None,
        detected_type,
        rejection: None,
        error: None,
    };

    match rejection {
        Ok(sanitized) => {
            verdict.sanitized_filename = Some(sanitized);
            (verdict, None)
        }
        Err(rejection) => {
            verdict.rejection = Some(rejection.kind());
            verdict.error = Some(rejection.to_string());
            (verdict, Some(rejection))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(bytes: &[u8], name: &str, content_type: &str) -> (FileVerdict, Option<Rejection>) {
        let config = AdmissionConfig::default();
        let validator = FileValidator::new(&config);
        check_one(
            &validator,
            &config,
            Path::new(name),
            bytes,
            name,
            content_type,
        )
    }

    #[test]
    fn test_check_admits_clean_csv() {
        let (verdict, rejection) = run(b"deal,amount\nacme,100\n", "deals.csv", "text/csv");
        assert!(verdict.admitted);
        assert!(rejection.is_none());
        assert_eq!(verdict.sanitized_filename.as_deref(), Some("deals.csv"));
    }

    #[test]
    fn test_check_runs_scanner_after_validation() {
        let (verdict, rejection) = run(b"<?php system($_GET['c']); ?>", "deals.csv", "text/csv");
        assert!(!verdict.admitted);
        assert_eq!(verdict.rejection, Some("dangerous_content"));
        assert!(matches!(rejection, Some(Rejection::DangerousContent { .. })));
        assert!(verdict.sanitized_filename.is_none());
    }

    #[test]
    fn test_check_reports_detected_type() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        let (verdict, _) = run(&png, "invoice.pdf", "application/pdf");
        assert!(!verdict.admitted);
        assert_eq!(verdict.detected_type, Some("image/png"));
        assert_eq!(verdict.rejection, Some("content_mismatch"));
    }
}
