//! Detect command implementation

use super::upload_name;
use crate::cli::DetectArgs;
use crate::error::read_upload;
use crate::output::Detection;
use crate::output::OutputFormatter;
use anyhow::Result;
use intake_core::expected_content_type;
use intake_core::formats::detect::detect;
use intake_core::formats::detect::matches;
use intake_core::formats::registry::lookup;

pub fn execute(args: &DetectArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let bytes = read_upload(&args.file)?;
    let expected_type = expected_content_type(&upload_name(&args.file));

    // OOXML types share the ZIP signature, so consistency is judged by the
    // expected type's own check rather than by the first detected type.
    let consistent = expected_type
        .and_then(lookup)
        .is_some_and(|sig| matches(&bytes, sig));

    let detection = Detection {
        path: args.file.display().to_string(),
        size: bytes.len() as u64,
        expected_type,
        detected_type: detect(&bytes).map(|sig| sig.content_type),
        consistent,
    };

    formatter.format_detection(&detection)
}
