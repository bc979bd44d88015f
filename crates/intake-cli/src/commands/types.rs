//! Types command implementation

use crate::output::OutputFormatter;
use crate::output::TypeEntry;
use anyhow::Result;
use intake_core::formats::registry::REGISTRY;

pub fn execute(formatter: &dyn OutputFormatter) -> Result<()> {
    formatter.format_types(&entries())
}

fn entries() -> Vec<TypeEntry> {
    REGISTRY
        .iter()
        .map(|sig| TypeEntry {
            content_type: sig.content_type,
            label: sig.label,
            extensions: sig.extensions.to_vec(),
            max_bytes: sig.max_bytes,
            text: sig.is_text(),
        })
        .collect()
}
