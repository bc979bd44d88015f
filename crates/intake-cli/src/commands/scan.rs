//! Scan command implementation

use super::upload_name;
use crate::cli::ScanArgs;
use crate::error::read_upload;
use crate::output::OutputFormatter;
use crate::output::ScanVerdict;
use anyhow::Result;
use anyhow::bail;
use intake_core::security::scan;

pub fn execute(args: &ScanArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = args.tuning.to_config();

    let mut verdicts = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let bytes = read_upload(path)?;
        let finding = scan(&bytes, &upload_name(path), &config);
        verdicts.push(ScanVerdict {
            path: path.display().to_string(),
            dangerous: finding.is_some(),
            kind: finding.map(|f| f.kind.to_string()),
            label: finding.map(|f| f.label),
        });
    }

    formatter.format_scan_results(&verdicts)?;

    let flagged = verdicts.iter().filter(|v| v.dangerous).count();
    if flagged > 0 {
        bail!(
            "{flagged} of {} files look executable or scripted",
            verdicts.len()
        );
    }

    Ok(())
}
