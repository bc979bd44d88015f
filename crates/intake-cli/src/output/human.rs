//! Human-readable output formatter with colors and styling.

use super::formatter::Detection;
use super::formatter::FileVerdict;
use super::formatter::OutputFormatter;
use super::formatter::SanitizedName;
use super::formatter::ScanVerdict;
use super::formatter::TypeEntry;
use anyhow::Result;
use console::Term;
use console::style;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn pass_mark(&self, label: &str) -> String {
        if self.use_colors {
            format!("{} {label}", style("✓").green().bold())
        } else {
            format!("PASS {label}")
        }
    }

    fn fail_mark(&self, label: &str) -> String {
        if self.use_colors {
            format!("{} {label}", style("✗").red().bold())
        } else {
            format!("FAIL {label}")
        }
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_check_results(&self, verdicts: &[FileVerdict]) -> Result<()> {
        for verdict in verdicts {
            // Rejections are shown even in quiet mode.
            if verdict.admitted {
                if self.quiet {
                    continue;
                }
                self.line(&self.pass_mark(&verdict.path));
                if let Some(name) = &verdict.sanitized_filename {
                    self.line(&format!("  Stored as: {name}"));
                }
            } else {
                self.line(&self.fail_mark(&verdict.path));
                if let Some(error) = &verdict.error {
                    self.line(&format!("  Reason:   {error}"));
                }
                if let Some(detected) = verdict.detected_type {
                    self.line(&format!("  Detected: {detected}"));
                }
            }

            if self.verbose {
                self.line(&format!(
                    "  Declared: {} ({})",
                    verdict.declared_name, verdict.declared_type
                ));
                self.line(&format!("  Size:     {}", Self::format_size(verdict.size)));
                if let Some(kind) = verdict.rejection {
                    self.line(&format!("  Kind:     {kind}"));
                }
            }
        }

        if !self.quiet {
            let admitted = verdicts.iter().filter(|v| v.admitted).count();
            self.line("");
            self.line(&format!(
                "{admitted} admitted, {} rejected",
                verdicts.len() - admitted
            ));
        }

        Ok(())
    }

    fn format_scan_results(&self, verdicts: &[ScanVerdict]) -> Result<()> {
        for verdict in verdicts {
            if verdict.dangerous {
                let label = verdict.label.unwrap_or("unknown signature");
                let kind = verdict.kind.as_deref().unwrap_or("unknown");
                self.line(&self.fail_mark(&verdict.path));
                self.line(&format!("  Found: {label} ({kind})"));
            } else if !self.quiet {
                self.line(&self.pass_mark(&verdict.path));
            }
        }

        Ok(())
    }

    fn format_sanitized(&self, names: &[SanitizedName]) -> Result<()> {
        for name in names {
            if self.verbose {
                self.line(&format!("{} -> {}", name.original, name.sanitized));
            } else {
                self.line(&name.sanitized);
            }
        }

        Ok(())
    }

    fn format_types(&self, types: &[TypeEntry]) -> Result<()> {
        if self.quiet {
            for entry in types {
                self.line(entry.content_type);
            }
            return Ok(());
        }

        for entry in types {
            let check = if entry.text { "printable text" } else { "magic bytes" };
            self.line(&format!(
                "{:<70} {:>8}  {:<8} .{}",
                entry.content_type,
                Self::format_size(entry.max_bytes),
                entry.label,
                entry.extensions.join(", .")
            ));
            if self.verbose {
                self.line(&format!("    content check: {check}"));
            }
        }

        Ok(())
    }

    fn format_detection(&self, detection: &Detection) -> Result<()> {
        let expected = detection.expected_type.unwrap_or("unknown");
        let detected = detection.detected_type.unwrap_or("no signature");

        self.line(&detection.path);
        self.line(&format!("  Expected: {expected}"));
        self.line(&format!("  Detected: {detected}"));
        if detection.expected_type.is_some() {
            let verdict = if detection.consistent {
                self.pass_mark("content matches extension")
            } else {
                self.fail_mark("content does not match extension")
            };
            self.line(&format!("  {verdict}"));
        }
        if self.verbose {
            self.line(&format!("  Size:     {}", Self::format_size(detection.size)));
        }

        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = term.write_line(&format!("WARNING: {message}"));
        }
    }
}
