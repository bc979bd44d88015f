//! Progress bar implementation for CLI operations.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressState;
use indicatif::ProgressStyle;
use std::fmt::Write;

/// CLI progress bar over a batch of uploads.
///
/// Displays file count, bytes checked and throughput when running in a TTY.
/// Automatically cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
    files_done: u64,
    bytes_checked: u64,
}

impl CliProgress {
    /// Creates a new CLI progress bar.
    ///
    /// # Arguments
    ///
    /// * `total` - Number of files in the batch
    /// * `message` - Message to display (e.g., "Checking", "Scanning")
    #[must_use]
    pub fn new(total: usize, message: &str) -> Self {
        // Position tracks bytes; the file counter is rendered from `files_done`.
        let bar = ProgressBar::new_spinner();

        // Template: "Checking ⠋ 3/10 files (15.2 MB, 5.1 MB/s)"
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{msg} {spinner} {prefix} files ({bytes}, {bytes_per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .with_key("bytes", |state: &ProgressState, w: &mut dyn Write| {
                    write!(w, "{}", humanize_bytes(state.pos())).unwrap_or(());
                })
                .with_key("bytes_per_sec", |state: &ProgressState, w: &mut dyn Write| {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let bytes_per_sec = state.per_sec() as u64;
                    write!(w, "{}/s", humanize_bytes(bytes_per_sec)).unwrap_or(());
                }),
        );

        bar.set_message(message.to_string());
        bar.set_prefix(format!("0/{total}"));

        Self {
            bar,
            files_done: 0,
            bytes_checked: 0,
        }
    }

    /// Records one finished file of `bytes` length.
    pub fn file_done(&mut self, bytes: u64, total: usize) {
        self.files_done += 1;
        self.bytes_checked += bytes;
        self.bar.set_prefix(format!("{}/{total}", self.files_done));
        self.bar.set_position(self.bytes_checked);
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Converts bytes to human-readable format (KB, MB, GB).
#[allow(clippy::cast_precision_loss)]
fn humanize_bytes(bytes: u64) -> String {
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
