//! Tunables for upload admission checks.

/// Default number of leading bytes sampled by the text printability check.
pub const DEFAULT_TEXT_SAMPLE_LEN: usize = 8 * 1024;

/// Default share of control bytes above which a sample is not text.
pub const DEFAULT_MAX_CONTROL_RATIO: f64 = 0.30;

/// Default number of leading bytes searched for script markers.
pub const DEFAULT_SCAN_WINDOW: usize = 4 * 1024;

/// Default upper bound on sanitized filename length, in characters.
pub const DEFAULT_MAX_FILENAME_LEN: usize = 255;

/// Admission configuration.
///
/// The accepted type table is fixed (see [`crate::formats::registry`]); this
/// struct only carries the cost caps and thresholds of the heuristics. Both
/// sample windows are fixed caps so the cost of a check does not grow with
/// the size of the upload.
///
/// # Examples
///
/// ```
/// use intake_core::AdmissionConfig;
///
/// // Secure defaults
/// let config = AdmissionConfig::default();
///
/// // Stricter text detection
/// let strict = AdmissionConfig {
///     max_control_ratio: 0.05,
///     ..Default::default()
/// };
/// assert!(strict.max_control_ratio < config.max_control_ratio);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionConfig {
    /// Bytes sampled from the start of signature-less text uploads.
    pub text_sample_len: usize,

    /// Maximum share (0.0..=1.0) of control bytes in the text sample.
    pub max_control_ratio: f64,

    /// Bytes searched for embedded script markers.
    pub scan_window: usize,

    /// Maximum sanitized filename length, in characters.
    pub max_filename_len: usize,
}

impl Default for AdmissionConfig {
    /// Default values:
    /// - `text_sample_len`: 8 KiB
    /// - `max_control_ratio`: 0.30
    /// - `scan_window`: 4 KiB
    /// - `max_filename_len`: 255
    fn default() -> Self {
        Self {
            text_sample_len: DEFAULT_TEXT_SAMPLE_LEN,
            max_control_ratio: DEFAULT_MAX_CONTROL_RATIO,
            scan_window: DEFAULT_SCAN_WINDOW,
            max_filename_len: DEFAULT_MAX_FILENAME_LEN,
        }
    }
}
