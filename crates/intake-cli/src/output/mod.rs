//! Output formatting module.

mod formatter;
mod human;
mod json;

pub use formatter::Detection;
pub use formatter::FileVerdict;
pub use formatter::OutputFormatter;
pub use formatter::SanitizedName;
pub use formatter::ScanVerdict;
pub use formatter::TypeEntry;

use human::HumanFormatter;
use json::JsonFormatter;

/// Creates an output formatter based on CLI flags
pub fn create_formatter(json: bool, verbose: bool, quiet: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter::new(verbose, quiet))
    }
}
