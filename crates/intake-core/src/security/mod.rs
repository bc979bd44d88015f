//! Security checks for uploaded files.

pub mod guard;
pub mod sanitize;
pub mod scanner;
pub mod validator;

// Re-export public types and functions
pub use guard::NameVerdict;
pub use guard::check_name;
pub use guard::is_safe_name;
pub use sanitize::sanitize_filename;
pub use scanner::DangerFinding;
pub use scanner::DangerKind;
pub use scanner::is_potentially_dangerous;
pub use scanner::scan;
pub use validator::FileValidator;
