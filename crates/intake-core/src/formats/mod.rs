//! Accepted upload formats and their byte-level signatures.

pub mod detect;
pub mod registry;

pub use detect::MatchOutcome;
pub use registry::ALLOWED_CONTENT_TYPES;
pub use registry::SIZE_LIMITS;
pub use registry::TypeSignature;
