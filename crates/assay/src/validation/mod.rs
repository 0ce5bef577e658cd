//! Validation engine: acceptance, coercion, and warning collection.

mod engine;
mod error;
mod options;
mod warning;

pub use engine::{validate, validate_with};
pub use error::{ErrorKind, ValidationError};
pub use options::{ValidateOptions, ValidationConfig};
pub use warning::{ValidationWarning, WarningKind};
