//! Assay: runtime schema validation and coercion for loosely-typed input.
//!
//! A [`Descriptor`] describes one accepted shape of value. [`validate`]
//! checks an input against it and either returns the (possibly converted)
//! value or fails with a [`ValidationError`]. Implicit conversions and use
//! of deprecated fields are reported as [`ValidationWarning`]s in a sink
//! owned by the caller.
//!
//! # Example
//!
//! ```
//! use assay::{validate_with, ValidateOptions, Value, BOOLEAN};
//!
//! let mut warnings = Vec::new();
//! let mut options = ValidateOptions::new().warnings(&mut warnings);
//!
//! let value = validate_with("true", &BOOLEAN, "debug", &mut options).unwrap();
//! assert_eq!(value, Value::Bool(true));
//! assert_eq!(warnings[0].message, "a string at debug has been converted to boolean");
//!
//! let err = assay::validate("Yes", &BOOLEAN, "debug").unwrap_err();
//! assert_eq!(err.to_string(), "TypeError: debug is expected to be a boolean, but a string is given");
//! ```

pub mod descriptor;
pub mod error;
pub mod validation;
pub mod value;

pub use descriptor::{ANY, BOOLEAN, Descriptor, Kind, NUMBER, STRING};
pub use error::{AssayError, Result};
pub use validation::{
    ErrorKind, ValidateOptions, ValidationConfig, ValidationError, ValidationWarning, WarningKind,
    validate, validate_with,
};
pub use value::{Value, ValueType};
