//! The capability set every descriptor kind provides.

use std::fmt;

use crate::validation::{ValidateOptions, ValidationError};
use crate::value::Value;

/// A semantic type that a [`Descriptor`](super::Descriptor) accepts.
///
/// Implementations must be pure: the same input always yields the same
/// answer, and no method mutates shared state.
pub trait Kind: fmt::Debug + Send + Sync {
    /// Target type name used in messages (e.g. `"boolean"`).
    fn name(&self) -> &str;

    /// Returns true if `value` already has the exact target type.
    fn accepts(&self, value: &Value) -> bool;

    /// Convert a value of a different but compatible type.
    ///
    /// Only called for present values that `accepts` rejected.
    fn coerce(&self, _value: &Value) -> Option<Value> {
        None
    }

    /// Runs after a value has been accepted or coerced.
    ///
    /// Composite kinds validate their children here, deriving child paths
    /// from `path`.
    fn refine(
        &self,
        value: Value,
        _path: &str,
        _options: &mut ValidateOptions<'_>,
    ) -> Result<Value, ValidationError> {
        Ok(value)
    }
}
