//! Fatal validation failures.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::ValueType;

/// The two ways a value can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The value is absent and the descriptor has no default and is not optional.
    Required,
    /// The value is present but neither exactly typed nor coercible.
    Type,
}

impl ErrorKind {
    /// Name shown in front of the message when the error is displayed.
    pub fn display_name(&self) -> &'static str {
        match self {
            ErrorKind::Required => "Error",
            ErrorKind::Type => "TypeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A value was rejected by a descriptor.
///
/// Displays as `"<kind display name>: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    kind: ErrorKind,
    path: String,
    message: String,
}

impl ValidationError {
    /// An absent value where one is required.
    pub fn required(path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("{path} is required, but no value is given");
        Self {
            kind: ErrorKind::Required,
            path,
            message,
        }
    }

    /// A value whose type is neither the expected kind nor convertible to it.
    pub fn type_mismatch(path: impl Into<String>, expected: &str, given: ValueType) -> Self {
        let path = path.into();
        let message = format!("{path} is expected to be a {expected}, but a {given} is given");
        Self {
            kind: ErrorKind::Type,
            path,
            message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Path label of the rejected value.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Message text without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}
