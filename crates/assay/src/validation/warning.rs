//! Non-fatal anomalies collected during validation.

use serde::{Deserialize, Serialize};

use crate::value::ValueType;

/// Classification of a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A value was implicitly converted to the expected kind.
    Conversion,
    /// A deprecated field was given a value.
    Deprecation,
}

impl WarningKind {
    /// Get a human-readable label for the warning kind.
    pub fn label(&self) -> &'static str {
        match self {
            WarningKind::Conversion => "Conversion",
            WarningKind::Deprecation => "Deprecation",
        }
    }
}

/// A warning appended to the caller's sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Where in the input the anomaly occurred.
    pub path: String,
    /// Human-readable description.
    pub message: String,
    #[serde(rename = "type")]
    pub kind: WarningKind,
}

impl ValidationWarning {
    /// A value at `path` was converted from `given` to `kind`.
    pub fn conversion(path: impl Into<String>, given: ValueType, kind: &str) -> Self {
        let path = path.into();
        let message = format!("a {given} at {path} has been converted to {kind}");
        Self {
            path,
            message,
            kind: WarningKind::Conversion,
        }
    }

    /// A value was supplied for a deprecated field.
    pub fn deprecation(path: impl Into<String>, note: &str) -> Self {
        let path = path.into();
        let message = format!("{path} is deprecated: {note}");
        Self {
            path,
            message,
            kind: WarningKind::Deprecation,
        }
    }
}
