//! Options for a single validation call and their serializable configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::warning::ValidationWarning;

/// Serializable validation settings, suitable for embedding in a larger
/// configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Disable coercion entirely; only exactly-typed values are accepted.
    pub strict: bool,
}

impl ValidationConfig {
    /// Load a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Options for [`validate_with`](super::validate_with).
///
/// Warnings are appended to the borrowed sink when one is attached and
/// dropped otherwise.
#[derive(Debug, Default)]
pub struct ValidateOptions<'a> {
    /// Disable coercion entirely.
    pub strict: bool,
    warnings: Option<&'a mut Vec<ValidationWarning>>,
}

impl<'a> ValidateOptions<'a> {
    /// Non-strict options without a warnings sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a loaded configuration.
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self {
            strict: config.strict,
            warnings: None,
        }
    }

    /// Set strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Attach a warnings sink.
    pub fn warnings<'b>(self, sink: &'b mut Vec<ValidationWarning>) -> ValidateOptions<'b> {
        ValidateOptions {
            strict: self.strict,
            warnings: Some(sink),
        }
    }

    #[cfg(test)]
    fn has_sink(&self) -> bool {
        self.warnings.is_some()
    }

    pub(crate) fn extend_warnings(&mut self, warnings: Vec<ValidationWarning>) {
        if let Some(sink) = self.warnings.as_mut() {
            sink.extend(warnings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ValidationConfig::from_json_str("{}").unwrap();
        assert!(!config.strict);

        let config = ValidationConfig::from_json_str(r#"{"strict": true}"#).unwrap();
        assert!(ValidateOptions::from_config(&config).strict);
    }

    #[test]
    fn test_invalid_config_is_json_error() {
        let err = ValidationConfig::from_json_str(r#"{"strict": "yes"}"#).unwrap_err();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_warnings_without_sink_are_dropped() {
        let mut options = ValidateOptions::new();
        assert!(!options.has_sink());
        options.extend_warnings(vec![ValidationWarning::deprecation("a", "b")]);
    }

    #[test]
    fn test_attached_sink_collects() {
        let mut sink = Vec::new();
        {
            let mut options = ValidateOptions::new().strict(true).warnings(&mut sink);
            assert!(options.strict);
            options.extend_warnings(vec![ValidationWarning::deprecation("a", "b")]);
        }
        assert_eq!(sink.len(), 1);
    }
}
