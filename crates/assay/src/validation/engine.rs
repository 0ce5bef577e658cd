//! The validation entry points.

use tracing::debug;

use crate::descriptor::Descriptor;
use crate::value::Value;

use super::error::ValidationError;
use super::options::ValidateOptions;
use super::warning::ValidationWarning;

/// Validate `value` against `descriptor` with default options.
///
/// Coercion is enabled and warnings are discarded.
pub fn validate(
    value: impl Into<Value>,
    descriptor: &Descriptor,
    path: &str,
) -> Result<Value, ValidationError> {
    validate_with(value, descriptor, path, &mut ValidateOptions::new())
}

/// Validate `value` against `descriptor`.
///
/// Absent input (`Null` or `Undefined`) is resolved first: the default
/// value if one is set, the input itself if the descriptor is optional,
/// otherwise a required error. Present input is accepted as is, coerced
/// (unless `options.strict`) with a conversion warning, or rejected with a
/// type error. A deprecation warning follows any accepted value.
///
/// Warnings reach the sink only when the whole call succeeds.
pub fn validate_with(
    value: impl Into<Value>,
    descriptor: &Descriptor,
    path: &str,
    options: &mut ValidateOptions<'_>,
) -> Result<Value, ValidationError> {
    let value = value.into();

    if value.is_absent() {
        if let Some(default) = descriptor.default_value() {
            return Ok(default.clone());
        }
        if descriptor.is_optional() {
            return Ok(value);
        }
        debug!(target: "assay::validate", path, kind = descriptor.kind(), "required value missing");
        return Err(ValidationError::required(path));
    }

    let given = value.value_type();
    let mut pending = Vec::new();

    let candidate = if descriptor.accepts(&value) {
        value
    } else {
        let converted = if options.strict {
            None
        } else {
            descriptor.coerce(&value)
        };

        match converted {
            Some(converted) => {
                debug!(
                    target: "assay::validate",
                    path,
                    kind = descriptor.kind(),
                    given = given.name(),
                    "value converted"
                );
                pending.push(ValidationWarning::conversion(path, given, descriptor.kind()));
                converted
            }
            None => {
                debug!(
                    target: "assay::validate",
                    path,
                    kind = descriptor.kind(),
                    given = given.name(),
                    strict = options.strict,
                    "value rejected"
                );
                return Err(ValidationError::type_mismatch(path, descriptor.kind(), given));
            }
        }
    };

    let candidate = {
        let mut nested = ValidateOptions::new()
            .strict(options.strict)
            .warnings(&mut pending);
        descriptor.refine(candidate, path, &mut nested)?
    };

    if let Some(note) = descriptor.deprecation_note() {
        debug!(target: "assay::validate", path, note, "deprecated field used");
        pending.push(ValidationWarning::deprecation(path, note));
    }

    options.extend_warnings(pending);
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{BOOLEAN, NUMBER, STRING};
    use crate::validation::{ErrorKind, WarningKind};
    use serde_json::json;

    #[test]
    fn test_exact_type_passes_without_warning() {
        let mut warnings = Vec::new();
        let mut options = ValidateOptions::new().warnings(&mut warnings);
        let result = validate_with(true, &BOOLEAN, "flag", &mut options).unwrap();
        assert_eq!(result, Value::Bool(true));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_default_wins_over_optional() {
        let descriptor = NUMBER.optional().default(7);
        assert_eq!(validate(Value::Null, &descriptor, "n").unwrap(), Value::Number(7.0));
        assert_eq!(validate(Value::Undefined, &descriptor, "n").unwrap(), Value::Number(7.0));
    }

    #[test]
    fn test_strict_does_not_affect_absence_handling() {
        let mut options = ValidateOptions::new().strict(true);
        let result = validate_with(Value::Null, &BOOLEAN.default(true), "b", &mut options);
        assert_eq!(result.unwrap(), Value::Bool(true));

        let result = validate_with(Value::Undefined, &BOOLEAN.optional(), "b", &mut options);
        assert_eq!(result.unwrap(), Value::Undefined);
    }

    #[test]
    fn test_conversion_then_deprecation_order() {
        let mut warnings = Vec::new();
        let mut options = ValidateOptions::new().warnings(&mut warnings);
        let descriptor = BOOLEAN.deprecated("use --quiet");
        validate_with("false", &descriptor, "silent", &mut options).unwrap();

        let kinds: Vec<_> = warnings.iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::Conversion, WarningKind::Deprecation]);
    }

    #[test]
    fn test_nested_paths() {
        let descriptor = Descriptor::object([
            ("name", Descriptor::string()),
            ("tags", Descriptor::array(Descriptor::string())),
        ]);
        let err = validate(json!({"name": "x", "tags": ["a", true, []]}), &descriptor, "cfg")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.path(), "cfg.tags[2]");
        assert_eq!(
            err.message(),
            "cfg.tags[2] is expected to be a string, but a array is given"
        );
    }

    #[test]
    fn test_failed_composite_emits_no_warnings() {
        let mut warnings = Vec::new();
        let mut options = ValidateOptions::new().warnings(&mut warnings);
        let descriptor = Descriptor::array(Descriptor::number());
        let result = validate_with(json!(["1", "2", "x"]), &descriptor, "ports", &mut options);
        assert!(result.is_err());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_object_field_is_required() {
        let descriptor = Descriptor::object([("port", Descriptor::number())]);
        let err = validate(json!({}), &descriptor, "server").unwrap_err();
        assert_eq!(err.to_string(), "Error: server.port is required, but no value is given");
    }

    #[test]
    fn test_optional_missing_field_is_omitted() {
        let descriptor = Descriptor::object([
            ("host", STRING.default("localhost")),
            ("port", NUMBER.optional()),
        ]);
        let result = validate(json!({"extra": 1}), &descriptor, "server").unwrap();
        assert_eq!(result.to_json(), json!({"extra": 1, "host": "localhost"}));
    }
}
