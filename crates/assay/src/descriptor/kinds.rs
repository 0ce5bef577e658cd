//! Built-in descriptor kinds.

use indexmap::IndexMap;

use crate::validation::{ValidateOptions, ValidationError, validate_with};
use crate::value::Value;

use super::Descriptor;
use super::kind::Kind;

/// Accepts `true`/`false`.
///
/// Coerces the exact strings `"true"` and `"false"` and the numbers `1`
/// and `0`. Any other number, including `10`, is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanKind;

impl Kind for BooleanKind {
    fn name(&self) -> &str {
        "boolean"
    }

    fn accepts(&self, value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }

    fn coerce(&self, value: &Value) -> Option<Value> {
        match value {
            Value::String(s) => match s.as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            Value::Number(n) if *n == 0.0 => Some(Value::Bool(false)),
            Value::Number(n) if *n == 1.0 => Some(Value::Bool(true)),
            _ => None,
        }
    }
}

/// Accepts numbers. Coerces numeric strings and booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberKind;

impl Kind for NumberKind {
    fn name(&self) -> &str {
        "number"
    }

    fn accepts(&self, value: &Value) -> bool {
        matches!(value, Value::Number(_))
    }

    fn coerce(&self, value: &Value) -> Option<Value> {
        match value {
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(Value::Number)
            }
            Value::Bool(b) => Some(Value::Number(if *b { 1.0 } else { 0.0 })),
            _ => None,
        }
    }
}

/// Accepts strings. Coerces finite numbers and booleans to their text form.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringKind;

impl Kind for StringKind {
    fn name(&self) -> &str {
        "string"
    }

    fn accepts(&self, value: &Value) -> bool {
        matches!(value, Value::String(_))
    }

    fn coerce(&self, value: &Value) -> Option<Value> {
        match value {
            Value::Number(n) if n.is_finite() => Some(Value::String(n.to_string())),
            Value::Bool(b) => Some(Value::String(b.to_string())),
            _ => None,
        }
    }
}

/// Accepts every present value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyKind;

impl Kind for AnyKind {
    fn name(&self) -> &str {
        "any"
    }

    fn accepts(&self, value: &Value) -> bool {
        !value.is_absent()
    }
}

/// Accepts arrays whose elements all match an item descriptor.
#[derive(Debug, Clone)]
pub struct ArrayKind {
    item: Descriptor,
}

impl ArrayKind {
    pub fn new(item: Descriptor) -> Self {
        Self { item }
    }
}

impl Kind for ArrayKind {
    fn name(&self) -> &str {
        "array"
    }

    fn accepts(&self, value: &Value) -> bool {
        matches!(value, Value::Array(_))
    }

    fn refine(
        &self,
        value: Value,
        path: &str,
        options: &mut ValidateOptions<'_>,
    ) -> Result<Value, ValidationError> {
        let items = match value {
            Value::Array(items) => items,
            other => return Ok(other),
        };

        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| validate_with(item, &self.item, &format!("{path}[{i}]"), options))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

/// Accepts objects and validates each declared field.
///
/// Missing fields are validated as `Undefined`; a field whose result is
/// `Undefined` is left out of the output. Undeclared fields pass through.
#[derive(Debug, Clone)]
pub struct ObjectKind {
    fields: IndexMap<String, Descriptor>,
}

impl ObjectKind {
    pub fn new(fields: IndexMap<String, Descriptor>) -> Self {
        Self { fields }
    }
}

impl Kind for ObjectKind {
    fn name(&self) -> &str {
        "object"
    }

    fn accepts(&self, value: &Value) -> bool {
        matches!(value, Value::Object(_))
    }

    fn refine(
        &self,
        value: Value,
        path: &str,
        options: &mut ValidateOptions<'_>,
    ) -> Result<Value, ValidationError> {
        let mut object = match value {
            Value::Object(object) => object,
            other => return Ok(other),
        };

        for (name, descriptor) in &self.fields {
            let raw = object.get_mut(name).map(std::mem::take).unwrap_or_default();
            let validated = validate_with(raw, descriptor, &format!("{path}.{name}"), options)?;
            if validated == Value::Undefined {
                object.shift_remove(name);
            } else {
                object.insert(name.clone(), validated);
            }
        }

        Ok(Value::Object(object))
    }
}
