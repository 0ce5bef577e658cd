//! Type descriptors: immutable specifications of accepted value shapes.
//!
//! A [`Descriptor`] pairs a [`Kind`] with the absence and deprecation
//! modifiers. Modifiers never mutate: each returns a new descriptor that
//! shares the base kind, so one static base can derive many variants.
//!
//! ```
//! use assay::{validate, Value, BOOLEAN};
//!
//! let verbose = BOOLEAN.default(false);
//! assert_eq!(validate(None::<bool>, &verbose, "verbose").unwrap(), Value::Bool(false));
//! assert!(validate(None::<bool>, &BOOLEAN, "verbose").is_err());
//! ```

mod kind;
mod kinds;

use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::validation::{ValidateOptions, ValidationError};
use crate::value::Value;

pub use kind::Kind;
pub use kinds::{AnyKind, ArrayKind, BooleanKind, NumberKind, ObjectKind, StringKind};

/// Shared boolean descriptor.
pub static BOOLEAN: Lazy<Descriptor> = Lazy::new(Descriptor::boolean);
/// Shared number descriptor.
pub static NUMBER: Lazy<Descriptor> = Lazy::new(Descriptor::number);
/// Shared string descriptor.
pub static STRING: Lazy<Descriptor> = Lazy::new(Descriptor::string);
/// Shared descriptor accepting any present value.
pub static ANY: Lazy<Descriptor> = Lazy::new(Descriptor::any);

/// An immutable specification of one accepted value shape.
#[derive(Debug, Clone)]
pub struct Descriptor {
    kind: Arc<dyn Kind>,
    optional: bool,
    default: Option<Value>,
    deprecation: Option<Arc<str>>,
}

impl Descriptor {
    /// Create a required descriptor for a kind.
    pub fn new(kind: impl Kind + 'static) -> Self {
        Self {
            kind: Arc::new(kind),
            optional: false,
            default: None,
            deprecation: None,
        }
    }

    pub fn boolean() -> Self {
        Self::new(BooleanKind)
    }

    pub fn number() -> Self {
        Self::new(NumberKind)
    }

    pub fn string() -> Self {
        Self::new(StringKind)
    }

    pub fn any() -> Self {
        Self::new(AnyKind)
    }

    /// An array whose every element matches `item`.
    pub fn array(item: Descriptor) -> Self {
        Self::new(ArrayKind::new(item))
    }

    /// An object with the given fields, validated in declaration order.
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Descriptor)>) -> Self {
        let fields: IndexMap<String, Descriptor> =
            fields.into_iter().map(|(k, d)| (k.into(), d)).collect();
        Self::new(ObjectKind::new(fields))
    }

    /// Accept absent input and pass it through unchanged.
    pub fn optional(&self) -> Self {
        Self {
            optional: true,
            ..self.clone()
        }
    }

    /// Replace absent input with `value`. Implies optional.
    pub fn default(&self, value: impl Into<Value>) -> Self {
        Self {
            default: Some(value.into()),
            ..self.clone()
        }
    }

    /// Warn with `note` whenever a value is supplied.
    pub fn deprecated(&self, note: impl Into<String>) -> Self {
        Self {
            deprecation: Some(Arc::from(note.into())),
            ..self.clone()
        }
    }

    /// Target type name (e.g. `"boolean"`).
    pub fn kind(&self) -> &str {
        self.kind.name()
    }

    /// True when absent input does not fail, either through
    /// [`optional`](Self::optional) or a default value.
    pub fn is_optional(&self) -> bool {
        self.optional || self.default.is_some()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn deprecation_note(&self) -> Option<&str> {
        self.deprecation.as_deref()
    }

    pub fn accepts(&self, value: &Value) -> bool {
        self.kind.accepts(value)
    }

    pub fn coerce(&self, value: &Value) -> Option<Value> {
        self.kind.coerce(value)
    }

    pub(crate) fn refine(
        &self,
        value: Value,
        path: &str,
        options: &mut ValidateOptions<'_>,
    ) -> Result<Value, ValidationError> {
        self.kind.refine(value, path, options)
    }

    #[cfg(test)]
    fn shares_kind_with(&self, other: &Descriptor) -> bool {
        Arc::ptr_eq(&self.kind, &other.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_do_not_mutate_base() {
        let base = Descriptor::boolean();
        let optional = base.optional();
        let defaulted = base.default(true);
        let deprecated = base.deprecated("gone");

        assert!(!base.is_optional());
        assert!(base.default_value().is_none());
        assert!(base.deprecation_note().is_none());

        assert!(optional.is_optional());
        assert!(defaulted.is_optional());
        assert_eq!(defaulted.default_value(), Some(&Value::Bool(true)));
        assert_eq!(deprecated.deprecation_note(), Some("gone"));
        assert!(!deprecated.is_optional());
    }

    #[test]
    fn test_modifiers_share_base_kind() {
        let derived = BOOLEAN.optional().deprecated("x").default(false);
        assert!(derived.shares_kind_with(&BOOLEAN));
        assert_eq!(derived.kind(), "boolean");
    }

    #[test]
    fn test_modifier_order_is_irrelevant() {
        let a = STRING.optional().deprecated("old");
        let b = STRING.deprecated("old").optional();
        assert_eq!(a.is_optional(), b.is_optional());
        assert_eq!(a.deprecation_note(), b.deprecation_note());
        assert_eq!(a.default_value(), b.default_value());
    }

    #[test]
    fn test_descriptor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Descriptor>();
    }

    #[test]
    fn test_static_kinds() {
        assert_eq!(NUMBER.kind(), "number");
        assert_eq!(STRING.kind(), "string");
        assert_eq!(ANY.kind(), "any");
        assert_eq!(Descriptor::array(Descriptor::number()).kind(), "array");
        assert_eq!(Descriptor::object([("a", Descriptor::any())]).kind(), "object");
    }
}
