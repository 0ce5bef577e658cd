//! Fuzz target for the validation engine.
//!
//! Arbitrary JSON documents are validated against a nested descriptor in
//! both lenient and strict mode. Strict success must imply lenient success.

#![no_main]

use assay::{BOOLEAN, Descriptor, NUMBER, STRING, ValidateOptions, Value, validate_with};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let value = Value::from(json);

    let descriptor = Descriptor::object([
        ("name", STRING.optional()),
        ("enabled", BOOLEAN.default(false)),
        ("limits", Descriptor::array(NUMBER.deprecated("use quotas")).optional()),
    ]);

    let mut warnings = Vec::new();
    let mut lenient = ValidateOptions::new().warnings(&mut warnings);
    let lenient_ok = validate_with(value.clone(), &descriptor, "doc", &mut lenient).is_ok();

    let mut strict = ValidateOptions::new().strict(true);
    if validate_with(value, &descriptor, "doc", &mut strict).is_ok() {
        assert!(lenient_ok);
    }
});
