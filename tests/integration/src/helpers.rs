//! JSON assertions for serialized DTOs

use serde::Serialize;
use serde_json::Value;

/// Serialize a DTO the way the HTTP layer does
pub fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Assert a key is present and serialized as `null`
pub fn assert_null(json: &Value, key: &str) {
    match json.get(key) {
        Some(Value::Null) => {}
        Some(other) => panic!("expected {key} to be null, got {other}"),
        None => panic!("expected {key} to be present as null, but it was absent"),
    }
}

/// Assert a key is not emitted at all
pub fn assert_absent(json: &Value, key: &str) {
    if let Some(value) = json.get(key) {
        panic!("expected {key} to be absent, got {value}");
    }
}

/// Assert every top-level key is camelCase
pub fn assert_camel_case_keys(json: &Value) {
    let Some(object) = json.as_object() else {
        panic!("expected a JSON object, got {json}");
    };

    for key in object.keys() {
        assert!(
            !key.contains('_') && key.chars().next().is_some_and(char::is_lowercase),
            "key {key} is not camelCase"
        );
    }
}
