//! Weak-typing helpers for tool-call arguments.
//!
//! Tool arguments arrive as an untyped JSON object and are deliberately not
//! validated against the declared schema. Values are honored only when they
//! are JSON strings: a missing or wrong-typed optional argument falls back to
//! its default, and a missing or wrong-typed required argument becomes the
//! empty string. Any resulting failure surfaces from the tribe command
//! itself, not from the dispatcher.

use serde_json::{Map, Value as JsonValue};

/// Get a required string argument, or the empty string if absent/wrong-typed.
pub fn string_arg(args: &Map<String, JsonValue>, name: &str) -> String {
    args.get(name)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Get an optional string argument, falling back to `default` when the value
/// is absent, wrong-typed, or empty.
pub fn string_arg_or(args: &Map<String, JsonValue>, name: &str, default: &str) -> String {
    match args.get(name).and_then(|v| v.as_str()) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

/// Get an optional string argument with no default. Empty strings are
/// treated as absent so optional flags are only appended when set.
pub fn optional_string(args: &Map<String, JsonValue>, name: &str) -> Option<String> {
    match args.get(name).and_then(|v| v.as_str()) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: JsonValue) -> Map<String, JsonValue> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn string_arg_passes_through_strings() {
        let a = args(json!({ "query": "auth middleware" }));
        assert_eq!(string_arg(&a, "query"), "auth middleware");
    }

    #[test]
    fn string_arg_defaults_to_empty_when_missing_or_wrong_typed() {
        let a = args(json!({ "query": 42 }));
        assert_eq!(string_arg(&a, "query"), "");
        assert_eq!(string_arg(&a, "absent"), "");
    }

    #[test]
    fn string_arg_or_applies_default() {
        let a = args(json!({ "limit": "", "k": 7 }));
        assert_eq!(string_arg_or(&a, "limit", "5"), "5");
        assert_eq!(string_arg_or(&a, "k", "5"), "5");
        assert_eq!(string_arg_or(&a, "absent", "5"), "5");

        let a = args(json!({ "limit": "20" }));
        assert_eq!(string_arg_or(&a, "limit", "5"), "20");
    }

    #[test]
    fn optional_string_skips_empty_values() {
        let a = args(json!({ "project": "" }));
        assert_eq!(optional_string(&a, "project"), None);

        let a = args(json!({ "project": "foo" }));
        assert_eq!(optional_string(&a, "project"), Some("foo".to_string()));
    }
}
