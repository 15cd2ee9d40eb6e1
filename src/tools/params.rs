//! Validation of loosely-typed tool parameters.
//!
//! Required string parameters are accepted as raw JSON so a wrong type can be
//! reported with the type that was actually sent instead of failing request
//! deserialization.

use crate::error::DocsError;
use serde_json::Value;

/// JSON type name of a parameter value, `"missing"` when absent.
pub fn json_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Extracts a required, non-empty string parameter.
pub fn require_string<'a>(param: &'static str, value: Option<&'a Value>) -> Result<&'a str, DocsError> {
    match value {
        Some(Value::String(s)) if s.trim().is_empty() => Err(DocsError::EmptyParameter { param }),
        Some(Value::String(s)) => Ok(s),
        other => Err(DocsError::NotAString {
            param,
            actual: json_type_name(other),
        }),
    }
}
