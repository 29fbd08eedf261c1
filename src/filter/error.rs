use serde_json::Value;
use thiserror::Error;

/// Raised when an untyped category list contains something other than a string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("category at index {index} must be a string, got {found}")]
pub struct InvalidInputError {
    /// Position of the first offending element
    pub index: usize,
    /// JSON type of the offending element
    pub found: &'static str,
}

impl InvalidInputError {
    pub(crate) fn new(index: usize, value: &Value) -> Self {
        Self {
            index,
            found: json_type_name(value),
        }
    }
}

/// Name of the JSON type of `value`, as reported in error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
