use thiserror::Error;

/// Errors a caller can actually cause. Out-of-range user input (slider values,
/// undersized panels, missing positions) is corrected silently and never
/// shows up here.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("variable name must be a string, found {found}")]
    InvalidName { found: &'static str },

    #[error("variable visible state must be a boolean, found {found}")]
    InvalidVisibility { found: &'static str },

    #[error("malformed variable model: {0}")]
    Model(#[from] serde_json::Error),

    #[error("no widget registered under {0}")]
    UnknownWidget(String),
}

/// Short JSON type name for error messages.
pub fn json_type_name(v: Option<&serde_json::Value>) -> &'static str {
    use serde_json::Value;
    match v {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    }
}
