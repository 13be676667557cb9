//! Generic response helpers shared by all endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the bridge service on non-success statuses.
///
/// Both fields are optional; validation failures carry `error`, the legacy
/// lookup endpoint sometimes carries `message` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerErrorBody {
    /// Parse an error body, ignoring anything that is not the expected shape
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Decode a success body as arbitrary JSON.
///
/// An empty body becomes `null` and a body that is not JSON is kept as a
/// JSON string, so callers can always display what the server sent.
pub fn decode_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

/// Pretty-print a response with two-space indentation
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
