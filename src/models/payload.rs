//! Send request payload

use serde::{Deserialize, Serialize};

/// Body of `POST /send_text/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTextRequest {
    pub text: String,
    pub port: String,
}

impl SendTextRequest {
    pub fn new(text: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            port: port.into(),
        }
    }
}
