//! Legacy value lookup endpoint models

use serde::{Deserialize, Serialize};

/// Body of `GET /get_val_from/?input=...`
///
/// Older bridge builds answered some rejections with a 200 status and only a
/// `message`, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub length: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub machine_response: Option<String>,
}

impl LookupResponse {
    /// The three labeled lines shown for a lookup result
    pub fn display_lines(&self) -> Vec<String> {
        vec![
            format!("Input: {}", self.input.as_deref().unwrap_or("")),
            format!(
                "Length: {}",
                self.length.map(|len| len.to_string()).unwrap_or_default()
            ),
            format!("Message: {}", self.message.as_deref().unwrap_or("")),
        ]
    }
}
