//! Port listing response

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;

/// Body of `GET /get-available-ports/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortsResponse {
    /// Absent and `null` both mean "no ports"
    #[serde(default)]
    pub available_ports: Option<Vec<String>>,
}

impl PortsResponse {
    /// Decode a port listing from an arbitrary JSON body.
    ///
    /// Bodies that are not JSON objects carry no `available_ports` field and
    /// decode as an empty listing. A field of the wrong type is an error.
    pub fn from_value(body: Value) -> Result<Self> {
        if !body.is_object() {
            log::warn!("Port listing body is not a JSON object: {}", body);
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(body)?)
    }

    pub fn into_ports(self) -> Vec<String> {
        self.available_ports.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ports_listing() {
        let response =
            PortsResponse::from_value(json!({ "available_ports": ["COM3", "COM4"] })).unwrap();
        assert_eq!(response.into_ports(), vec!["COM3", "COM4"]);
    }

    #[test]
    fn test_missing_or_null_field_is_empty() {
        let missing = PortsResponse::from_value(json!({})).unwrap();
        assert!(missing.into_ports().is_empty());

        let null = PortsResponse::from_value(json!({ "available_ports": null })).unwrap();
        assert!(null.into_ports().is_empty());
    }

    #[test]
    fn test_non_object_body_is_empty() {
        let response = PortsResponse::from_value(json!("<html>not json</html>")).unwrap();
        assert!(response.into_ports().is_empty());
    }

    #[test]
    fn test_wrong_field_type_is_error() {
        assert!(PortsResponse::from_value(json!({ "available_ports": "COM3" })).is_err());
    }
}
