//! Bridge service operations

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;
#[cfg(feature = "lookup")]
use crate::models::LookupResponse;
use crate::models::SendTextRequest;

/// Operations offered by the bridge service
#[async_trait]
pub trait PortApi: Send + Sync {
    /// List the serial ports the service can see
    async fn list_ports(&self) -> Result<Vec<String>>;

    /// Send a payload to a port, returning the server's JSON response
    async fn send_text(&self, request: &SendTextRequest) -> Result<Value>;

    /// Ask the service to release the port it holds
    async fn release_port(&self) -> Result<Value>;

    /// Legacy single-value lookup
    #[cfg(feature = "lookup")]
    async fn lookup_value(&self, input: &str) -> Result<LookupResponse>;
}
