//! The port session: list ports, send a payload, release the port
//!
//! Every operation is split into a synchronous begin step, the network call
//! on the [`PortApi`], and a synchronous finish step. The TUI runs the
//! network call on a spawned task and feeds the result back into the finish
//! step from its event loop; the CLI uses the combined async methods.
//!
//! Failures are surfaced on the controls (display, selector, notices) and
//! logged before the finish step hands the result back, so callers only use
//! the returned `Result` to decide an exit status.

use std::sync::Arc;

use log::{error, info, warn};
use serde_json::Value;

use super::controls::{Notice, SessionControls};
use crate::client::PortApi;
#[cfg(feature = "lookup")]
use crate::errors::ClientError;
use crate::errors::{Result, ValidationError};
#[cfg(feature = "lookup")]
use crate::models::LookupResponse;
use crate::models::SendTextRequest;

pub const SEND_FAILED_MESSAGE: &str = "Failed to send message.";
pub const RELEASE_OK_MESSAGE: &str = "Port released successfully.";
pub const RELEASE_FAILED_MESSAGE: &str = "❌ Failed to release the port.";
#[cfg(feature = "lookup")]
pub const LOOKUP_UNREACHABLE_MESSAGE: &str = "Could not connect to the server.";

/// Where the sent text and port come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// Payload editor and port selector
    Form,
    /// Fixed test payload and port
    Literal { text: String, port: String },
}

/// Client for one interactive session against the bridge service
pub struct PortSession {
    api: Arc<dyn PortApi>,
    controls: SessionControls,
    source: PayloadSource,
}

/// Build a session around injected controls
pub fn create_port_session(
    api: Arc<dyn PortApi>,
    controls: SessionControls,
    source: PayloadSource,
) -> PortSession {
    PortSession {
        api,
        controls,
        source,
    }
}

impl PortSession {
    pub fn controls(&self) -> &SessionControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut SessionControls {
        &mut self.controls
    }

    pub fn source(&self) -> &PayloadSource {
        &self.source
    }

    /// Handle to the API for running calls off the event loop
    pub fn api(&self) -> Arc<dyn PortApi> {
        Arc::clone(&self.api)
    }

    /// Apply a port listing result to the selector
    pub fn finish_port_refresh(&mut self, result: Result<Vec<String>>) -> Result<Vec<String>> {
        match result {
            Ok(ports) => {
                info!("Fetched {} port(s)", ports.len());
                self.controls.selector.replace_ports(&ports);
                Ok(ports)
            }
            Err(e) => {
                error!("Error fetching ports: {}", e);
                self.controls.selector.show_fetch_error();
                Err(e)
            }
        }
    }

    /// Fetch the port list and rebuild the selector
    pub async fn refresh_ports(&mut self) -> Result<Vec<String>> {
        let result = self.api.list_ports().await;
        self.finish_port_refresh(result)
    }

    /// Validate the payload and port, then disable the send button.
    ///
    /// A validation failure leaves the button alone, queues a warning
    /// notice, and means no request must be made.
    pub fn begin_send(&mut self) -> Result<SendTextRequest> {
        let (text, port) = match &self.source {
            PayloadSource::Form => (
                self.controls.payload.trimmed().to_string(),
                self.controls.selector.value().to_string(),
            ),
            PayloadSource::Literal { text, port } => (text.trim().to_string(), port.clone()),
        };

        let validation = if text.is_empty() {
            Some(ValidationError::EmptyPayload)
        } else if port.is_empty() {
            Some(ValidationError::NoPortSelected)
        } else {
            None
        };

        if let Some(err) = validation {
            warn!("Send aborted: {}", err);
            self.controls.push_notice(Notice::warning(format!("❌ {}", err)));
            return Err(err.into());
        }

        self.controls.send_button.disable();
        Ok(SendTextRequest { text, port })
    }

    /// Render a send result and re-enable the send button
    pub fn finish_send(&mut self, result: Result<Value>) -> Result<Value> {
        match &result {
            Ok(response) => {
                info!("Response from server: {}", response);
                self.controls.display.show_response(response);
            }
            Err(e) => {
                error!("Error sending text: {}", e);
                self.controls.display.show_error(SEND_FAILED_MESSAGE);
            }
        }
        self.controls.send_button.enable();
        result
    }

    /// Validate, send, and render the response
    pub async fn send(&mut self) -> Result<Value> {
        let request = self.begin_send()?;
        let result = self.api.send_text(&request).await;
        self.finish_send(result)
    }

    /// Surface a release result and re-enable the send button
    pub fn finish_release(&mut self, result: Result<Value>) -> Result<Value> {
        match &result {
            Ok(response) => {
                info!("Port released: {}", response);
                self.controls.push_notice(Notice::info(RELEASE_OK_MESSAGE));
            }
            Err(e) => {
                error!("Error releasing port: {}", e);
                self.controls
                    .push_notice(Notice::error(RELEASE_FAILED_MESSAGE));
            }
        }
        self.controls.send_button.enable();
        result
    }

    /// Ask the service to release the port
    pub async fn release_port(&mut self) -> Result<Value> {
        let result = self.api.release_port().await;
        self.finish_release(result)
    }

    /// Render a lookup result as labeled lines, or the server's complaint
    #[cfg(feature = "lookup")]
    pub fn finish_lookup(&mut self, result: Result<LookupResponse>) -> Result<LookupResponse> {
        match &result {
            Ok(response) => {
                info!("Lookup response: {:?}", response);
                self.controls
                    .display
                    .show_lines("Server Response:", &response.display_lines());
            }
            Err(e) => {
                error!("Error looking up value: {}", e);
                self.controls.display.show_error(&lookup_error_message(e));
            }
        }
        result
    }

    /// Send a single value to the legacy lookup endpoint
    #[cfg(feature = "lookup")]
    pub async fn lookup(&mut self, input: &str) -> Result<LookupResponse> {
        let result = self.api.lookup_value(input).await;
        self.finish_lookup(result)
    }
}

/// Message for a failed lookup: server detail and status when the server
/// answered, a generic connection message otherwise
#[cfg(feature = "lookup")]
pub fn lookup_error_message(err: &ClientError) -> String {
    match err {
        ClientError::Server { status, .. } => format!(
            "{} (Status: {})",
            err.server_detail().unwrap_or("Request failed"),
            status
        ),
        _ => LOOKUP_UNREACHABLE_MESSAGE.to_string(),
    }
}

impl std::fmt::Debug for PortSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortSession")
            .field("controls", &self.controls)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
