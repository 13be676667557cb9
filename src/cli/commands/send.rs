//! Send command implementation - Send a payload to a port

use anyhow::{Context, Result, anyhow};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use super::{build_session, print_display, print_notices};
use crate::client::PortApi;
use crate::config::AppConfig;
use crate::session::{PayloadInput, PayloadSource, PortSelector, SessionControls};

/// Execute the send command
pub async fn execute_send_command(
    config: &AppConfig,
    api: Arc<dyn PortApi>,
    text: Option<String>,
    file: Option<PathBuf>,
    port: Option<String>,
) -> Result<()> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read payload from {}", path.display()))?,
        (None, None) => String::new(),
    };

    let controls = SessionControls::new(
        PortSelector::with_port(port.as_deref().unwrap_or_default()),
        PayloadInput::new(text),
    );
    let mut session = build_session(config, api, controls);

    if let PayloadSource::Literal { text, port } = session.source() {
        info!("Literal mode: sending '{}' to {}", text, port);
    }

    let result = match session.begin_send() {
        Ok(request) => {
            println!("📤 Sending payload to {}...", request.port);
            let result = session.api().send_text(&request).await;
            session.finish_send(result)
        }
        Err(e) => Err(e),
    };

    print_notices(session.controls_mut());
    print_display(&session.controls().display);

    result
        .map(|_| ())
        .map_err(|e| anyhow!("Send failed: {}", e))
}
