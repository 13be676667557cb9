//! Release command implementation - Release the port held by the service

use anyhow::{Result, anyhow};
use std::sync::Arc;

use super::{build_session, print_notices};
use crate::client::PortApi;
use crate::config::AppConfig;
use crate::session::SessionControls;

/// Execute the release command
pub async fn execute_release_command(config: &AppConfig, api: Arc<dyn PortApi>) -> Result<()> {
    println!("🔓 Releasing port...");

    let mut session = build_session(config, api, SessionControls::default());
    let result = session.release_port().await;

    print_notices(session.controls_mut());

    result
        .map(|_| ())
        .map_err(|e| anyhow!("Release failed: {}", e))
}
