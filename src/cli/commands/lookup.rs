//! Lookup command implementation - Legacy single-value endpoint

use anyhow::{Result, anyhow};
use std::sync::Arc;

use super::{build_session, print_display};
use crate::client::PortApi;
use crate::config::AppConfig;
use crate::session::SessionControls;

/// Execute the lookup command
pub async fn execute_lookup_command(
    config: &AppConfig,
    api: Arc<dyn PortApi>,
    input: &str,
) -> Result<()> {
    let mut session = build_session(config, api, SessionControls::default());
    let result = session.lookup(input).await;

    print_display(&session.controls().display);

    result
        .map(|_| ())
        .map_err(|e| anyhow!("Lookup failed: {}", e))
}
