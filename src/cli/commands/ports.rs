//! Ports command implementation - List ports known to the bridge service

use anyhow::{Result, anyhow};
use log::info;
use std::sync::Arc;

use super::build_session;
use crate::client::PortApi;
use crate::config::AppConfig;
use crate::session::{PortSelector, SessionControls};

/// Execute the ports command
pub async fn execute_ports_command(config: &AppConfig, api: Arc<dyn PortApi>) -> Result<()> {
    info!("Fetching available ports...");

    let mut session = build_session(config, api, SessionControls::default());
    let result = session.refresh_ports().await;

    print_selector(&session.controls().selector);

    match result {
        Ok(ports) => {
            println!();
            println!("Total ports detected: {}", ports.len());
            Ok(())
        }
        Err(e) => Err(anyhow!("Failed to fetch ports: {}", e)),
    }
}

/// Print the selector options the way the port dropdown lists them
pub fn print_selector(selector: &PortSelector) {
    println!("🔍 Available Ports:");
    println!("==================");

    for option in selector.options() {
        if option.is_placeholder() {
            println!("  ({})", option.label);
        } else if selector.selected() == Some(option.value.as_str()) {
            println!("  ▶ {} [selected]", option.label);
        } else {
            println!("  • {}", option.label);
        }
    }
}
