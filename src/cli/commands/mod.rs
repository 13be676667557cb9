//! CLI command implementations

#[cfg(feature = "lookup")]
pub mod lookup;
pub mod ports;
pub mod release;
pub mod send;

use anyhow::Result;
use std::sync::Arc;

use crate::cli::args::Commands;
use crate::client::{HttpPortApi, PortApi};
use crate::config::AppConfig;
use crate::session::{
    DisplayKind, NoticeLevel, PortSession, ResponseDisplay, SessionControls, create_port_session,
};

/// Execute a CLI command
pub async fn execute_command(command: Commands, config: &AppConfig) -> Result<()> {
    let api: Arc<dyn PortApi> = Arc::new(HttpPortApi::new()?);

    match command {
        Commands::Ports => ports::execute_ports_command(config, api).await,
        Commands::Send { text, file, port } => {
            send::execute_send_command(config, api, text, file, port).await
        }
        Commands::Release => release::execute_release_command(config, api).await,
        #[cfg(feature = "lookup")]
        Commands::Lookup { input } => {
            lookup::execute_lookup_command(config, api, &input).await
        }
    }
}

/// Session for one command, using the payload source from the config
pub fn build_session(
    config: &AppConfig,
    api: Arc<dyn PortApi>,
    controls: SessionControls,
) -> PortSession {
    create_port_session(api, controls, config.payload_source())
}

/// Print and acknowledge every pending notice
pub fn print_notices(controls: &mut SessionControls) {
    for notice in controls.drain_notices() {
        match notice.level {
            NoticeLevel::Info => println!("✅ {}", notice.message),
            NoticeLevel::Warning => println!("⚠️  {}", notice.message),
            NoticeLevel::Error => println!("{}", notice.message),
        }
    }
}

/// Print the response display, if it holds anything
pub fn print_display(display: &ResponseDisplay) {
    match display.kind() {
        DisplayKind::Empty => {}
        DisplayKind::Response => {
            println!("📨 {}", display.heading());
            println!("{}", display.body());
        }
        DisplayKind::Error => {
            println!("❌ {} {}", display.heading(), display.body());
        }
    }
}
