//! Terminal User Interface components

pub mod app;
pub mod event_loop;
pub mod ui;


use anyhow::Result;
use std::sync::Arc;

use crate::client::HttpPortApi;
use crate::config::AppConfig;
use crate::session::{
    PayloadInput, PayloadSource, PortSelector, PortSession, SessionControls, create_port_session,
};

/// Controls for a fresh TUI session
pub fn initial_controls(source: &PayloadSource) -> SessionControls {
    let payload = match source {
        PayloadSource::Form => PayloadInput::default(),
        PayloadSource::Literal { text, .. } => PayloadInput::read_only(text.clone()),
    };
    SessionControls::new(PortSelector::default(), payload)
}

/// Session backing the TUI
pub fn build_tui_session(config: &AppConfig) -> Result<PortSession> {
    let source = config.payload_source();
    let controls = initial_controls(&source);
    Ok(create_port_session(
        Arc::new(HttpPortApi::new()?),
        controls,
        source,
    ))
}

/// Run the Terminal User Interface
pub async fn run_tui(config: AppConfig) -> Result<()> {
    let session = build_tui_session(&config)?;
    log::info!("Starting TUI");
    event_loop::run_tui_event_loop(app::App::new(session)).await
}
