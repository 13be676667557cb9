//! CLI command tests against the mock bridge service
//!
//! Each command must return `Err` (and so exit non-zero) whenever the
//! operation failed, whether locally or on the server.


use cncsend::cli::commands::{ports, release, send};
use cncsend::client::{HttpPortApi, PortApi};
use cncsend::config::AppConfig;
use mock_bridge::{BridgeState, spawn_bridge, unreachable_base_url};
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use warp::http::StatusCode;

fn api_for(base_url: &str) -> Arc<dyn PortApi> {
    Arc::new(HttpPortApi::with_base_url(base_url).unwrap())
}

#[tokio::test]
async fn test_send_text_succeeds() {
    let state = BridgeState::default();
    let api = api_for(&spawn_bridge(state.clone()));

    let result = send::execute_send_command(
        &AppConfig::default(),
        api,
        Some("G90".to_string()),
        None,
        Some("COM3".to_string()),
    )
    .await;

    assert!(result.is_ok(), "Send failed: {:?}", result);
    assert_eq!(
        state.sent_bodies(),
        vec![json!({ "text": "G90", "port": "COM3" })]
    );
}

#[tokio::test]
async fn test_send_whitespace_text_fails_without_request() {
    let state = BridgeState::default();
    let api = api_for(&spawn_bridge(state.clone()));

    let result = send::execute_send_command(
        &AppConfig::default(),
        api,
        Some("  \n\t ".to_string()),
        None,
        Some("COM3".to_string()),
    )
    .await;

    assert!(result.is_err());
    assert!(state.sent_bodies().is_empty());
}

#[tokio::test]
async fn test_send_without_port_fails_without_request() {
    let state = BridgeState::default();
    let api = api_for(&spawn_bridge(state.clone()));

    let result = send::execute_send_command(
        &AppConfig::default(),
        api,
        Some("G90".to_string()),
        None,
        None,
    )
    .await;

    assert!(result.is_err());
    assert!(state.sent_bodies().is_empty());
}

#[tokio::test]
async fn test_send_file_sends_trimmed_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("job.gcode");
    fs::write(&path, "\nG21\nG90\nG01 X10 Y10 F1000\n\n").unwrap();

    let state = BridgeState::default();
    let api = api_for(&spawn_bridge(state.clone()));

    let result = send::execute_send_command(
        &AppConfig::default(),
        api,
        None,
        Some(path),
        Some("/dev/ttyUSB0".to_string()),
    )
    .await;

    assert!(result.is_ok(), "Send failed: {:?}", result);
    assert_eq!(
        state.sent_bodies(),
        vec![json!({ "text": "G21\nG90\nG01 X10 Y10 F1000", "port": "/dev/ttyUSB0" })]
    );
}

#[tokio::test]
async fn test_send_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let state = BridgeState::default();
    let api = api_for(&spawn_bridge(state.clone()));

    let result = send::execute_send_command(
        &AppConfig::default(),
        api,
        None,
        Some(dir.path().join("absent.gcode")),
        Some("COM3".to_string()),
    )
    .await;

    assert!(result.is_err());
    assert!(state.sent_bodies().is_empty());
}

#[tokio::test]
async fn test_send_literal_mode_ignores_arguments() {
    let state = BridgeState::default();
    let api = api_for(&spawn_bridge(state.clone()));

    let mut config = AppConfig::default();
    config.payload.use_literal = true;

    let result = send::execute_send_command(&config, api, None, None, None).await;

    assert!(result.is_ok(), "Send failed: {:?}", result);
    assert_eq!(
        state.sent_bodies(),
        vec![json!({ "text": "G01 X10 Y10 F1000", "port": "COM3" })]
    );
}

#[tokio::test]
async fn test_send_unreachable_service_fails() {
    let result = send::execute_send_command(
        &AppConfig::default(),
        api_for(&unreachable_base_url()),
        Some("G90".to_string()),
        None,
        Some("COM3".to_string()),
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_release_succeeds() {
    let state = BridgeState::default();
    let api = api_for(&spawn_bridge(state.clone()));

    let result = release::execute_release_command(&AppConfig::default(), api).await;

    assert!(result.is_ok(), "Release failed: {:?}", result);
    assert_eq!(state.release_count(), 1);
}

#[tokio::test]
async fn test_release_not_found_fails() {
    let state = BridgeState::default();
    state.set_release_status(StatusCode::NOT_FOUND);
    let api = api_for(&spawn_bridge(state.clone()));

    let result = release::execute_release_command(&AppConfig::default(), api).await;

    assert!(result.is_err());
    assert_eq!(state.release_count(), 1);
}

#[tokio::test]
async fn test_ports_succeeds() {
    let state = BridgeState::with_ports(&["COM3", "COM4"]);
    let api = api_for(&spawn_bridge(state.clone()));

    let result = ports::execute_ports_command(&AppConfig::default(), api).await;

    assert!(result.is_ok(), "Ports failed: {:?}", result);
    assert_eq!(state.listing_count(), 1);
}

#[tokio::test]
async fn test_ports_service_unavailable_fails() {
    let state = BridgeState::default();
    state.set_ports_body(StatusCode::SERVICE_UNAVAILABLE, json!({}));
    let api = api_for(&spawn_bridge(state));

    let result = ports::execute_ports_command(&AppConfig::default(), api).await;

    assert!(result.is_err());
}

#[cfg(feature = "lookup")]
#[tokio::test]
async fn test_lookup_too_short_fails() {
    use cncsend::cli::commands::lookup;

    let api = api_for(&spawn_bridge(BridgeState::default()));

    let result = lookup::execute_lookup_command(&AppConfig::default(), api, "G90").await;

    assert!(result.is_err());
}
