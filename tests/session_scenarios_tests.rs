//! End-to-end session scenarios
//!
//! Each test drives a `PortSession` backed by the real HTTP client against
//! the mock bridge service, then checks what the controls show.


use cncsend::client::HttpPortApi;
use cncsend::errors::{ClientError, ValidationError};
use cncsend::session::{
    DisplayKind, NoticeLevel, PayloadInput, PayloadSource, PortSelector, PortSession,
    SEND_FAILED_MESSAGE, SessionControls, create_port_session,
};
use mock_bridge::{BridgeState, spawn_bridge, unreachable_base_url};
use serde_json::json;
use std::sync::Arc;
use warp::http::StatusCode;

fn session(base_url: &str, controls: SessionControls) -> PortSession {
    let api = HttpPortApi::with_base_url(base_url).unwrap();
    create_port_session(Arc::new(api), controls, PayloadSource::Form)
}

fn form(text: &str, port: &str) -> SessionControls {
    SessionControls::new(PortSelector::with_port(port), PayloadInput::new(text))
}

#[tokio::test]
async fn test_listing_preserves_previous_selection() {
    let state = BridgeState::with_ports(&["COM3", "COM4"]);
    let mut session = session(&spawn_bridge(state), form("", "COM4"));

    session.refresh_ports().await.unwrap();

    let selector = &session.controls().selector;
    assert_eq!(selector.values(), vec!["", "COM3", "COM4"]);
    assert_eq!(selector.labels(), vec!["Select a Port", "COM3", "COM4"]);
    assert_eq!(selector.selected(), Some("COM4"));
}

#[tokio::test]
async fn test_listing_drops_vanished_selection() {
    let state = BridgeState::with_ports(&["COM3"]);
    let mut session = session(&spawn_bridge(state), form("", "COM4"));

    session.refresh_ports().await.unwrap();

    assert_eq!(session.controls().selector.values(), vec!["", "COM3"]);
    assert_eq!(session.controls().selector.selected(), None);
}

#[tokio::test]
async fn test_empty_listing_shows_no_ports_placeholder() {
    let state = BridgeState::with_ports(&[]);
    let mut session = session(&spawn_bridge(state), form("", ""));

    session.refresh_ports().await.unwrap();

    let selector = &session.controls().selector;
    assert_eq!(selector.values(), vec!["", ""]);
    assert_eq!(selector.labels(), vec!["Select a Port", "No Ports Found"]);
    assert_eq!(selector.selected(), None);
}

#[tokio::test]
async fn test_failed_listing_shows_error_placeholder() {
    let state = BridgeState::default();
    state.set_ports_body(StatusCode::SERVICE_UNAVAILABLE, json!({}));
    let mut session = session(&spawn_bridge(state), form("", "COM3"));

    assert!(session.refresh_ports().await.is_err());
    assert_eq!(
        session.controls().selector.labels(),
        vec!["Error Fetching Ports"]
    );
    assert_eq!(session.controls().selector.selected(), None);
}

#[tokio::test]
async fn test_successful_send_shows_pretty_response() {
    let state = BridgeState::default();
    state.set_send_response(json!({ "status": "ok" }));
    let mut session = session(&spawn_bridge(state.clone()), form("G90", "COM3"));

    let response = session.send().await.unwrap();
    assert_eq!(response, json!({ "status": "ok" }));

    let display = &session.controls().display;
    assert_eq!(display.kind(), DisplayKind::Response);
    assert!(display.text().contains("\"status\": \"ok\""));
    assert!(session.controls().send_button.is_enabled());
    assert_eq!(
        state.sent_bodies(),
        vec![json!({ "text": "G90", "port": "COM3" })]
    );
}

#[tokio::test]
async fn test_payload_is_trimmed_before_sending() {
    let state = BridgeState::default();
    let mut session = session(&spawn_bridge(state.clone()), form("\n  G28 X Y\t\n", "COM3"));

    session.send().await.unwrap();
    assert_eq!(
        state.sent_bodies(),
        vec![json!({ "text": "G28 X Y", "port": "COM3" })]
    );
}

#[tokio::test]
async fn test_network_failure_shows_generic_message() {
    let mut session = session(&unreachable_base_url(), form("G90", "COM3"));

    let err = session.send().await.unwrap_err();
    assert!(err.is_network());

    let display = &session.controls().display;
    assert_eq!(display.kind(), DisplayKind::Error);
    assert_eq!(display.body(), SEND_FAILED_MESSAGE);
    assert!(session.controls().send_button.is_enabled());
}

#[tokio::test]
async fn test_whitespace_payload_never_reaches_network() {
    let state = BridgeState::default();
    let mut session = session(&spawn_bridge(state.clone()), form("   \n\t ", "COM3"));

    let err = session.send().await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Validation(ValidationError::EmptyPayload)
    ));
    assert!(state.sent_bodies().is_empty());
    assert_eq!(
        session.controls().current_notice().map(|n| n.level),
        Some(NoticeLevel::Warning)
    );
}

#[tokio::test]
async fn test_missing_port_never_reaches_network() {
    let state = BridgeState::default();
    let mut session = session(&spawn_bridge(state.clone()), form("G90", ""));

    let err = session.send().await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Validation(ValidationError::NoPortSelected)
    ));
    assert!(state.sent_bodies().is_empty());
    assert!(session.controls().send_button.is_enabled());
}

#[tokio::test]
async fn test_server_rejection_is_generic_failure() {
    let mut session = session(&unreachable_base_url(), form("G90", "COM3"));
    let request = session.begin_send().unwrap();
    assert_eq!(request.port, "COM3");

    let result = session.finish_send(Err(ClientError::Server {
        status: 400,
        message: None,
        error: Some("No port input provided".to_string()),
    }));

    assert!(result.is_err());
    assert_eq!(session.controls().display.body(), SEND_FAILED_MESSAGE);

    // Settling twice leaves the button enabled
    let _ = session.finish_send(Err(ClientError::Network("late".to_string())));
    assert!(session.controls().send_button.is_enabled());
}

#[tokio::test]
async fn test_release_confirms_and_reenables_send() {
    let state = BridgeState::default();
    let mut session = session(&spawn_bridge(state.clone()), form("G90", "COM3"));

    session.begin_send().unwrap();
    assert!(!session.controls().send_button.is_enabled());

    session.release_port().await.unwrap();

    assert_eq!(state.release_count(), 1);
    assert!(session.controls().send_button.is_enabled());
    let notice = session.controls().current_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.message, "Port released successfully.");
}

#[tokio::test]
async fn test_release_failure_notice() {
    let state = BridgeState::default();
    state.set_release_status(StatusCode::NOT_FOUND);
    let mut session = session(&spawn_bridge(state), form("", ""));

    assert!(session.release_port().await.is_err());
    let notice = session.controls().current_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(session.controls().send_button.is_enabled());
}

#[tokio::test]
async fn test_literal_mode_sends_fixed_payload() {
    let state = BridgeState::default();
    let api = HttpPortApi::with_base_url(&spawn_bridge(state.clone())).unwrap();
    let mut session = create_port_session(
        Arc::new(api),
        SessionControls::new(PortSelector::default(), PayloadInput::read_only("G01 X10 Y10 F1000")),
        PayloadSource::Literal {
            text: "G01 X10 Y10 F1000".to_string(),
            port: "COM3".to_string(),
        },
    );

    session.send().await.unwrap();
    assert_eq!(
        state.sent_bodies(),
        vec![json!({ "text": "G01 X10 Y10 F1000", "port": "COM3" })]
    );
}

#[cfg(feature = "lookup")]
mod lookup {
    use super::*;

    #[tokio::test]
    async fn test_lookup_renders_labeled_lines() {
        let mut session = session(&spawn_bridge(BridgeState::default()), form("", ""));

        session.lookup("G01 X10 Y10").await.unwrap();
        assert_eq!(
            session.controls().display.body(),
            "Input: G01 X10 Y10\nLength: 11\nMessage: GCode sent successfully"
        );
    }

    #[tokio::test]
    async fn test_lookup_server_message_and_status() {
        let mut session = session(&spawn_bridge(BridgeState::default()), form("", ""));

        assert!(session.lookup("short").await.is_err());
        assert_eq!(
            session.controls().display.body(),
            "Input must be between 10 and 20 characters long. (Status: 400)"
        );
    }

    #[tokio::test]
    async fn test_lookup_unreachable_is_generic() {
        let mut session = session(&unreachable_base_url(), form("", ""));

        assert!(session.lookup("G01 X10 Y10").await.is_err());
        assert_eq!(
            session.controls().display.body(),
            cncsend::session::LOOKUP_UNREACHABLE_MESSAGE
        );
    }
}
