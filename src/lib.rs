//! cncsend - G-code sender for a serial bridge HTTP API
//!
//! cncsend talks to a local HTTP service that owns the machine's serial
//! ports. It lists the ports the service can see, sends a text payload
//! (usually G-code) to the selected port, and asks the service to release
//! the port again. The same session logic backs both the one-shot CLI
//! commands and the interactive terminal UI.

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use client::{HttpPortApi, PortApi};
pub use errors::*;
pub use session::{PayloadSource, PortSession, SessionControls, create_port_session};

/// cncsend version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// cncsend application name
pub const APP_NAME: &str = "cncsend";
