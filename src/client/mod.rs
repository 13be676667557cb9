//! HTTP client for the serial bridge service
//!
//! The bridge exposes its endpoints under a single base path. `PortApi` is
//! the seam the session talks to; `HttpPortApi` is the reqwest-backed
//! implementation used by the CLI and the TUI.

pub mod api;
pub mod http;

pub use api::*;
pub use http::*;

/// Base URL of the bridge service
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/edtwExampleAPI/";

/// Endpoint paths, relative to the base URL
pub mod endpoints {
    pub const AVAILABLE_PORTS: &str = "get-available-ports/";
    pub const SEND_TEXT: &str = "send_text/";
    pub const RELEASE_PORT: &str = "release_port/";
    #[cfg(feature = "lookup")]
    pub const LOOKUP_VALUE: &str = "get_val_from/";
}
