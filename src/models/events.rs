//! Application events for the TUI event loop

use serde_json::Value;

use crate::errors::Result;
#[cfg(feature = "lookup")]
use crate::models::lookup::LookupResponse;

/// Events delivered to the TUI event loop.
///
/// Network calls run on spawned tasks and report back through these, so
/// every session state change happens on the event loop itself.
#[derive(Debug)]
pub enum AppEvent {
    // Port listing events
    PortsFetched(Result<Vec<String>>),

    // Send events
    SendFinished(Result<Value>),

    // Release events
    ReleaseFinished(Result<Value>),

    // Legacy lookup events
    #[cfg(feature = "lookup")]
    LookupFinished(Result<LookupResponse>),

    // General events
    Tick,
}
