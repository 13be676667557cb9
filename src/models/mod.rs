//! Data models and types used throughout cncsend

pub mod events;
#[cfg(feature = "lookup")]
pub mod lookup;
pub mod payload;
pub mod ports;
pub mod responses;
pub mod tui;

// Re-export commonly used types
pub use events::*;
#[cfg(feature = "lookup")]
pub use lookup::*;
pub use payload::*;
pub use ports::*;
pub use responses::*;

// Only export TUI-specific types that don't conflict
pub use tui::FocusedPane;
