//! Error types for cncsend

pub mod types;

pub use types::*;
