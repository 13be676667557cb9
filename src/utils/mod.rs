//! Utility functions and helpers used throughout cncsend

pub mod logging;
