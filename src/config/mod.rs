//! Configuration management for cncsend

pub mod app_config;

pub use app_config::*;
