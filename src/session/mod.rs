//! Port session client and the controls it drives

pub mod controls;
pub mod port_session;

pub use controls::*;
pub use port_session::*;
