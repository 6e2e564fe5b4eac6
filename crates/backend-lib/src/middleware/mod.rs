// crates/backend-lib/src/middleware/mod.rs

//! Middleware for the media gateway.

pub mod session_gate;

pub use session_gate::{reject, require_session};
