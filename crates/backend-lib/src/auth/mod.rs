// ============================
// mediagate-backend/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod credential;
pub mod janitor;
pub mod session;
mod service;
mod service_impl;

pub use credential::Credential;
pub use janitor::{Janitor, JanitorHandle, JANITOR_INTERVAL};
pub use service::AuthService;
pub use service_impl::DefaultAuth;
pub use session::{Session, SessionStore, SESSION_TTL_SECS};
