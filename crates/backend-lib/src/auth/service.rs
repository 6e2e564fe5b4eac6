// =============
// crates/backend-lib/src/auth/service.rs
// =============
//! This module defines the `AuthService` trait, which is used for authentication
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::Session;
use crate::error::AppError;

/// Authentication seam between the HTTP layer and session storage.
///
/// Store failures are returned as errors so callers answer with a server
/// error instead of treating the request as unauthenticated.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check the submitted secret and mint a session when it matches
    async fn login(&self, secret: &str) -> Result<Session, AppError>;
    /// Whether the session identifier is present in the store
    async fn validate_session(&self, id: &str) -> Result<bool, AppError>;
    /// Present and not expired at `now`
    async fn validate_session_at(&self, id: &str, now: DateTime<Utc>) -> Result<bool, AppError>;
    async fn logout(&self, id: &str) -> Result<(), AppError>;
}
