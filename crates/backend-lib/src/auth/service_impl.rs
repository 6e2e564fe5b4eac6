use async_trait::async_trait;
use chrono::{DateTime, Utc};
use metrics::counter;
use tracing::warn;

use crate::auth::{AuthService, Credential, Session, SessionStore};
use crate::error::AppError;
use crate::metrics::LOGIN_FAILED;

/// Shared-secret authentication backed by the in-memory [`SessionStore`]
pub struct DefaultAuth {
    credential: Credential,
    sm: SessionStore,
}

impl DefaultAuth {
    pub fn new(credential: Credential, sm: SessionStore) -> Self {
        Self { credential, sm }
    }
}

#[async_trait]
impl AuthService for DefaultAuth {
    async fn login(&self, secret: &str) -> Result<Session, AppError> {
        if !self.credential.matches(secret) {
            counter!(LOGIN_FAILED).increment(1);
            warn!("Invalid login attempt");
            return Err(AppError::InvalidCredentials);
        }
        Ok(self.sm.create().await)
    }

    async fn validate_session(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.sm.lookup(id).await)
    }

    async fn validate_session_at(&self, id: &str, now: DateTime<Utc>) -> Result<bool, AppError> {
        Ok(self.sm.is_valid_at(id, now).await)
    }

    async fn logout(&self, id: &str) -> Result<(), AppError> {
        self.sm.delete(id).await;
        Ok(())
    }
}
