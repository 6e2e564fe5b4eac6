// ============================
// mediagate-backend/src/lib.rs
// ============================
//! Core backend functionality for the media upload gateway.
//!
//! A single shared secret unlocks a cookie session; the session gate then
//! guards the upload endpoint, the home page and the static assets.

pub mod auth;
pub mod config;
pub mod cookie;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod storage;

use std::sync::Arc;

use crate::auth::{AuthService, Credential, DefaultAuth, Janitor, JanitorHandle, SessionStore};
use crate::config::Settings;
use crate::storage::{FlatFileStorage, Storage};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth: Arc<dyn AuthService>,
    /// Session store, shared with the janitor
    pub sessions: SessionStore,
    /// Settings, immutable after startup
    pub settings: Arc<Settings>,
    /// Media storage backend
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Settings) -> anyhow::Result<Self> {
        let storage = FlatFileStorage::new(&config.media_dir)?;
        Ok(Self::with_storage(config, Arc::new(storage)))
    }

    /// Create a new application state around an existing storage backend
    pub fn with_storage(config: Settings, storage: Arc<dyn Storage>) -> Self {
        let sessions = SessionStore::new(config.session_ttl());
        let auth = Arc::new(DefaultAuth::new(
            Credential::new(config.secret.clone()),
            sessions.clone(),
        ));

        Self {
            auth,
            sessions,
            settings: Arc::new(config),
            storage,
        }
    }

    /// Start the background sweep of expired sessions
    pub fn spawn_janitor(&self) -> JanitorHandle {
        Janitor::spawn(self.sessions.clone(), self.settings.janitor_interval())
    }
}
