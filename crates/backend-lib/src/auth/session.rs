// ============================
// mediagate-backend/src/auth/session.rs
// ============================
//! In-memory session store.
//!
//! Maps a session identifier to its absolute expiry. Entries are inserted on
//! login and removed either explicitly or by the janitor sweep; nothing is ever
//! updated in place, so sessions are not extended on use.
use chrono::{DateTime, Duration, Utc};
use metrics::{counter, gauge};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::metrics::{SESSION_ACTIVE, SESSION_CREATED, SESSION_DELETED, SESSION_EXPIRED};

/// Session TTL (time to live) in seconds
pub const SESSION_TTL_SECS: i64 = 60 * 60; // 1 hour

/// A freshly issued session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub expires_at: DateTime<Utc>,
}

/// Shared map of live sessions
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::seconds(SESSION_TTL_SECS))
    }
}

impl SessionStore {
    /// Create an empty store issuing sessions that live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mint a new session expiring `ttl` from now
    ///
    /// Identifiers are random v4 UUIDs; collisions are not checked.
    pub async fn create(&self) -> Session {
        let id = Uuid::new_v4().to_string();
        let expires_at = Utc::now()
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut sessions = self.sessions.write().await;
        sessions.insert(id.clone(), expires_at);

        counter!(SESSION_CREATED).increment(1);
        gauge!(SESSION_ACTIVE).set(sessions.len() as f64);
        info!(session_id = %id, %expires_at, "Starting session");

        Session { id, expires_at }
    }

    /// Whether the identifier is present, regardless of its expiry
    pub async fn lookup(&self, id: &str) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    /// Expiry recorded for the identifier, if present
    pub async fn expiry_of(&self, id: &str) -> Option<DateTime<Utc>> {
        self.sessions.read().await.get(id).copied()
    }

    /// Present and not yet expired at `now`
    pub async fn is_valid_at(&self, id: &str, now: DateTime<Utc>) -> bool {
        self.expiry_of(id)
            .await
            .is_some_and(|expires_at| now <= expires_at)
    }

    /// Remove a session; absent identifiers are a no-op
    pub async fn delete(&self, id: &str) {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(id).is_some() {
            counter!(SESSION_DELETED).increment(1);
            gauge!(SESSION_ACTIVE).set(sessions.len() as f64);
            debug!(session_id = %id, "Session deleted");
        }
    }

    /// Drop every entry whose expiry is strictly before `now`
    ///
    /// Returns the number of sessions removed.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before_count = sessions.len();

        sessions.retain(|id, expires_at| {
            let keep = *expires_at >= now;
            if !keep {
                debug!(session_id = %id, "Session expired");
            }
            keep
        });

        let after_count = sessions.len();
        let removed = before_count - after_count;

        if removed > 0 {
            counter!(SESSION_EXPIRED).increment(removed as u64);
            gauge!(SESSION_ACTIVE).set(after_count as f64);
        }

        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
