// ============================
// mediagate-backend/src/config.rs
// ============================
//! Configuration management.
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::auth::{JANITOR_INTERVAL, SESSION_TTL_SECS};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mediagate.toml";

/// Prefix for environment overrides, e.g. `MEDIAGATE_SECRET`
pub const ENV_PREFIX: &str = "MEDIAGATE_";

/// Longest session lifetime accepted (ten years)
pub const MAX_SESSION_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Which JSON field the login endpoint expects, and how it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoginVariant {
    /// `{"password": ...}`; decode failure is 500, mismatch is 401
    #[default]
    Password,
    /// `{"token": ...}`; every failure is 403, cookie is `SameSite=Lax`
    Token,
}

/// Response given to requests on protected routes without a live session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RejectPolicy {
    /// 303 See Other to `/`
    #[default]
    Redirect,
    /// 404 Not Found
    NotFound,
    /// 401 Unauthorized
    Unauthorized,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Public URL of the service, rendered into the login page
    pub base_url: String,
    /// Shared login secret
    pub secret: String,
    /// Directory holding the HTML pages and static assets
    pub static_dir: PathBuf,
    /// Directory receiving uploaded media
    pub media_dir: PathBuf,
    /// Log level
    pub log_level: String,
    pub login_variant: LoginVariant,
    pub reject_policy: RejectPolicy,
    /// Also compare expiry at request time instead of relying on the janitor alone
    pub strict_expiry: bool,
    /// Session TTL in seconds
    pub session_ttl_secs: u64,
    /// Janitor sweep interval in seconds
    pub janitor_interval_secs: u64,
    /// Upper bound on an upload request body
    pub max_upload_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            base_url: "http://localhost:8080".to_string(),
            secret: String::new(),
            static_dir: PathBuf::from("static"),
            media_dir: PathBuf::from("media"),
            log_level: "info".to_string(),
            login_variant: LoginVariant::default(),
            reject_policy: RejectPolicy::default(),
            strict_expiry: false,
            session_ttl_secs: SESSION_TTL_SECS.unsigned_abs(),
            janitor_interval_secs: JANITOR_INTERVAL.as_secs(),
            max_upload_bytes: 1000 << 20,
        }
    }
}

impl Settings {
    /// Load settings from `mediagate.toml` and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load settings from a specific TOML file and the environment
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings: Settings = Self::figment(path).extract()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Layered sources: defaults, then the file, then `MEDIAGATE_*` variables
    pub fn figment<P: AsRef<Path>>(path: P) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.secret.is_empty() {
            bail!("secret must be set (env {ENV_PREFIX}SECRET)");
        }
        if self.session_ttl_secs == 0 {
            bail!("session_ttl_secs must be positive");
        }
        if self.session_ttl_secs > MAX_SESSION_TTL_SECS {
            bail!("session_ttl_secs must not exceed {MAX_SESSION_TTL_SECS}");
        }
        if self.janitor_interval_secs == 0 {
            bail!("janitor_interval_secs must be positive");
        }
        if self.max_upload_bytes == 0 {
            bail!("max_upload_bytes must be positive");
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            bail!("unknown log level {:?}", self.log_level);
        }
        Ok(())
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        // Clamped so unvalidated settings still yield a representable span
        let secs = self.session_ttl_secs.min(MAX_SESSION_TTL_SECS);
        chrono::Duration::seconds(secs as i64)
    }

    pub fn janitor_interval(&self) -> Duration {
        Duration::from_secs(self.janitor_interval_secs)
    }
}
