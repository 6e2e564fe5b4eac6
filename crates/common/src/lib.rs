// ================
// common/src/lib.rs
// ================
//! Wire types shared between the media gateway and its browser client.
//! This module defines the login payloads, the cookie name and the route table.

use serde::{Deserialize, Serialize};

/// Name of the cookie carrying the session identifier
pub const SESSION_COOKIE_NAME: &str = "session_id";

/// Multipart field holding the uploaded media file
pub const UPLOAD_FIELD: &str = "videoFile";

/// Route paths served by the gateway
pub mod routes {
    pub const ROOT: &str = "/";
    pub const HOME: &str = "/home";
    pub const FAVICON: &str = "/favicon.ico";
    pub const STATIC: &str = "/static";
    pub const LOGIN: &str = "/api/v1/login";
    pub const LOGOUT: &str = "/api/v1/logout";
    pub const UPLOAD: &str = "/api/v1/upload";
}

/// Login body for the password flavoured login endpoint
///
/// An absent field decodes as empty and then simply fails to match.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PasswordLogin {
    #[serde(default)]
    pub password: String,
}

/// Login body for the token flavoured login endpoint
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenLogin {
    #[serde(default)]
    pub token: String,
}

impl PasswordLogin {
    /// Consume the payload and hand back the submitted secret
    pub fn into_secret(self) -> String {
        self.password
    }
}

impl TokenLogin {
    /// Consume the payload and hand back the submitted secret
    pub fn into_secret(self) -> String {
        self.token
    }
}
