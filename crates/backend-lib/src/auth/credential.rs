// ============================
// mediagate-backend/src/auth/credential.rs
// ============================
//! The single shared login secret.
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Shared secret compared byte-for-byte against login attempts
///
/// Stored in cleartext for the lifetime of the process and wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Whether the submitted value equals the configured secret
    pub fn matches(&self, submitted: &str) -> bool {
        self.0.as_bytes() == submitted.as_bytes()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
