// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const SESSION_CREATED: &str = "session.created";
pub const SESSION_DELETED: &str = "session.deleted";
pub const SESSION_EXPIRED: &str = "session.expired";
pub const SESSION_ACTIVE: &str = "session.active";
pub const LOGIN_FAILED: &str = "login.failed";
pub const AUTH_REJECTED: &str = "auth.rejected";
pub const UPLOAD_BYTES: &str = "upload.bytes";
