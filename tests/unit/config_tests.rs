// ==========================
// tests/unit/config_tests.rs
// ==========================
//! Unit tests for the configuration module
use mediagate_backend::config::{LoginVariant, RejectPolicy, Settings};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_settings_default() {
    let settings = Settings::default();

    assert_eq!(settings.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(settings.static_dir, PathBuf::from("static"));
    assert_eq!(settings.media_dir, PathBuf::from("media"));
    assert_eq!(settings.session_ttl_secs, 60 * 60);
    assert_eq!(settings.janitor_interval_secs, 10 * 60);
    assert_eq!(settings.max_upload_bytes, 1000 << 20);
}

#[test]
fn test_load_config_from_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("gateway.toml");

    let config_content = r#"
        bind_addr = "127.0.0.1:9000"
        base_url = "https://media.example"
        secret = "abc123"
        static_dir = "assets"
        media_dir = "uploads"
        login_variant = "token"
        reject_policy = "unauthorized"
        strict_expiry = true
        janitor_interval_secs = 30
    "#;
    fs::write(&config_path, config_content).unwrap();

    let settings = Settings::load_from(&config_path).unwrap();
    assert_eq!(settings.bind_addr.to_string(), "127.0.0.1:9000");
    assert_eq!(settings.base_url, "https://media.example");
    assert_eq!(settings.static_dir, PathBuf::from("assets"));
    assert_eq!(settings.media_dir, PathBuf::from("uploads"));
    assert_eq!(settings.login_variant, LoginVariant::Token);
    assert_eq!(settings.reject_policy, RejectPolicy::Unauthorized);
    assert!(settings.strict_expiry);
    assert_eq!(settings.janitor_interval().as_secs(), 30);
    // Not in the file, so the default remains
    assert_eq!(settings.session_ttl_secs, 3600);
}

#[test]
fn test_invalid_file_is_rejected() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("gateway.toml");

    fs::write(&config_path, "secret = \"abc123\"\nsession_ttl_secs = 0\n").unwrap();
    assert!(Settings::load_from(&config_path).is_err());

    fs::write(&config_path, "secret = \"abc123\"\nreject_policy = \"teapot\"\n").unwrap();
    assert!(Settings::load_from(&config_path).is_err());
}
