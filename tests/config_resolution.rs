//! Behavior-driven tests for base URL configuration
//!
//! The base URL is the single configuration value; these tests cover where
//! it may come from and what is rejected.

use std::fs;

use rookie_core::config::{base_url_from_env_file, BASE_URL_ENV, DEFAULT_BASE_URL};
use rookie_core::{ClientConfig, ConfigError};
use tempfile::tempdir;

#[test]
fn env_file_value_is_picked_up() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join(".env");
    fs::write(
        &path,
        format!("OTHER=1\n{BASE_URL_ENV}=https://stocks.example.test/api/\n"),
    )
    .expect("write env file");

    let from_file = base_url_from_env_file(&path).expect("env file parses");
    let config = ClientConfig::resolve_from(None, None, from_file.as_deref()).expect("valid");

    assert_eq!(config.base_url(), "https://stocks.example.test/api");
    assert_eq!(config.endpoint("health"), "https://stocks.example.test/api/health");
}

#[test]
fn env_file_without_the_key_falls_back_to_default() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join(".env");
    fs::write(&path, "PORT=8080\n").expect("write env file");

    let from_file = base_url_from_env_file(&path).expect("env file parses");
    assert!(from_file.is_none());

    let config = ClientConfig::resolve_from(None, None, from_file.as_deref()).expect("valid");
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn missing_env_file_is_an_error_when_named_explicitly() {
    let dir = tempdir().expect("temp dir");
    let result = base_url_from_env_file(dir.path().join("absent.env"));

    assert!(matches!(result, Err(ConfigError::EnvFile(_))));
}

#[test]
fn invalid_base_url_is_rejected_even_from_explicit_flag() {
    let result = ClientConfig::resolve_from(Some("not a url"), None, None);

    match result {
        Err(ConfigError::InvalidBaseUrl { value }) => assert_eq!(value, "not a url"),
        other => panic!("expected invalid base url, got {other:?}"),
    }
}
