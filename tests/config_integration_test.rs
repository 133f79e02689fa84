//! Integration tests for configuration loading and validation
//!
//! Tests that touch environment variables hold `ENV_MUTEX`.

use inventario::config::{load_config, load_config_or_default};
use inventario::domain::InventarioError;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("INVENTARIO_APPLICATION_LOG_LEVEL");
    std::env::remove_var("INVENTARIO_API_BASE_URL");
    std::env::remove_var("INVENTARIO_DASHBOARD_TIMEZONE");
    std::env::remove_var("INVENTARIO_DASHBOARD_RECENT_MOVEMENTS_LIMIT");
    std::env::remove_var("INVENTARIO_EXPORT_OUTPUT_DIR");
    std::env::remove_var("TEST_INVENTARIO_SERVER");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[api]
base_url = "https://inventario.example.com/api/"
timeout_seconds = 60
connect_timeout_seconds = 5

[dashboard]
timezone = "Europe/Madrid"
locale = "es_ES"
recent_movements_limit = 10
refresh_interval_seconds = 30
frontend_url = "https://inventario.example.com"

[export]
output_dir = "/tmp/reportes"

[logging]
local_enabled = false
local_path = "/tmp/inventario"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.api.base_url, "https://inventario.example.com/api/");
    assert_eq!(config.api.timeout_seconds, 60);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.dashboard.timezone, "Europe/Madrid");
    assert_eq!(config.dashboard.locale, "es_ES");
    assert_eq!(config.dashboard.recent_movements_limit, 10);
    assert_eq!(config.dashboard.refresh_interval_seconds, 30);
    assert_eq!(
        config.dashboard.frontend_url.as_deref(),
        Some("https://inventario.example.com")
    );
    assert_eq!(config.export.output_dir, PathBuf::from("/tmp/reportes"));
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[application]\nlog_level = \"warn\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api/");
    assert_eq!(config.dashboard.timezone, "America/Santiago");
    assert_eq!(config.dashboard.locale, "es_CL");
    assert_eq!(config.dashboard.recent_movements_limit, 5);
    assert_eq!(config.dashboard.refresh_interval_seconds, 10);
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_INVENTARIO_SERVER", "http://bodega.local:9000/api/");

    let file = write_config(
        r#"
# base_url = "${NOT_SUBSTITUTED_IN_COMMENTS}"
[api]
base_url = "${TEST_INVENTARIO_SERVER}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.api.base_url, "http://bodega.local:9000/api/");

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[api]\nbase_url = \"${TEST_INVENTARIO_SERVER}\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, InventarioError::Configuration(_)));
    assert!(err.to_string().contains("TEST_INVENTARIO_SERVER"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("INVENTARIO_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("INVENTARIO_DASHBOARD_TIMEZONE", "UTC");
    std::env::set_var("INVENTARIO_DASHBOARD_RECENT_MOVEMENTS_LIMIT", "20");
    std::env::set_var("INVENTARIO_EXPORT_OUTPUT_DIR", "/tmp/otros");

    let file = write_config("[dashboard]\ntimezone = \"America/Santiago\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.dashboard.timezone, "UTC");
    assert_eq!(config.dashboard.recent_movements_limit, 20);
    assert_eq!(config.export.output_dir, PathBuf::from("/tmp/otros"));

    cleanup_env_vars();
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("INVENTARIO_API_BASE_URL", "http://10.0.0.5/api/");

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("inventario.toml");

    assert!(load_config(&missing).is_err());
    let config = load_config_or_default(&missing).unwrap();
    assert_eq!(config.api.base_url, "http://10.0.0.5/api/");

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let cases = [
        "[application]\nlog_level = \"verbose\"\n",
        "[api]\nbase_url = \"ftp://inventario.local/\"\n",
        "[api]\ntimeout_seconds = 0\n",
        "[dashboard]\ntimezone = \"Mars/Olympus_Mons\"\n",
        "[dashboard]\nlocale = \"xx_YY\"\n",
        "[dashboard]\nrecent_movements_limit = 0\n",
        "[dashboard]\nrefresh_interval_seconds = 0\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
    ];

    for contents in cases {
        let file = write_config(contents);
        let result = load_config(file.path());
        assert!(
            matches!(result, Err(InventarioError::Configuration(_))),
            "expected rejection of:\n{contents}"
        );
    }
}
