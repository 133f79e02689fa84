//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::InventarioConfig;
use crate::domain::errors::InventarioError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into InventarioConfig
/// 4. Applies environment variable overrides (INVENTARIO_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use inventario::config::loader::load_config;
///
/// let config = load_config("inventario.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<InventarioConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(InventarioError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        InventarioError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: InventarioConfig = toml::from_str(&contents)
        .map_err(|e| InventarioError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Like [`load_config`], but a missing file yields the built-in defaults
///
/// Environment overrides and validation still apply, so a bare
/// `INVENTARIO_API_BASE_URL=...` is enough to point the client somewhere.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<InventarioConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );
    finish(InventarioConfig::default())
}

fn finish(mut config: InventarioConfig) -> Result<InventarioConfig> {
    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        InventarioError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| InventarioError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(InventarioError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    let mut result = lines.join("\n");
    if input.ends_with('\n') {
        result.push('\n');
    }
    Ok(result)
}

/// Applies environment variable overrides using INVENTARIO_* prefix
///
/// Environment variables follow the pattern: INVENTARIO_<SECTION>_<KEY>
/// For example: INVENTARIO_API_BASE_URL, INVENTARIO_DASHBOARD_TIMEZONE.
/// Unparseable numeric values are ignored.
fn apply_env_overrides(config: &mut InventarioConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("INVENTARIO_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // API overrides
    if let Ok(val) = std::env::var("INVENTARIO_API_BASE_URL") {
        config.api.base_url = val;
    }
    if let Ok(val) = std::env::var("INVENTARIO_API_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.api.timeout_seconds = secs;
        }
    }
    if let Ok(val) = std::env::var("INVENTARIO_API_CONNECT_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.api.connect_timeout_seconds = secs;
        }
    }

    // Dashboard overrides
    if let Ok(val) = std::env::var("INVENTARIO_DASHBOARD_TIMEZONE") {
        config.dashboard.timezone = val;
    }
    if let Ok(val) = std::env::var("INVENTARIO_DASHBOARD_LOCALE") {
        config.dashboard.locale = val;
    }
    if let Ok(val) = std::env::var("INVENTARIO_DASHBOARD_RECENT_MOVEMENTS_LIMIT") {
        if let Ok(limit) = val.parse() {
            config.dashboard.recent_movements_limit = limit;
        }
    }
    if let Ok(val) = std::env::var("INVENTARIO_DASHBOARD_REFRESH_INTERVAL_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.dashboard.refresh_interval_seconds = secs;
        }
    }
    if let Ok(val) = std::env::var("INVENTARIO_DASHBOARD_FRONTEND_URL") {
        config.dashboard.frontend_url = Some(val);
    }

    // Export overrides
    if let Ok(val) = std::env::var("INVENTARIO_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val.into();
    }

    // Logging overrides
    if let Ok(val) = std::env::var("INVENTARIO_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("INVENTARIO_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("INVENTARIO_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
