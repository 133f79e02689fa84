//! Configuration schema types
//!
//! This module defines the configuration structure for Inventario. Every
//! section has defaults, so an empty file (or no file at all) is a valid
//! configuration pointing at a local development server.

use crate::domain::errors::InventarioError;
use crate::domain::result::Result;
use chrono::Locale;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Main Inventario configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventarioConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Inventory API connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Dashboard presentation settings
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Report export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl InventarioConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.application.validate()?;
        self.api.validate()?;
        self.dashboard.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Inventory API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API; endpoint paths are joined onto it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,
}

impl ApiConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.base_url.is_empty() {
            return Err("api.base_url cannot be empty".to_string());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("api.base_url is not a valid URL: {e}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err("api.base_url must start with http:// or https://".to_string());
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 300 {
            return Err(format!(
                "api.timeout_seconds must be between 1 and 300, got {}",
                self.timeout_seconds
            ));
        }

        if self.connect_timeout_seconds == 0 || self.connect_timeout_seconds > self.timeout_seconds
        {
            return Err(format!(
                "api.connect_timeout_seconds must be between 1 and timeout_seconds ({}), got {}",
                self.timeout_seconds, self.connect_timeout_seconds
            ));
        }

        Ok(())
    }

    /// Base URL normalized to end with `/` so relative joins keep the path
    pub fn base(&self) -> Result<Url> {
        let mut raw = self.base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| {
            InventarioError::Configuration(format!("Invalid api.base_url '{}': {e}", self.base_url))
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
        }
    }
}

/// Dashboard presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// IANA time zone used to place movements and loans on calendar days
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Locale used for weekday and month names (e.g. "es_CL")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// How many rows the recent-movements feed shows
    #[serde(default = "default_recent_movements_limit")]
    pub recent_movements_limit: usize,

    /// Poll interval of the recent-movements feed in follow mode
    #[serde(default = "default_refresh_interval_seconds")]
    pub refresh_interval_seconds: u64,

    /// Web front end the dashboard links resolve against, if any
    #[serde(default)]
    pub frontend_url: Option<String>,
}

impl DashboardConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        self.tz().map_err(|e| e.to_string())?;
        self.chrono_locale().map_err(|e| e.to_string())?;

        if !(1..=50).contains(&self.recent_movements_limit) {
            return Err(format!(
                "dashboard.recent_movements_limit must be between 1 and 50, got {}",
                self.recent_movements_limit
            ));
        }

        if self.refresh_interval_seconds == 0 {
            return Err("dashboard.refresh_interval_seconds must be > 0".to_string());
        }

        Ok(())
    }

    /// Parsed time zone
    pub fn tz(&self) -> Result<Tz> {
        self.timezone.parse::<Tz>().map_err(|_| {
            InventarioError::Configuration(format!(
                "Unknown dashboard.timezone '{}'",
                self.timezone
            ))
        })
    }

    /// Parsed locale
    pub fn chrono_locale(&self) -> Result<Locale> {
        Locale::try_from(self.locale.as_str()).map_err(|_| {
            InventarioError::Configuration(format!("Unknown dashboard.locale '{}'", self.locale))
        })
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            locale: default_locale(),
            recent_movements_limit: default_recent_movements_limit(),
            refresh_interval_seconds: default_refresh_interval_seconds(),
            frontend_url: None,
        }
    }
}

/// Report export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory report files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl ExportConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.output_dir.as_os_str().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        if self.output_dir.is_file() {
            return Err(format!(
                "export.output_dir '{}' is a file, expected a directory",
                self.output_dir.display()
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to a rolling file
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

fn default_timezone() -> String {
    "America/Santiago".to_string()
}

fn default_locale() -> String {
    "es_CL".to_string()
}

fn default_recent_movements_limit() -> usize {
    5
}

fn default_refresh_interval_seconds() -> u64 {
    10
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
