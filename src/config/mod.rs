//! Configuration management for Inventario.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Inventario uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `INVENTARIO_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inventario::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("inventario.toml")?;
//!
//! println!("API: {}", config.api.base_url);
//! println!("Zona horaria: {}", config.dashboard.timezone);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ApiConfig`] - Inventory API base URL and timeouts
//! - [`DashboardConfig`] - Time zone, locale and movement feed settings
//! - [`ExportConfig`] - Where reports are written
//! - [`LoggingConfig`] - Rolling JSON log file
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [api]
//! base_url = "http://${INVENTARIO_HOST}/api/"
//! timeout_seconds = 30
//!
//! [dashboard]
//! timezone = "America/Santiago"
//! locale = "es_CL"
//! recent_movements_limit = 5
//! refresh_interval_seconds = 10
//!
//! [export]
//! output_dir = "./reportes"
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApiConfig, ApplicationConfig, DashboardConfig, ExportConfig, InventarioConfig, LoggingConfig,
};
