//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Inventario configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading validates as its last step
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  API Base URL: {}", config.api.base_url);
        println!(
            "  API Timeouts: {}s (connect {}s)",
            config.api.timeout_seconds, config.api.connect_timeout_seconds
        );
        println!("  Time Zone: {}", config.dashboard.timezone);
        println!("  Locale: {}", config.dashboard.locale);
        println!(
            "  Recent Movements: {} rows, refresh every {}s",
            config.dashboard.recent_movements_limit, config.dashboard.refresh_interval_seconds
        );
        if let Some(frontend) = &config.dashboard.frontend_url {
            println!("  Frontend URL: {frontend}");
        }
        println!("  Export Directory: {}", config.export.output_dir.display());
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}
