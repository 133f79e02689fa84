//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "inventario.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Inventario configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} and point api.base_url at your server", self.output);
                println!("  2. Validate configuration: inventario validate-config");
                println!("  3. Check the dashboard: inventario stats");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Inventario Configuration File

[application]
log_level = "info"

[api]
base_url = "http://127.0.0.1:8000/api/"
timeout_seconds = 30
connect_timeout_seconds = 10

[dashboard]
timezone = "America/Santiago"
locale = "es_CL"
recent_movements_limit = 5
refresh_interval_seconds = 10

[export]
output_dir = "."

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Inventario Configuration File
#
# Every value can be overridden with INVENTARIO_<SECTION>_<KEY>,
# e.g. INVENTARIO_API_BASE_URL. Values may reference environment
# variables as ${VAR}; a .env file next to the binary is loaded first.

[application]
# trace | debug | info | warn | error
log_level = "info"

[api]
# Inventory server REST root; paths like articulos/ are joined onto it
base_url = "${INVENTARIO_SERVER_URL}"

# Whole-request and connect timeouts, in seconds
timeout_seconds = 30
connect_timeout_seconds = 10

[dashboard]
# IANA zone used for dates, week boundaries and loan dates
timezone = "America/Santiago"

# Locale for day and month names (es_CL, es_ES, en_US, ...)
locale = "es_CL"

# Rows in the recent movements feed (1-50)
recent_movements_limit = 5

# Poll interval for `inventario movements --follow`
refresh_interval_seconds = 10

# Web frontend; navigation prints full links when set
# frontend_url = "http://localhost:3000"

[export]
# Where CSV reports are written
output_dir = "./reportes"

[logging]
# JSON log file in addition to console output
local_enabled = true
local_path = "./logs"
# daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
