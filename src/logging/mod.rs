//! Logging and observability
//!
//! Structured logging through `tracing`, with:
//! - Configurable log levels (overridable by `RUST_LOG`)
//! - Console output on stderr
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use inventario::logging::init_logging;
//! use inventario::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Dashboard started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log a statistics snapshot that was applied to the store
///
/// # Example
///
/// ```no_run
/// use inventario::log_refresh_applied;
///
/// log_refresh_applied!(3, 120, 4);
/// ```
#[macro_export]
macro_rules! log_refresh_applied {
    ($generation:expr, $articles:expr, $loans:expr) => {
        tracing::info!(
            generation = $generation,
            articles = $articles,
            loans = $loans,
            "Statistics refreshed"
        );
    };
}

/// Log a report written to disk
///
/// # Example
///
/// ```no_run
/// use inventario::log_report_written;
/// use std::path::Path;
///
/// log_report_written!(Path::new("articulos_bajo_stock.csv"), 12);
/// ```
#[macro_export]
macro_rules! log_report_written {
    ($path:expr, $rows:expr) => {
        tracing::info!(
            path = %$path.display(),
            rows = $rows,
            "Report written"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use inventario::log_error_with_context;
/// use inventario::domain::InventarioError;
///
/// let error = InventarioError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
