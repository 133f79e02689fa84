//! CLI command implementations
//!
//! Every command returns its process exit code:
//! 0 success, 1 input rejected, 2 configuration error,
//! 4 API unreachable or failing, 5 fatal.

pub mod articles;
pub mod init;
pub mod loans;
pub mod low_stock;
pub mod movements;
pub mod set_minimum;
pub mod stats;
pub mod validate;
pub mod weekly;

use crate::adapters::api::InventarioClient;
use crate::adapters::export::CsvReportExporter;
use crate::config::{load_config_or_default, InventarioConfig};
use crate::core::stats::{DetailRow, DetailView};
use crate::log_error_with_context;
use chrono::Locale;
use chrono_tz::Tz;

/// Loaded configuration plus the values every dashboard command needs
pub(crate) struct Session {
    pub config: InventarioConfig,
    pub api: InventarioClient,
    pub tz: Tz,
    pub locale: Locale,
}

impl Session {
    /// Loads configuration and builds the API client
    ///
    /// Problems are printed; the error value is the exit code to return.
    pub fn open(config_path: &str) -> Result<Self, i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Err(2); // Configuration error exit code
            }
        };

        let (tz, locale) = match (config.dashboard.tz(), config.dashboard.chrono_locale()) {
            (Ok(tz), Ok(locale)) => (tz, locale),
            (Err(e), _) | (_, Err(e)) => {
                println!("❌ Invalid dashboard settings");
                println!("   Error: {e}");
                return Err(2);
            }
        };

        let api = match InventarioClient::new(&config.api) {
            Ok(api) => api,
            Err(e) => {
                println!("❌ Failed to create API client");
                println!("   Error: {e}");
                return Err(2);
            }
        };

        Ok(Self {
            config,
            api,
            tz,
            locale,
        })
    }
}

/// Prints an opened detail view and optionally exports it
///
/// Only the rows matching `search` are printed or exported.
pub(crate) fn show_detail<T: DetailRow>(
    mut view: DetailView<T>,
    search: Option<&str>,
    export: bool,
    session: &Session,
) -> i32 {
    if let Some(term) = search {
        view.set_search(term);
    }

    let report = match view.to_report() {
        Ok(report) => report,
        Err(e) => {
            println!("❌ Failed to build report: {e}");
            return 5;
        }
    };

    println!("📋 {}", view.title());
    if !view.search().is_empty() {
        println!("   Búsqueda: \"{}\"", view.search());
    }
    println!();
    print_table(&report.headers, &report.rows);
    println!();
    println!("   {} de {} filas", report.len(), view.all_rows().len());

    if export {
        let exporter = CsvReportExporter::new(session.config.export.output_dir.clone());
        match view.export(&exporter) {
            Ok(path) => println!("📝 Reporte guardado en {}", path.display()),
            Err(e) => {
                log_error_with_context!(e, "Failed to export report");
                println!("❌ Failed to export report");
                println!("   Error: {e}");
                return 5;
            }
        }
    }

    0
}

/// Prints rows under a header, padding columns to their widest cell
pub(crate) fn print_table<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(headers.iter().map(|h| h.as_ref()).collect()));
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
    for row in rows {
        println!("{}", line(row.iter().map(String::as_str).collect()));
    }
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{cell}{}", " ".repeat(width.saturating_sub(len)))
}
