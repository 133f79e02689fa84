//! Low-stock detail command implementation

use super::{show_detail, Session};
use crate::adapters::notify::ConsoleNotifier;
use crate::core::stats::StatisticsStore;
use clap::Args;

/// Arguments for the low-stock command
#[derive(Args, Debug)]
pub struct LowStockArgs {
    /// Only show articles whose name contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Write the shown rows to a CSV report
    #[arg(short, long)]
    pub export: bool,
}

impl LowStockArgs {
    /// Execute the low-stock command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let session = match Session::open(config_path) {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let notifier = ConsoleNotifier::new();
        let mut store = StatisticsStore::new(session.tz);

        match store.open_low_stock_detail(&session.api, &notifier).await {
            Some(view) => Ok(show_detail(
                view,
                self.search.as_deref(),
                self.export,
                &session,
            )),
            // Nothing was ever loaded: the refresh failed
            None if store.applied_generation().is_none() => Ok(4),
            None => Ok(0),
        }
    }
}
