//! Active loans detail command implementation

use super::{show_detail, Session};
use crate::adapters::notify::ConsoleNotifier;
use crate::core::stats::StatisticsStore;
use clap::Args;

/// Arguments for the loans command
#[derive(Args, Debug)]
pub struct LoansArgs {
    /// Only show loans matching this text (article, person, reason or date)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Write the shown rows to a CSV report
    #[arg(short, long)]
    pub export: bool,
}

impl LoansArgs {
    /// Execute the loans command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let session = match Session::open(config_path) {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let notifier = ConsoleNotifier::new();
        let mut store = StatisticsStore::new(session.tz);

        match store.open_active_loans_detail(&session.api, &notifier).await {
            Some(view) => Ok(show_detail(
                view,
                self.search.as_deref(),
                self.export,
                &session,
            )),
            None if store.applied_generation().is_none() => Ok(4),
            None => Ok(0),
        }
    }
}
