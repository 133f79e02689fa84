//! Weekly chart command implementation

use super::{print_table, Session};
use crate::adapters::api::InventoryApi;
use crate::core::weekly::WeeklyAggregator;
use crate::log_error_with_context;
use chrono::Utc;
use clap::Args;

const CHART_TITLE: &str = "Movimientos Diarios (Lunes a Viernes)";

/// Arguments for the weekly command
#[derive(Args, Debug)]
pub struct WeeklyArgs {
    /// Print the chart data as JSON
    #[arg(long)]
    pub json: bool,
}

impl WeeklyArgs {
    /// Execute the weekly command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let session = match Session::open(config_path) {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let movements = match session.api.fetch_movimientos().await {
            Ok(m) => m,
            Err(e) => {
                log_error_with_context!(e, "Failed to load movements");
                println!("❌ Failed to load movements");
                println!("   Error: {e}");
                return Ok(4);
            }
        };

        let chart =
            WeeklyAggregator::new(session.tz, session.locale).aggregate(&movements, Utc::now());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&chart)?);
            return Ok(0);
        }

        println!("📊 {CHART_TITLE}");
        println!();

        let mut headers = vec!["Tipo".to_string()];
        headers.extend(chart.labels.iter().cloned());
        headers.push("Total".to_string());

        let rows: Vec<Vec<String>> = chart
            .datasets
            .iter()
            .map(|dataset| {
                let mut row = vec![dataset.label.to_string()];
                row.extend(dataset.data.iter().map(|n| n.to_string()));
                row.push(dataset.total().to_string());
                row
            })
            .collect();

        print_table(&headers, &rows);
        Ok(0)
    }
}
