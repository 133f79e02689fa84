//! Stats command implementation

use super::Session;
use crate::adapters::navigation::ConsoleNavigator;
use crate::adapters::notify::ConsoleNotifier;
use crate::core::stats::StatisticsStore;
use clap::Args;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Print the snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Follow the "Total Productos" link to the product history page
    #[arg(long)]
    pub open_history: bool,
}

impl StatsArgs {
    /// Execute the stats command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let session = match Session::open(config_path) {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let notifier = ConsoleNotifier::new();
        let mut store = StatisticsStore::new(session.tz);
        store.refresh(&session.api, &notifier).await;

        if store.applied_generation().is_none() {
            println!("❌ No statistics available");
            println!("   API: {}", session.api.base_url());
            return Ok(4);
        }

        let snapshot = store.snapshot();
        if self.json {
            println!("{}", serde_json::to_string_pretty(snapshot)?);
        } else {
            println!("📊 Inventario Statistics");
            println!();
            println!("{:<30} {:>10}", "Total Productos", snapshot.total_productos);
            println!(
                "{:<30} {:>10}",
                "Productos con Bajo Stock",
                snapshot.productos_bajo_stock()
            );
            println!(
                "{:<30} {:>10}",
                "Préstamos Activos",
                snapshot.prestamos_activos()
            );
            println!(
                "{:<30} {:>10}",
                "Unidades Prestadas", snapshot.loaned_quantity
            );
        }

        if self.open_history {
            let navigator = ConsoleNavigator::new(session.config.dashboard.frontend_url.clone());
            store.open_product_history(&navigator);
        }

        Ok(0)
    }
}
