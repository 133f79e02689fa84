//! Recent movements command implementation

use super::{print_table, Session};
use crate::core::movements::{MovementTab, RecentMovements, EMPTY_TAB_TEXT};
use clap::Args;
use std::time::Duration;
use tokio::sync::watch;

/// Arguments for the movements command
#[derive(Args, Debug)]
pub struct MovementsArgs {
    /// Tab to show (recientes, entrada, salida, cambio-de-estado,
    /// nuevo-articulo, prestamo, regresado)
    #[arg(short, long, default_value = "recientes")]
    pub tab: MovementTab,

    /// Number of rows, 1 to 50 (defaults to dashboard.recent_movements_limit)
    #[arg(
        short,
        long,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=50)
    )]
    pub limit: Option<usize>,

    /// Keep polling every dashboard.refresh_interval_seconds until interrupted
    #[arg(short, long)]
    pub follow: bool,
}

impl MovementsArgs {
    /// Follow mode runs until Ctrl+C; a single load keeps the default SIGINT
    pub fn listens_for_interrupt(&self) -> bool {
        self.follow
    }

    /// Execute the movements command
    pub async fn execute(
        &self,
        config_path: &str,
        mut shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let session = match Session::open(config_path) {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let limit = self
            .limit
            .unwrap_or(session.config.dashboard.recent_movements_limit);
        let mut feed = RecentMovements::new(limit, session.tz, session.locale);
        feed.set_tab(self.tab);

        feed.load(&session.api).await;
        render(&feed);

        if !self.follow {
            return Ok(if feed.error().is_some() { 4 } else { 0 });
        }

        let interval = Duration::from_secs(session.config.dashboard.refresh_interval_seconds);
        tracing::info!(
            interval_seconds = interval.as_secs(),
            tab = %self.tab,
            "Following recent movements"
        );

        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {
                    feed.load(&session.api).await;
                    println!();
                    render(&feed);
                }
                _ = shutdown_signal.changed() => {
                    tracing::info!("Stopped following recent movements");
                    return Ok(0);
                }
            }
        }
    }
}

fn render(feed: &RecentMovements) {
    println!("🔍 Movimientos Recientes ({})", feed.tab());

    if let Some(error) = feed.error() {
        println!("❌ {error}");
    }

    let rows = feed.rows();
    if rows.is_empty() {
        println!("   {EMPTY_TAB_TEXT}");
        return;
    }

    let table: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| vec![row.tipo.to_string(), row.articulo, row.fecha, row.valor])
        .collect();
    print_table(&["Tipo", "Artículo", "Fecha", "Cantidad/Estado"], &table);
}
