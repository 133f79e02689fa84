//! Article picker command implementation
//!
//! Drives the typeahead widget from the command line: type a query, see the
//! suggestions, optionally pick one.

use super::{print_table, Session};
use crate::adapters::api::InventoryApi;
use crate::core::selection::{Selection, SelectionWidget};
use crate::domain::{OptionId, SelectableOption};
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the pick-article command
#[derive(Args, Debug)]
pub struct PickArticleArgs {
    /// Text typed into the picker
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Id of the suggestion to choose
    #[arg(short, long)]
    pub pick: Option<i64>,
}

impl PickArticleArgs {
    /// Execute the pick-article command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let session = match Session::open(config_path) {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let articles = match session.api.fetch_articulos().await {
            Ok(a) => a,
            Err(e) => {
                log_error_with_context!(e, "Failed to load articles");
                println!("❌ Failed to load articles");
                println!("   Error: {e}");
                return Ok(4);
            }
        };

        let options: Vec<SelectableOption> = articles.iter().map(SelectableOption::from).collect();
        let mut widget = SelectionWidget::new("Artículo", options);
        widget.focus();
        widget.input(self.query.as_str());

        if let Some(id) = self.pick {
            return Ok(match widget.choose(OptionId::new(id)) {
                Some(Selection::Chosen(id)) => {
                    println!("✅ {} ({id})", widget.text());
                    0
                }
                _ => {
                    println!("❌ Option {id} not found");
                    1
                }
            });
        }

        if widget.text().is_empty() {
            println!("🔍 {}", widget.placeholder());
        } else {
            println!("🔍 {}: {}", widget.label(), widget.text());
        }

        let rows: Vec<Vec<String>> = widget
            .visible_options()
            .iter()
            .map(|o| vec![o.id.to_string(), o.nombre.clone()])
            .collect();
        print_table(&["ID", "Nombre"], &rows);
        Ok(0)
    }
}
