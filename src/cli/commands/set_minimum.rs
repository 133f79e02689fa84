//! Minimum stock command implementation

use super::{print_table, Session};
use crate::adapters::notify::{ConsoleNotifier, Notifier};
use crate::core::stock::{MinimumStockEditor, SaveOutcome};
use crate::domain::ArticleId;
use clap::Args;

/// Arguments for the set-minimum command
///
/// Without `--id` the matching articles are listed.
#[derive(Args, Debug)]
pub struct SetMinimumArgs {
    /// Article to update
    #[arg(short, long, requires = "value")]
    pub id: Option<i64>,

    /// New minimum stock
    #[arg(short, long, allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Only list articles whose name contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl SetMinimumArgs {
    /// Execute the set-minimum command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let session = match Session::open(config_path) {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let notifier = ConsoleNotifier::new().assume_yes(self.yes);
        let mut editor = MinimumStockEditor::default();
        if !editor.open(&session.api, &notifier).await {
            return Ok(4);
        }

        if let Some(term) = &self.search {
            editor.set_search(term.as_str());
        }

        let Some(id) = self.id.map(ArticleId::new) else {
            list(&editor);
            return Ok(0);
        };

        if !editor.begin_edit(id) {
            println!("❌ Article {id} not found");
            return Ok(1);
        }

        let current = editor
            .articles()
            .iter()
            .find(|a| a.id == id)
            .map(|a| (a.nombre.clone(), a.stock_minimo));
        if let Some(value) = &self.value {
            editor.set_value(value.as_str());
        }

        // Rejected input never reaches the prompt
        let Some(new_minimum) = editor.check(&notifier) else {
            return Ok(1);
        };

        if let Some((nombre, stock_minimo)) = current {
            let question = format!("{nombre}: {stock_minimo} → {new_minimum}");
            if !notifier.confirm("¿Actualizar stock mínimo?", &question) {
                editor.cancel();
                println!("⚠️  Update cancelled");
                return Ok(1);
            }
        }

        Ok(match editor.save(&session.api, &notifier).await {
            SaveOutcome::Saved { .. } => 0,
            SaveOutcome::Invalid => 1,
            SaveOutcome::Failed => 4,
            SaveOutcome::NoEdit => 5,
        })
    }
}

fn list(editor: &MinimumStockEditor) {
    let rows: Vec<Vec<String>> = editor
        .visible()
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.nombre.clone(),
                a.stock_actual.to_string(),
                a.stock_minimo.to_string(),
            ]
        })
        .collect();

    if rows.is_empty() {
        println!("   No se encontraron artículos.");
        return;
    }
    print_table(&["ID", "Artículo", "Stock Actual", "Stock Mínimo"], &rows);
}
