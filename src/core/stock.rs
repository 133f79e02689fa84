//! Minimum stock editor
//!
//! Lists articles with a name search and edits one article's minimum at a
//! time. Input is validated before anything is sent; the local list is
//! updated only after the server accepts the change.

use crate::adapters::api::InventoryApi;
use crate::adapters::notify::{Notice, Notifier};
use crate::core::filter::filter;
use crate::domain::ids::ArticleId;
use crate::domain::{ApiError, Article, InventarioError};

pub const EMPTY_VALUE_TEXT: &str = "El stock mínimo no puede estar vacío.";
pub const INVALID_VALUE_TEXT: &str = "El stock mínimo debe ser un número válido y no negativo.";
pub const SAVED_TEXT: &str = "Stock mínimo actualizado correctamente.";
pub const SERVER_FALLBACK_TEXT: &str = "No se pudo actualizar el stock mínimo.";
pub const NO_RESPONSE_TEXT: &str = "No se recibió respuesta del servidor.";
pub const UNEXPECTED_TEXT: &str = "Ocurrió un error al intentar actualizar el stock mínimo.";
pub const LOAD_FAILED_TEXT: &str = "No se pudieron cargar los artículos.";

/// Edit in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEdit {
    pub id: ArticleId,
    /// Raw text as typed
    pub value: String,
}

/// Result of [`MinimumStockEditor::save`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The server accepted the new minimum
    Saved { id: ArticleId, stock_minimo: u32 },
    /// Rejected locally; nothing was sent
    Invalid,
    /// The server rejected it or couldn't be reached
    Failed,
    /// No edit was in progress
    NoEdit,
}

/// Validates typed minimum stock
///
/// Surrounding whitespace is ignored. Returns the user-facing message on
/// failure.
pub fn parse_minimum(raw: &str) -> std::result::Result<u32, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EMPTY_VALUE_TEXT);
    }
    trimmed.parse::<u32>().map_err(|_| INVALID_VALUE_TEXT)
}

/// Message shown for a failed update
pub fn failure_text(err: &InventarioError) -> String {
    match err.as_api() {
        Some(ApiError::Server { message, .. }) => message
            .clone()
            .unwrap_or_else(|| SERVER_FALLBACK_TEXT.to_string()),
        Some(ApiError::NoResponse(_)) => NO_RESPONSE_TEXT.to_string(),
        _ => UNEXPECTED_TEXT.to_string(),
    }
}

/// Editor state
#[derive(Debug, Clone, Default)]
pub struct MinimumStockEditor {
    articles: Vec<Article>,
    search: String,
    editing: Option<StockEdit>,
}

impl MinimumStockEditor {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            ..Self::default()
        }
    }

    /// Opens the editor: fresh article list, no search, no edit
    ///
    /// On failure the list is left as it was and an error notice is shown.
    pub async fn open(&mut self, api: &dyn InventoryApi, notifier: &dyn Notifier) -> bool {
        self.search.clear();
        self.editing = None;

        match api.fetch_articulos().await {
            Ok(articles) => {
                tracing::debug!(count = articles.len(), "Minimum stock editor loaded");
                self.articles = articles;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load articles");
                notifier.notify(Notice::error(LOAD_FAILED_TEXT));
                false
            }
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Articles matching the search term
    pub fn visible(&self) -> Vec<Article> {
        filter(&self.articles, &self.search, |a| a.nombre.clone())
    }

    pub fn editing(&self) -> Option<&StockEdit> {
        self.editing.as_ref()
    }

    /// Starts editing, pre-filled with the current minimum
    ///
    /// Returns `false` for unknown ids.
    pub fn begin_edit(&mut self, id: ArticleId) -> bool {
        let Some(article) = self.articles.iter().find(|a| a.id == id) else {
            return false;
        };
        self.editing = Some(StockEdit {
            id,
            value: article.stock_minimo.to_string(),
        });
        true
    }

    /// Replaces the typed value of the current edit
    pub fn set_value(&mut self, value: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.value = value.into();
        }
    }

    pub fn cancel(&mut self) {
        self.editing = None;
    }

    /// Validates the current edit without sending it
    ///
    /// A rejected value is reported through `notifier`. Returns `None` when
    /// nothing is being edited or the value is rejected.
    pub fn check(&self, notifier: &dyn Notifier) -> Option<u32> {
        let edit = self.editing.as_ref()?;
        match parse_minimum(&edit.value) {
            Ok(value) => Some(value),
            Err(text) => {
                tracing::debug!(article_id = %edit.id, value = %edit.value, "Rejected minimum stock");
                notifier.notify(Notice::error(text));
                None
            }
        }
    }

    /// Validates and sends the current edit
    pub async fn save(&mut self, api: &dyn InventoryApi, notifier: &dyn Notifier) -> SaveOutcome {
        let Some(edit) = self.editing.clone() else {
            return SaveOutcome::NoEdit;
        };

        let Some(stock_minimo) = self.check(notifier) else {
            return SaveOutcome::Invalid;
        };

        match api.actualizar_stock_minimo(edit.id, stock_minimo).await {
            Ok(_) => {
                for article in self.articles.iter_mut().filter(|a| a.id == edit.id) {
                    article.stock_minimo = stock_minimo;
                }
                self.editing = None;
                tracing::info!(article_id = %edit.id, stock_minimo, "Minimum stock updated");
                notifier.notify(Notice::success(SAVED_TEXT));
                SaveOutcome::Saved {
                    id: edit.id,
                    stock_minimo,
                }
            }
            Err(e) => {
                tracing::error!(article_id = %edit.id, error = %e, "Failed to update minimum stock");
                notifier.notify(Notice::error(failure_text(&e)));
                SaveOutcome::Failed
            }
        }
    }
}
