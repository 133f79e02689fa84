//! Options offered by the selection widget

use super::article::Article;
use super::ids::OptionId;
use serde::{Deserialize, Serialize};

/// An `{id, nombre}` pair any catalogue (articles, people, reasons…) can offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableOption {
    /// Canonical identifier reported to the parent on selection
    pub id: OptionId,

    /// Display name, also the text that is searched
    pub nombre: String,
}

impl SelectableOption {
    /// Creates an option
    pub fn new(id: OptionId, nombre: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
        }
    }
}

impl From<&Article> for SelectableOption {
    fn from(article: &Article) -> Self {
        Self::new(OptionId::new(article.id.get()), article.nombre.clone())
    }
}
