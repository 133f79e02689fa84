//! Article domain model

use super::de::null_as_default;
use super::ids::ArticleId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stocked article as mirrored from the inventory server
///
/// # Examples
///
/// ```
/// use inventario::domain::{Article, ArticleId};
///
/// let taladro = Article::new(ArticleId::new(1), "Taladro", 2, 5);
/// assert!(taladro.is_low_stock());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Server primary key
    pub id: ArticleId,

    /// Display name
    pub nombre: String,

    /// Units currently in stock
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_actual: u32,

    /// Configured minimum; the server may send `null`, read as 0
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_minimo: u32,

    /// Condition code (1 = good, 2 = bad, 3 = written off)
    #[serde(default)]
    pub estado: Option<i64>,
}

impl Article {
    /// Creates an article with no condition code
    pub fn new(
        id: ArticleId,
        nombre: impl Into<String>,
        stock_actual: u32,
        stock_minimo: u32,
    ) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            stock_actual,
            stock_minimo,
            estado: None,
        }
    }

    /// Sets the condition code
    pub fn with_estado(mut self, estado: i64) -> Self {
        self.estado = Some(estado);
        self
    }

    /// Current stock is strictly below the configured minimum
    pub fn is_low_stock(&self) -> bool {
        self.stock_actual < self.stock_minimo
    }

    /// Condition derived from the numeric code
    pub fn condition(&self) -> ArticleCondition {
        ArticleCondition::from_code(self.estado)
    }
}

/// Physical condition of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleCondition {
    /// Code 1
    Bueno,
    /// Code 2
    Malo,
    /// Code 3
    DeBaja,
    /// Missing or unrecognized code
    Desconocido,
}

impl ArticleCondition {
    /// Maps the server's numeric code
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(1) => Self::Bueno,
            Some(2) => Self::Malo,
            Some(3) => Self::DeBaja,
            _ => Self::Desconocido,
        }
    }

    /// Label shown to users
    pub fn label(self) -> &'static str {
        match self {
            Self::Bueno => "Bueno",
            Self::Malo => "Malo",
            Self::DeBaja => "De Baja",
            Self::Desconocido => "Desconocido",
        }
    }
}

impl fmt::Display for ArticleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_is_strict() {
        assert!(Article::new(ArticleId::new(1), "Taladro", 2, 5).is_low_stock());
        assert!(!Article::new(ArticleId::new(2), "Pala", 3, 3).is_low_stock());
        assert!(!Article::new(ArticleId::new(3), "Sierra", 10, 0).is_low_stock());
    }

    #[test]
    fn test_deserialize_null_minimum() {
        let json = r#"{"id": 4, "nombre": "Llave", "stock_actual": 3, "stock_minimo": null}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.stock_minimo, 0);
        assert!(article.estado.is_none());
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{"id": 4, "nombre": "Llave", "stock_actual": 3, "stock_minimo": 1,
                       "estado": 2, "marca": 9, "codigo_barra": "ABC"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.condition(), ArticleCondition::Malo);
    }

    #[test]
    fn test_condition_labels() {
        assert_eq!(ArticleCondition::from_code(Some(1)).label(), "Bueno");
        assert_eq!(ArticleCondition::from_code(Some(3)).label(), "De Baja");
        assert_eq!(ArticleCondition::from_code(Some(9)).label(), "Desconocido");
        assert_eq!(ArticleCondition::from_code(None).label(), "Desconocido");
    }
}
