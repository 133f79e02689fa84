//! Stock movement domain model

use super::de::null_as_default;
use super::ids::{ArticleId, MovementId};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of stock movement
///
/// Serialized as the server's display string. Types this client does not
/// know about are kept verbatim in [`MovementType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MovementType {
    /// Stock received
    Entrada,
    /// Stock issued
    Salida,
    /// Article registered for the first time
    NuevoArticulo,
    /// Units loaned out
    Prestamo,
    /// Loaned units returned
    Regresado,
    /// Article condition changed
    CambioEstado,
    /// Anything else the server reports
    Other(String),
}

impl MovementType {
    /// Display string, identical to the wire value
    pub fn as_str(&self) -> &str {
        match self {
            Self::Entrada => "Entrada",
            Self::Salida => "Salida",
            Self::NuevoArticulo => "Nuevo Articulo",
            Self::Prestamo => "Prestamo",
            Self::Regresado => "Regresado",
            Self::CambioEstado => "Cambio de Estado",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for MovementType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Entrada" => Self::Entrada,
            "Salida" => Self::Salida,
            "Nuevo Articulo" => Self::NuevoArticulo,
            "Prestamo" => Self::Prestamo,
            "Regresado" => Self::Regresado,
            "Cambio de Estado" => Self::CambioEstado,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for MovementType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<MovementType> for String {
    fn from(t: MovementType) -> Self {
        match t {
            MovementType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single stock movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRecord {
    /// Server primary key (not always exposed)
    #[serde(default)]
    pub id: Option<MovementId>,

    /// Kind of movement
    pub tipo_movimiento: MovementType,

    /// When it happened
    pub fecha: DateTime<FixedOffset>,

    /// Units moved; condition changes carry no quantity
    #[serde(default, deserialize_with = "null_as_default")]
    pub cantidad: i64,

    /// Article the movement refers to
    #[serde(default)]
    pub articulo: Option<ArticleId>,
}

impl MovementRecord {
    /// Creates a movement without id or article
    pub fn new(
        tipo_movimiento: MovementType,
        fecha: DateTime<FixedOffset>,
        cantidad: i64,
    ) -> Self {
        Self {
            id: None,
            tipo_movimiento,
            fecha,
            cantidad,
            articulo: None,
        }
    }

    /// Sets the referenced article
    pub fn with_article(mut self, articulo: ArticleId) -> Self {
        self.articulo = Some(articulo);
        self
    }
}
