//! Request and error payloads exchanged with the inventory server

use serde::{Deserialize, Serialize};

/// Body of `PATCH articulos/{id}/`
#[derive(Debug, Clone, Serialize)]
pub struct StockMinimoUpdate {
    /// New minimum
    pub stock_minimo: u32,
}

/// Error body returned by the server on validation failures
///
/// The server reports either `error` or the framework's `detail` key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorPayload {
    /// Preferred human readable message
    pub fn message(self) -> Option<String> {
        self.error
            .filter(|m| !m.is_empty())
            .or(self.detail.filter(|m| !m.is_empty()))
    }
}
