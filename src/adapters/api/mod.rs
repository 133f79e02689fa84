//! Inventory REST API adapter
//!
//! [`InventoryApi`] is the seam between the dashboard logic and the server.
//! [`InventarioClient`] implements it over HTTP; tests substitute their own
//! implementations.

pub mod client;
pub mod models;

pub use client::InventarioClient;

use crate::domain::ids::ArticleId;
use crate::domain::{Article, LoanRecord, MovementRecord, Result};
use async_trait::async_trait;

/// Operations the dashboard needs from the inventory server
///
/// Every failure is reported as [`crate::domain::InventarioError::Api`].
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// All articles
    async fn fetch_articulos(&self) -> Result<Vec<Article>>;

    /// Full loan history, returned and active
    async fn fetch_historial_prestamo(&self) -> Result<Vec<LoanRecord>>;

    /// Stock movements in server order
    async fn fetch_movimientos(&self) -> Result<Vec<MovementRecord>>;

    /// Sets an article's minimum stock and returns the updated article
    async fn actualizar_stock_minimo(&self, id: ArticleId, stock_minimo: u32) -> Result<Article>;
}
