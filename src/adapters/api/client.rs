//! HTTP implementation of [`InventoryApi`]

use super::models::{ErrorPayload, StockMinimoUpdate};
use super::InventoryApi;
use crate::config::ApiConfig;
use crate::domain::ids::ArticleId;
use crate::domain::{ApiError, Article, InventarioError, LoanRecord, MovementRecord, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Inventory server client
///
/// Endpoint paths are joined onto the configured base URL, so
/// `http://host/api/` + `articulos/` becomes `http://host/api/articulos/`.
///
/// # Example
///
/// ```no_run
/// use inventario::adapters::api::{InventarioClient, InventoryApi};
/// use inventario::config::ApiConfig;
///
/// # async fn example() -> inventario::domain::Result<()> {
/// let client = InventarioClient::new(&ApiConfig::default())?;
/// let articulos = client.fetch_articulos().await?;
/// println!("{} artículos", articulos.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InventarioClient {
    base: Url,
    client: Client,
}

impl InventarioClient {
    /// Builds a client with the configured timeouts
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = config.base()?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| {
                InventarioError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        tracing::debug!(base_url = %base, "Inventory API client created");

        Ok(Self { base, client })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(|e| {
            InventarioError::Configuration(format!("Invalid endpoint path '{path}': {e}"))
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| no_response(&url, e))?;

        decode(url, response).await
    }
}

fn no_response(url: &Url, err: reqwest::Error) -> InventarioError {
    tracing::warn!(url = %url, error = %err, "Request failed without a response");
    ApiError::NoResponse(err.to_string()).into()
}

/// Maps a response to `T`, or to the error the server described
async fn decode<T: DeserializeOwned>(url: Url, response: Response) -> Result<T> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::NoResponse(format!("Failed to read response body: {e}")))?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorPayload>(&body)
            .ok()
            .and_then(ErrorPayload::message);
        tracing::warn!(
            url = %url,
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "Server returned an error"
        );
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        }
        .into());
    }

    serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(url = %url, error = %e, "Unexpected response body");
        ApiError::InvalidResponse(format!("{url}: {e}")).into()
    })
}

#[async_trait]
impl InventoryApi for InventarioClient {
    async fn fetch_articulos(&self) -> Result<Vec<Article>> {
        let articulos: Vec<Article> = self.get_json("articulos/").await?;
        tracing::debug!(count = articulos.len(), "Fetched articles");
        Ok(articulos)
    }

    async fn fetch_historial_prestamo(&self) -> Result<Vec<LoanRecord>> {
        let prestamos: Vec<LoanRecord> = self.get_json("historial-prestamos/").await?;
        tracing::debug!(count = prestamos.len(), "Fetched loan history");
        Ok(prestamos)
    }

    async fn fetch_movimientos(&self) -> Result<Vec<MovementRecord>> {
        let movimientos: Vec<MovementRecord> = self.get_json("movimientos/").await?;
        tracing::debug!(count = movimientos.len(), "Fetched movements");
        Ok(movimientos)
    }

    async fn actualizar_stock_minimo(&self, id: ArticleId, stock_minimo: u32) -> Result<Article> {
        let url = self.endpoint(&format!("articulos/{id}/"))?;
        tracing::info!(article_id = %id, stock_minimo, "Updating minimum stock");

        let response = self
            .client
            .patch(url.clone())
            .json(&StockMinimoUpdate { stock_minimo })
            .send()
            .await
            .map_err(|e| no_response(&url, e))?;

        decode(url, response).await
    }
}
