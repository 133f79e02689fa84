//! In-memory inventory server shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use inventario::adapters::api::InventoryApi;
use inventario::domain::{
    ApiError, Article, ArticleId, InventarioError, LoanRecord, MovementRecord, Result,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Serves fixed collections; any endpoint can be switched to fail
#[derive(Default)]
pub struct FakeInventory {
    pub articles: Mutex<Vec<Article>>,
    pub loans: Mutex<Vec<LoanRecord>>,
    pub movements: Mutex<Vec<MovementRecord>>,
    pub failure: Mutex<Option<ApiError>>,
    pub fetches: AtomicUsize,
    pub updates: AtomicUsize,
}

impl FakeInventory {
    pub fn new(articles: Vec<Article>, loans: Vec<LoanRecord>) -> Self {
        Self {
            articles: Mutex::new(articles),
            loans: Mutex::new(loans),
            ..Self::default()
        }
    }

    pub fn fail_with(&self, err: ApiError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(InventarioError::Api(err)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl InventoryApi for FakeInventory {
    async fn fetch_articulos(&self) -> Result<Vec<Article>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.articles.lock().unwrap().clone())
    }

    async fn fetch_historial_prestamo(&self) -> Result<Vec<LoanRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.loans.lock().unwrap().clone())
    }

    async fn fetch_movimientos(&self) -> Result<Vec<MovementRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.movements.lock().unwrap().clone())
    }

    async fn actualizar_stock_minimo(&self, id: ArticleId, stock_minimo: u32) -> Result<Article> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(InventarioError::Api(ApiError::Server {
                status: 404,
                message: Some("Artículo no encontrado".to_string()),
            }))?;
        article.stock_minimo = stock_minimo;
        Ok(article.clone())
    }
}

pub fn articles() -> Vec<Article> {
    vec![
        Article::new(ArticleId::new(1), "Taladro", 2, 5),
        Article::new(ArticleId::new(2), "Pala", 10, 3),
    ]
}

pub fn loans() -> Vec<LoanRecord> {
    serde_json::from_value(serde_json::json!([
        {
            "id": 1,
            "articulo": {"id": 1, "nombre": "Taladro"},
            "cantidad_restante": 2,
            "personal": {"id": 4, "nombre": "Ana Rojas"},
            "fecha_prestamo": "2024-10-14T15:00:00Z",
            "motivo": {"id": 1, "nombre": "Clases"}
        },
        {
            "id": 2,
            "articulo": {"id": 2, "nombre": "Pala"},
            "cantidad_restante": 1,
            "personal": {"id": 5, "nombre": "Luis Soto"},
            "fecha_prestamo": "2024-10-15T15:00:00Z",
            "motivo": {"id": 2, "nombre": "Mantención"}
        },
        {
            "id": 3,
            "articulo": {"id": 2, "nombre": "Pala"},
            "cantidad_restante": 0,
            "personal": {"id": 5, "nombre": "Luis Soto"},
            "fecha_prestamo": "2024-10-01T15:00:00Z",
            "fecha_devolucion": "2024-10-02T15:00:00Z"
        }
    ]))
    .unwrap()
}
