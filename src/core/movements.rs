//! Recent stock movements feed
//!
//! Movements are kept newest first. A tab narrows the feed to one movement
//! type; the first `limit` movements of the tab are shown. Rows resolve the
//! article name from the article list, and condition changes show the
//! article's current condition instead of a quantity.

use crate::adapters::api::InventoryApi;
use crate::domain::{Article, ArticleCondition, MovementRecord, MovementType};
use chrono::Locale;
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Shown when a row's article can't be found
pub const UNKNOWN_ARTICLE: &str = "Desconocido";

/// Shown when the active tab has no movements
pub const EMPTY_TAB_TEXT: &str = "No hay movimientos en esta categoría.";

/// Default number of rows
pub const DEFAULT_LIMIT: usize = 5;

const DATE_FORMAT: &str = "%-d de %B de %Y, %H:%M";

/// Feed tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementTab {
    #[default]
    Recientes,
    Entrada,
    Salida,
    CambioEstado,
    NuevoArticulo,
    Prestamo,
    Regresado,
}

impl MovementTab {
    /// Every tab in display order
    pub const ALL: [MovementTab; 7] = [
        MovementTab::Recientes,
        MovementTab::Entrada,
        MovementTab::Salida,
        MovementTab::CambioEstado,
        MovementTab::NuevoArticulo,
        MovementTab::Prestamo,
        MovementTab::Regresado,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MovementTab::Recientes => "Recientes",
            MovementTab::Entrada => "Entrada",
            MovementTab::Salida => "Salida",
            MovementTab::CambioEstado => "Cambio de Estado",
            MovementTab::NuevoArticulo => "Nuevo Articulo",
            MovementTab::Prestamo => "Prestamo",
            MovementTab::Regresado => "Regresado",
        }
    }

    /// Movement type the tab narrows to; `None` for "Recientes"
    pub fn movement_type(self) -> Option<MovementType> {
        match self {
            MovementTab::Recientes => None,
            MovementTab::Entrada => Some(MovementType::Entrada),
            MovementTab::Salida => Some(MovementType::Salida),
            MovementTab::CambioEstado => Some(MovementType::CambioEstado),
            MovementTab::NuevoArticulo => Some(MovementType::NuevoArticulo),
            MovementTab::Prestamo => Some(MovementType::Prestamo),
            MovementTab::Regresado => Some(MovementType::Regresado),
        }
    }

    fn matches(self, movement: &MovementRecord) -> bool {
        self.movement_type()
            .map_or(true, |tipo| movement.tipo_movimiento == tipo)
    }
}

impl fmt::Display for MovementTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MovementTab {
    type Err = String;

    /// Accepts the tab label or a dash/underscore slug, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        MovementTab::ALL
            .into_iter()
            .find(|tab| tab.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                let labels: Vec<&str> = MovementTab::ALL.iter().map(|t| t.label()).collect();
                format!("Unknown tab '{}'. Must be one of: {}", s, labels.join(", "))
            })
    }
}

/// A rendered feed row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovementRow {
    pub tipo: MovementType,
    pub articulo: String,
    pub fecha: String,
    /// Quantity, or the article condition for condition changes
    pub valor: String,
}

/// Feed state
#[derive(Debug, Clone)]
pub struct RecentMovements {
    movements: Vec<MovementRecord>,
    articles: Vec<Article>,
    tab: MovementTab,
    limit: usize,
    error: Option<String>,
    tz: Tz,
    locale: Locale,
}

impl RecentMovements {
    pub fn new(limit: usize, tz: Tz, locale: Locale) -> Self {
        Self {
            movements: Vec::new(),
            articles: Vec::new(),
            tab: MovementTab::default(),
            limit,
            error: None,
            tz,
            locale,
        }
    }

    /// Reloads movements and articles
    ///
    /// The two loads are independent: a failure of one keeps the other's
    /// previous data and records an error message for display.
    pub async fn load(&mut self, api: &dyn InventoryApi) {
        let (movements, articles) =
            futures::join!(api.fetch_movimientos(), api.fetch_articulos());

        self.error = None;
        match movements {
            Ok(movements) => self.set_movements(movements),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load movements");
                self.error = Some(format!("Error al cargar los movimientos: {e}"));
            }
        }
        match articles {
            Ok(articles) => self.articles = articles,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load articles");
                self.error = Some(format!("Error al cargar los artículos: {e}"));
            }
        }
    }

    /// Installs movements, newest first
    pub fn set_movements(&mut self, mut movements: Vec<MovementRecord>) {
        movements.sort_by(|a, b| b.fecha.cmp(&a.fecha));
        self.movements = movements;
    }

    pub fn set_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    pub fn tab(&self) -> MovementTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: MovementTab) {
        self.tab = tab;
    }

    /// Error of the last load, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Movements visible in the current tab
    pub fn visible(&self) -> Vec<&MovementRecord> {
        self.movements
            .iter()
            .filter(|m| self.tab.matches(m))
            .take(self.limit)
            .collect()
    }

    /// Visible movements ready for display
    pub fn rows(&self) -> Vec<MovementRow> {
        self.visible().into_iter().map(|m| self.row(m)).collect()
    }

    fn row(&self, movement: &MovementRecord) -> MovementRow {
        let article = movement
            .articulo
            .and_then(|id| self.articles.iter().find(|a| a.id == id));

        let valor = if movement.tipo_movimiento == MovementType::CambioEstado {
            article
                .map(Article::condition)
                .unwrap_or(ArticleCondition::Desconocido)
                .label()
                .to_string()
        } else {
            movement.cantidad.to_string()
        };

        MovementRow {
            tipo: movement.tipo_movimiento.clone(),
            articulo: article
                .map(|a| a.nombre.clone())
                .unwrap_or_else(|| UNKNOWN_ARTICLE.to_string()),
            fecha: movement
                .fecha
                .with_timezone(&self.tz)
                .format_localized(DATE_FORMAT, self.locale)
                .to_string(),
            valor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArticleId;
    use chrono::DateTime;
    use test_case::test_case;

    fn movement(tipo: &str, fecha: &str, cantidad: i64, articulo: i64) -> MovementRecord {
        MovementRecord::new(
            MovementType::from(tipo),
            DateTime::parse_from_rfc3339(fecha).unwrap(),
            cantidad,
        )
        .with_article(ArticleId::new(articulo))
    }

    fn feed() -> RecentMovements {
        let mut feed = RecentMovements::new(
            DEFAULT_LIMIT,
            chrono_tz::America::Santiago,
            Locale::es_CL,
        );
        feed.set_articles(vec![
            Article::new(ArticleId::new(1), "Taladro", 2, 5).with_estado(2),
            Article::new(ArticleId::new(2), "Pala", 10, 3),
        ]);
        feed.set_movements(vec![
            movement("Entrada", "2024-10-14T10:00:00-03:00", 5, 1),
            movement("Salida", "2024-10-15T10:00:00-03:00", 2, 2),
            movement("Cambio de Estado", "2024-10-16T10:30:00-03:00", 0, 1),
            movement("Entrada", "2024-10-13T10:00:00-03:00", 1, 99),
            movement("Entrada", "2024-10-12T10:00:00-03:00", 1, 2),
            movement("Prestamo", "2024-10-11T10:00:00-03:00", 1, 2),
        ]);
        feed
    }

    #[test]
    fn test_recientes_shows_newest_first_up_to_limit() {
        let feed = feed();
        let visible = feed.visible();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].tipo_movimiento, MovementType::CambioEstado);
        assert_eq!(visible[4].tipo_movimiento, MovementType::Entrada);
    }

    #[test]
    fn test_tab_filters_by_type() {
        let mut feed = feed();
        feed.set_tab(MovementTab::Entrada);
        let rows = feed.rows();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.tipo == MovementType::Entrada));
        assert_eq!(rows[0].valor, "5");
        assert_eq!(rows[1].articulo, UNKNOWN_ARTICLE);
    }

    #[test]
    fn test_condition_change_shows_condition() {
        let mut feed = feed();
        feed.set_tab(MovementTab::CambioEstado);
        let rows = feed.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].articulo, "Taladro");
        assert_eq!(rows[0].valor, "Malo");
        assert_eq!(rows[0].fecha, "16 de octubre de 2024, 10:30");
    }

    #[test]
    fn test_empty_tab() {
        let mut feed = feed();
        feed.set_tab(MovementTab::Regresado);
        assert!(feed.rows().is_empty());
    }

    #[test_case("Recientes", MovementTab::Recientes ; "label")]
    #[test_case("cambio-de-estado", MovementTab::CambioEstado ; "slug")]
    #[test_case("NUEVO_ARTICULO", MovementTab::NuevoArticulo ; "upper snake")]
    fn test_tab_from_str(input: &str, expected: MovementTab) {
        assert_eq!(input.parse::<MovementTab>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_tab() {
        assert!("ajustes".parse::<MovementTab>().is_err());
    }
}
