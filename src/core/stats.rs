//! Dashboard statistics and their detail views
//!
//! [`StatisticsStore`] fetches articles and the loan history, derives the
//! dashboard counters and hands out [`DetailView`]s for the low-stock and
//! active-loan widgets.
//!
//! Refreshes are fenced: every refresh takes a [`RefreshTicket`] and its
//! result is installed only if no newer refresh was started meanwhile. Results
//! arriving after [`StatisticsStore::unmount`] are dropped without a notice.

use crate::adapters::api::InventoryApi;
use crate::adapters::navigation::{Navigator, PRODUCT_HISTORY_ROUTE};
use crate::adapters::notify::{Notice, Notifier};
use crate::core::filter::filter_any;
use crate::core::report::{Report, ReportExporter};
use crate::domain::{Article, LoanRecord, Result};
use crate::log_refresh_applied;
use chrono_tz::Tz;
use serde::Serialize;
use std::path::PathBuf;

/// Notice shown when a refresh fails
pub const REFRESH_FAILED_TEXT: &str = "No se pudieron cargar los datos de estadísticas.";

/// Counters and collections derived from one fetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Number of articles
    pub total_productos: usize,

    /// Articles below their minimum, in server order
    pub low_stock: Vec<Article>,

    /// Loans with units still out, in server order
    pub active_loans: Vec<LoanRecord>,

    /// Units out across all active loans
    pub loaned_quantity: u64,
}

impl StatsSnapshot {
    /// Derives every counter from freshly fetched collections
    pub fn derive(articles: &[Article], loans: &[LoanRecord]) -> Self {
        let low_stock: Vec<Article> = articles
            .iter()
            .filter(|a| a.is_low_stock())
            .cloned()
            .collect();
        let active_loans: Vec<LoanRecord> =
            loans.iter().filter(|l| l.is_active()).cloned().collect();
        let loaned_quantity = active_loans
            .iter()
            .map(|l| u64::from(l.cantidad_restante))
            .sum();

        Self {
            total_productos: articles.len(),
            low_stock,
            active_loans,
            loaned_quantity,
        }
    }

    /// Count shown on the low-stock widget
    pub fn productos_bajo_stock(&self) -> usize {
        self.low_stock.len()
    }

    /// Count shown on the active-loans widget
    pub fn prestamos_activos(&self) -> usize {
        self.active_loans.len()
    }
}

/// Identifies one refresh; only the latest issued ticket may apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    /// Generation number
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// What happened to a refresh result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The snapshot was replaced
    Applied,
    /// A newer refresh was started; the result was dropped
    Stale,
    /// The store was unmounted; the result was dropped
    Unmounted,
    /// The fetch failed; the previous snapshot is kept
    Failed,
}

/// Articles and loan history fetched together
pub type FetchedCollections = (Vec<Article>, Vec<LoanRecord>);

/// Derived dashboard state with fenced refreshes
#[derive(Debug)]
pub struct StatisticsStore {
    snapshot: StatsSnapshot,
    issued: u64,
    applied: Option<u64>,
    mounted: bool,
    tz: Tz,
}

impl StatisticsStore {
    /// Empty, mounted store; loan dates are shown in `tz`
    pub fn new(tz: Tz) -> Self {
        Self {
            snapshot: StatsSnapshot::default(),
            issued: 0,
            applied: None,
            mounted: true,
            tz,
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> &StatsSnapshot {
        &self.snapshot
    }

    /// Generation of the installed snapshot, `None` before the first success
    pub fn applied_generation(&self) -> Option<u64> {
        self.applied
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Stops accepting results; later completions are no-ops
    pub fn unmount(&mut self) {
        self.mounted = false;
        tracing::debug!(issued = self.issued, "Statistics store unmounted");
    }

    /// Issues the ticket for a new refresh, invalidating older ones
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    /// Fetches both collections concurrently
    pub async fn fetch(api: &dyn InventoryApi) -> Result<FetchedCollections> {
        futures::try_join!(api.fetch_articulos(), api.fetch_historial_prestamo())
    }

    /// Installs the result of the refresh identified by `ticket`
    ///
    /// The snapshot is replaced as a whole. Failures of the latest refresh
    /// keep the previous snapshot and produce an error notice.
    pub fn apply(
        &mut self,
        ticket: RefreshTicket,
        result: Result<FetchedCollections>,
        notifier: &dyn Notifier,
    ) -> RefreshOutcome {
        if !self.mounted {
            tracing::debug!(
                generation = ticket.0,
                "Refresh completed after unmount, ignoring"
            );
            return RefreshOutcome::Unmounted;
        }

        if ticket.0 != self.issued {
            tracing::debug!(
                generation = ticket.0,
                latest = self.issued,
                "Stale refresh result discarded"
            );
            return RefreshOutcome::Stale;
        }

        match result {
            Ok((articles, loans)) => {
                self.snapshot = StatsSnapshot::derive(&articles, &loans);
                self.applied = Some(ticket.0);
                log_refresh_applied!(ticket.0, articles.len(), loans.len());
                RefreshOutcome::Applied
            }
            Err(e) => {
                tracing::error!(error = %e, generation = ticket.0, "Failed to refresh statistics");
                notifier.notify(Notice::error(REFRESH_FAILED_TEXT));
                RefreshOutcome::Failed
            }
        }
    }

    /// Fetches and applies in one step
    pub async fn refresh(
        &mut self,
        api: &dyn InventoryApi,
        notifier: &dyn Notifier,
    ) -> RefreshOutcome {
        let ticket = self.begin_refresh();
        let result = Self::fetch(api).await;
        self.apply(ticket, result, notifier)
    }

    /// Refreshes, then opens the low-stock view if there is anything to show
    pub async fn open_low_stock_detail(
        &mut self,
        api: &dyn InventoryApi,
        notifier: &dyn Notifier,
    ) -> Option<DetailView<Article>> {
        self.refresh(api, notifier).await;
        if !self.mounted {
            return None;
        }

        if self.snapshot.low_stock.is_empty() {
            notifier.notify(Notice::info(
                "Sin Artículos con Bajo Stock",
                "No hay artículos con stock por debajo del mínimo.",
            ));
            return None;
        }

        Some(DetailView::new(self.snapshot.low_stock.clone(), self.tz))
    }

    /// Refreshes, then opens the active-loans view if there is anything to show
    pub async fn open_active_loans_detail(
        &mut self,
        api: &dyn InventoryApi,
        notifier: &dyn Notifier,
    ) -> Option<DetailView<LoanRecord>> {
        self.refresh(api, notifier).await;
        if !self.mounted {
            return None;
        }

        if self.snapshot.active_loans.is_empty() {
            notifier.notify(Notice::info(
                "Sin Préstamos Activos",
                "No hay artículos prestados en este momento.",
            ));
            return None;
        }

        Some(DetailView::new(self.snapshot.active_loans.clone(), self.tz))
    }

    /// Follows the "Total Productos" widget link
    pub fn open_product_history(&self, navigator: &dyn Navigator) {
        navigator.navigate(PRODUCT_HISTORY_ROUTE);
    }
}

/// Row type of a detail view: how it is searched and exported
pub trait DetailRow: Clone {
    /// Report title
    const TITLE: &'static str;
    /// Report file name without extension
    const FILE_STEM: &'static str;
    /// Report column headers
    const HEADERS: &'static [&'static str];

    /// Texts the search term is matched against
    fn search_fields(&self, tz: &Tz) -> Vec<String>;

    /// Cells in header order
    fn cells(&self, tz: &Tz) -> Vec<String>;
}

impl DetailRow for Article {
    const TITLE: &'static str = "Artículos con Bajo Stock";
    const FILE_STEM: &'static str = "articulos_bajo_stock";
    const HEADERS: &'static [&'static str] = &["Artículo", "Stock Actual", "Stock Mínimo"];

    fn search_fields(&self, _tz: &Tz) -> Vec<String> {
        vec![self.nombre.clone()]
    }

    fn cells(&self, _tz: &Tz) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.stock_actual.to_string(),
            self.stock_minimo.to_string(),
        ]
    }
}

impl DetailRow for LoanRecord {
    const TITLE: &'static str = "Préstamos Activos";
    const FILE_STEM: &'static str = "prestamos_activos";
    const HEADERS: &'static [&'static str] = &[
        "Artículo",
        "Cantidad Prestada",
        "Prestado a",
        "Fecha de Préstamo",
        "Motivo",
    ];

    fn search_fields(&self, tz: &Tz) -> Vec<String> {
        vec![
            self.article_name().to_string(),
            self.person_name().to_string(),
            self.reason_name().to_string(),
            self.loan_date_label(tz),
        ]
    }

    fn cells(&self, tz: &Tz) -> Vec<String> {
        vec![
            self.article_name().to_string(),
            self.cantidad_restante.to_string(),
            self.person_name().to_string(),
            self.loan_date_label(tz),
            self.reason_name().to_string(),
        ]
    }
}

/// An opened detail modal: rows plus a per-view search term
///
/// Everything shown or exported goes through the search filter.
#[derive(Debug, Clone)]
pub struct DetailView<T: DetailRow> {
    rows: Vec<T>,
    search: String,
    tz: Tz,
}

impl<T: DetailRow> DetailView<T> {
    pub fn new(rows: Vec<T>, tz: Tz) -> Self {
        Self {
            rows,
            search: String::new(),
            tz,
        }
    }

    pub fn title(&self) -> &'static str {
        T::TITLE
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// All rows, ignoring the search term
    pub fn all_rows(&self) -> &[T] {
        &self.rows
    }

    /// Rows matching the current search term
    pub fn visible_rows(&self) -> Vec<T> {
        filter_any(&self.rows, &self.search, |row| row.search_fields(&self.tz))
    }

    /// Visible rows laid out as a report
    pub fn to_report(&self) -> Result<Report> {
        let mut report = Report::new(T::TITLE, T::FILE_STEM, T::HEADERS);
        for row in self.visible_rows() {
            report.push_row(row.cells(&self.tz))?;
        }
        Ok(report)
    }

    /// Exports exactly the visible rows
    pub fn export(&self, exporter: &dyn ReportExporter) -> Result<PathBuf> {
        let report = self.to_report()?;
        exporter.export(&report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notify::{NoticeIcon, RecordingNotifier};
    use crate::domain::{ApiError, ArticleId, InventarioError, PLACEHOLDER};

    fn articles() -> Vec<Article> {
        vec![
            Article::new(ArticleId::new(1), "Taladro", 2, 5),
            Article::new(ArticleId::new(2), "Pala", 10, 3),
        ]
    }

    fn loans() -> Vec<LoanRecord> {
        serde_json::from_str(
            r#"[
                {"id": 1, "articulo": {"id": 1, "nombre": "Taladro"}, "cantidad_restante": 2,
                 "personal": {"id": 4, "nombre": "Ana Rojas"},
                 "fecha_prestamo": "2024-10-14T15:00:00Z", "motivo": {"id": 1, "nombre": "Clases"}},
                {"id": 2, "articulo": null, "cantidad_restante": 1, "personal": null,
                 "fecha_prestamo": "2024-10-10T15:00:00Z", "motivo": null},
                {"id": 3, "articulo": {"id": 2, "nombre": "Pala"}, "cantidad_restante": 0,
                 "fecha_prestamo": "2024-10-01T15:00:00Z"}
            ]"#,
        )
        .unwrap()
    }

    fn store() -> StatisticsStore {
        StatisticsStore::new(chrono_tz::America::Santiago)
    }

    #[test]
    fn test_derive_counts() {
        let snapshot = StatsSnapshot::derive(&articles(), &loans());
        assert_eq!(snapshot.total_productos, 2);
        assert_eq!(snapshot.productos_bajo_stock(), 1);
        assert_eq!(snapshot.low_stock[0].nombre, "Taladro");
        assert_eq!(snapshot.prestamos_activos(), 2);
        assert_eq!(snapshot.loaned_quantity, 3);
    }

    #[test]
    fn test_lowering_minimum_never_adds_low_stock() {
        let mut items = articles();
        let before = StatsSnapshot::derive(&items, &[]).productos_bajo_stock();
        for item in &mut items {
            item.stock_minimo = item.stock_minimo.saturating_sub(3);
        }
        let after = StatsSnapshot::derive(&items, &[]).productos_bajo_stock();
        assert!(after <= before);
    }

    #[test]
    fn test_only_latest_ticket_applies() {
        let notifier = RecordingNotifier::new();
        let mut store = store();

        let first = store.begin_refresh();
        let second = store.begin_refresh();

        let outcome = store.apply(second, Ok((articles(), loans())), &notifier);
        assert_eq!(outcome, RefreshOutcome::Applied);

        let outcome = store.apply(first, Ok((Vec::new(), Vec::new())), &notifier);
        assert_eq!(outcome, RefreshOutcome::Stale);
        assert_eq!(store.snapshot().total_productos, 2);
        assert_eq!(store.applied_generation(), Some(second.generation()));
    }

    #[test]
    fn test_failure_keeps_previous_snapshot() {
        let notifier = RecordingNotifier::new();
        let mut store = store();

        let ticket = store.begin_refresh();
        store.apply(ticket, Ok((articles(), loans())), &notifier);

        let ticket = store.begin_refresh();
        let err = InventarioError::Api(ApiError::NoResponse("connection refused".into()));
        let outcome = store.apply(ticket, Err(err), &notifier);

        assert_eq!(outcome, RefreshOutcome::Failed);
        assert_eq!(store.snapshot().total_productos, 2);
        let notice = notifier.last().unwrap();
        assert_eq!(notice.icon, NoticeIcon::Error);
        assert_eq!(notice.text, REFRESH_FAILED_TEXT);
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let notifier = RecordingNotifier::new();
        let mut store = store();
        let old = store.begin_refresh();
        let _new = store.begin_refresh();
        let err = InventarioError::Api(ApiError::NoResponse("timeout".into()));
        assert_eq!(store.apply(old, Err(err), &notifier), RefreshOutcome::Stale);
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_unmounted_results_are_noops() {
        let notifier = RecordingNotifier::new();
        let mut store = store();
        let ticket = store.begin_refresh();
        store.unmount();

        let err = InventarioError::Api(ApiError::NoResponse("timeout".into()));
        assert_eq!(store.apply(ticket, Err(err), &notifier), RefreshOutcome::Unmounted);
        assert_eq!(
            store.apply(ticket, Ok((articles(), loans())), &notifier),
            RefreshOutcome::Unmounted
        );
        assert_eq!(store.snapshot(), &StatsSnapshot::default());
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_low_stock_view_search_and_report() {
        let tz = chrono_tz::America::Santiago;
        let mut low = articles();
        low.push(Article::new(ArticleId::new(3), "Tornillos", 1, 100));
        let mut view = DetailView::new(low, tz);

        view.set_search("TAL");
        let report = view.to_report().unwrap();
        assert_eq!(report.title, "Artículos con Bajo Stock");
        assert_eq!(report.file_stem, "articulos_bajo_stock");
        assert_eq!(report.rows, vec![vec!["Taladro", "2", "5"]]);
    }

    #[test]
    fn test_loan_view_searches_every_field() {
        let tz = chrono_tz::America::Santiago;
        let active: Vec<LoanRecord> = loans().into_iter().filter(|l| l.is_active()).collect();
        let mut view = DetailView::new(active, tz);

        view.set_search("ana");
        assert_eq!(view.visible_rows().len(), 1);

        view.set_search("clases");
        assert_eq!(view.visible_rows().len(), 1);

        view.set_search("10-10-2024");
        assert_eq!(view.visible_rows()[0].article_name(), PLACEHOLDER);

        view.set_search("n/d");
        assert_eq!(view.visible_rows().len(), 1);

        view.set_search("");
        let report = view.to_report().unwrap();
        assert_eq!(
            report.rows[0],
            vec!["Taladro", "2", "Ana Rojas", "14-10-2024", "Clases"]
        );
        assert_eq!(report.rows[1], vec!["N/D", "1", "N/D", "10-10-2024", "N/D"]);
    }
}
