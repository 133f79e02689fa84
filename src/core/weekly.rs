//! Monday–Friday movement histogram
//!
//! Buckets the quantities of the five charted movement types into the five
//! business days of the current week. A record lands in the bucket of its
//! weekday within *its own* week, so records from earlier weeks add into the
//! same five buckets. Weekend records are dropped.

use crate::domain::{MovementRecord, MovementType};
use chrono::{DateTime, Datelike, Duration, Locale, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Number of business-day buckets
pub const BUSINESS_DAYS: usize = 5;

/// Day label pattern, e.g. `lunes 13/10`
pub const LABEL_FORMAT: &str = "%A %d/%m";

/// Color used for types outside the fixed table
pub const DEFAULT_COLOR: &str = "rgba(0, 0, 0, 0.7)";

/// Movement types that are charted, in dataset order
pub const CHARTED_TYPES: [MovementType; 5] = [
    MovementType::Entrada,
    MovementType::Salida,
    MovementType::NuevoArticulo,
    MovementType::Prestamo,
    MovementType::Regresado,
];

/// Fixed chart color for a movement type
pub fn color_for(tipo: &MovementType) -> &'static str {
    match tipo {
        MovementType::Entrada => "rgba(75, 192, 192, 0.7)",
        MovementType::Salida => "rgba(255, 99, 132, 0.7)",
        MovementType::NuevoArticulo => "rgba(54, 162, 235, 0.7)",
        MovementType::Prestamo => "rgba(153, 102, 255, 0.7)",
        MovementType::Regresado => "rgba(255, 159, 64, 0.7)",
        _ => DEFAULT_COLOR,
    }
}

/// One bar series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyDataset {
    pub label: MovementType,
    pub data: [i64; BUSINESS_DAYS],
    pub background_color: &'static str,
}

impl WeeklyDataset {
    /// Sum over the five buckets
    pub fn total(&self) -> i64 {
        self.data.iter().sum()
    }
}

/// Labels plus one dataset per charted type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyChart {
    pub labels: Vec<String>,
    pub datasets: Vec<WeeklyDataset>,
}

impl WeeklyChart {
    /// Dataset for `tipo`, if it is charted
    pub fn dataset(&self, tipo: &MovementType) -> Option<&WeeklyDataset> {
        self.datasets.iter().find(|d| &d.label == tipo)
    }
}

/// Builds [`WeeklyChart`]s in a fixed zone and locale
///
/// # Example
///
/// ```rust
/// use inventario::core::weekly::WeeklyAggregator;
/// use chrono::{Locale, TimeZone, Utc};
///
/// let aggregator = WeeklyAggregator::new(chrono_tz::America::Santiago, Locale::es_CL);
/// // Wednesday 16 October 2024, midday in Santiago
/// let now = Utc.with_ymd_and_hms(2024, 10, 16, 15, 0, 0).unwrap();
/// let chart = aggregator.aggregate(&[], now);
/// assert_eq!(chart.labels[0], "lunes 14/10");
/// assert_eq!(chart.datasets.len(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WeeklyAggregator {
    tz: Tz,
    locale: Locale,
}

impl WeeklyAggregator {
    pub fn new(tz: Tz, locale: Locale) -> Self {
        Self { tz, locale }
    }

    /// Histogram of `movements` for the week containing `now`
    pub fn aggregate(&self, movements: &[MovementRecord], now: DateTime<Utc>) -> WeeklyChart {
        let today = now.with_timezone(&self.tz).date_naive();
        let monday = week_start(today);
        let labels = (0..BUSINESS_DAYS as i64)
            .map(|offset| self.day_label(monday + Duration::days(offset)))
            .collect();

        let mut datasets: Vec<WeeklyDataset> = CHARTED_TYPES
            .iter()
            .map(|tipo| WeeklyDataset {
                label: tipo.clone(),
                data: [0; BUSINESS_DAYS],
                background_color: color_for(tipo),
            })
            .collect();

        let mut skipped = 0usize;
        for movement in movements {
            let Some(dataset) = datasets
                .iter_mut()
                .find(|d| d.label == movement.tipo_movimiento)
            else {
                skipped += 1;
                continue;
            };

            let day = movement.fecha.with_timezone(&self.tz).date_naive();
            match business_day_index(day) {
                Some(index) => dataset.data[index] += movement.cantidad,
                None => skipped += 1,
            }
        }

        tracing::debug!(
            movements = movements.len(),
            skipped,
            week_start = %monday,
            "Weekly histogram built"
        );

        WeeklyChart { labels, datasets }
    }

    fn day_label(&self, date: NaiveDate) -> String {
        match date.and_hms_opt(12, 0, 0) {
            Some(noon) => Utc
                .from_utc_datetime(&noon)
                .format_localized(LABEL_FORMAT, self.locale)
                .to_string(),
            None => date.format("%d/%m").to_string(),
        }
    }
}

/// ISO week start (Monday) of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Bucket index of `date` within its own week; `None` on weekends
pub fn business_day_index(date: NaiveDate) -> Option<usize> {
    let index = date.weekday().num_days_from_monday() as usize;
    (index < BUSINESS_DAYS).then_some(index)
}
