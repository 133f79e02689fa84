//! Report writers
//!
//! - [`CsvReportExporter`] - one CSV file per report in a fixed directory

pub mod csv;

pub use self::csv::CsvReportExporter;
