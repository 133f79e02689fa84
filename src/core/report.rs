//! Tabular report artifacts
//!
//! A [`Report`] is a title, a header row and string rows. Writers implement
//! [`ReportExporter`]; the dashboard only cares whether the export succeeded
//! and where the file ended up.

use crate::domain::{InventarioError, Result};
use std::path::PathBuf;

/// Report ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Human readable title
    pub title: String,

    /// Base file name without extension; fixed per report type
    pub file_stem: String,

    /// Column headers
    pub headers: Vec<String>,

    /// Data rows, each with one cell per header
    pub rows: Vec<Vec<String>>,
}

impl Report {
    /// Creates an empty report
    pub fn new(
        title: impl Into<String>,
        file_stem: impl Into<String>,
        headers: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            file_stem: file_stem.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row
    ///
    /// # Errors
    ///
    /// Returns [`InventarioError::Export`] when the row width differs from
    /// the header width.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(InventarioError::Export(format!(
                "Row has {} cells but report '{}' has {} columns",
                row.len(),
                self.title,
                self.headers.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the report has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Writes reports somewhere the user can pick them up
pub trait ReportExporter {
    /// Writes `report` and returns the artifact's location
    fn export(&self, report: &Report) -> Result<PathBuf>;
}
