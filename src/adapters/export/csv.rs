//! CSV report writer

use crate::core::report::{Report, ReportExporter};
use crate::domain::{InventarioError, Result};
use crate::log_report_written;
use std::path::{Path, PathBuf};

/// Writes `<output_dir>/<file_stem>.csv`, replacing any previous export
#[derive(Debug, Clone)]
pub struct CsvReportExporter {
    output_dir: PathBuf,
}

impl CsvReportExporter {
    /// Creates an exporter writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory reports are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ReportExporter for CsvReportExporter {
    fn export(&self, report: &Report) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            InventarioError::Export(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let path = self.output_dir.join(format!("{}.csv", report.file_stem));
        let mut writer = ::csv::Writer::from_path(&path)?;

        writer.write_record(&report.headers)?;
        for row in &report.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        tracing::debug!(title = %report.title, "Report exported");
        log_report_written!(path, report.len());

        Ok(path)
    }
}
