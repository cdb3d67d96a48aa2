//! Unmask Report — turns a `ScanResult` into something a person can review.
//!
//! The report always carries the same content: totals (files examined,
//! masquerading, unrecognized), one row per file, and an expanded metadata
//! block for every file that is not `Normal`. It can be rendered as plain
//! text for the terminal, or exported as CSV or JSON.
//!
//! # Modules
//!
//! - [`text`] — Terminal rendering.
//! - [`table`] — CSV export.
//! - [`json`] — JSON export.
//! - [`row`] — Flat per-file row shared by the exporters.

pub mod error;
pub mod json;
pub mod row;
pub mod table;
pub mod text;

pub use error::ReportError;

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use unmask_core::ScanResult;

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl ReportFormat {
    /// File extension used when saving.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Render `result` in `format`, stamped with `generated_at`.
pub fn render(
    result: &ScanResult,
    format: ReportFormat,
    generated_at: DateTime<Local>,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(text::render_text(result, generated_at)),
        ReportFormat::Csv => table::render_csv(result),
        ReportFormat::Json => json::render_json(result, generated_at),
    }
}

/// File name for a report generated at `at`: `unmask_report_YYYYmmdd_HHMMSS.<ext>`.
pub fn report_file_name(format: ReportFormat, at: DateTime<Local>) -> String {
    format!(
        "unmask_report_{}.{}",
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Render `result` and write it into `dir` under a timestamped name,
/// creating `dir` if needed. Returns the path written.
pub fn save_report(
    result: &ScanResult,
    format: ReportFormat,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    let now = Local::now();
    let body = render(result, format, now)?;

    fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))?;
    let path = dir.join(report_file_name(format, now));
    fs::write(&path, body).map_err(|e| ReportError::io(&path, e))?;

    info!("Report written to {}", path.display());
    Ok(path)
}
