//! Report files on disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use brandreturns_model::StudyResult;
use tracing::info;

use crate::{ReportError, growth_chart, html_report, yearly_returns_chart};

/// File name of the cumulative-growth chart.
pub const GROWTH_CHART_FILE: &str = "growth.svg";
/// File name of the yearly-returns chart.
pub const YEARLY_CHART_FILE: &str = "yearly_returns.svg";
/// File name of the HTML report.
pub const REPORT_FILE: &str = "report.html";

/// Paths of the written report files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    /// Cumulative-growth chart.
    pub growth_chart: PathBuf,
    /// Yearly-returns chart.
    pub yearly_chart: PathBuf,
    /// HTML report.
    pub report: PathBuf,
}

fn write_file(path: PathBuf, contents: &str) -> Result<PathBuf, ReportError> {
    fs::write(&path, contents).map_err(|source| ReportError::Write { path: path.clone(), source })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote report file");
    Ok(path)
}

/// Write both charts and the HTML report into `output_dir`, creating it if needed.
///
/// # Errors
/// Returns `ReportError` if the directory cannot be created or a file cannot be written.
pub fn write_report(output_dir: &Path, result: &StudyResult) -> Result<ReportFiles, ReportError> {
    fs::create_dir_all(output_dir)
        .map_err(|source| ReportError::CreateDir { path: output_dir.to_path_buf(), source })?;

    Ok(ReportFiles {
        growth_chart: write_file(output_dir.join(GROWTH_CHART_FILE), &growth_chart(result))?,
        yearly_chart: write_file(output_dir.join(YEARLY_CHART_FILE), &yearly_returns_chart(result))?,
        report: write_file(output_dir.join(REPORT_FILE), &html_report(result))?,
    })
}
