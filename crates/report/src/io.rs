// Copyright 2026 CI Analysis Contributors
// SPDX-License-Identifier: Apache-2.0

//! I/O operations for analysis reports.
//!
//! Reports are written as pretty-printed UTF-8 JSON. Non-ASCII text is
//! emitted as-is.

use crate::error::{ReportError, Result};
use crate::report::AnalysisReport;
use std::fs;
use std::path::Path;

/// Create every missing directory above `path`.
///
/// A bare file name has no parent to create. Existing directories are fine.
pub fn ensure_parent_dir(path: impl AsRef<Path>) -> Result<()> {
    let Some(parent) = path.as_ref().parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    tracing::debug!(dir = %parent.display(), "ensuring output directory");
    fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

/// Encode a report as indented JSON.
pub fn to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write a report to `path`, creating parent directories and replacing any existing file.
pub fn write_report(report: &AnalysisReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let json = to_json(report)?;
    fs::write(path, json.as_bytes()).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        bytes = json.len(),
        job = %report.job_name,
        "wrote analysis report"
    );
    Ok(())
}

/// Read a report back from `path`.
pub fn read_report(path: impl AsRef<Path>) -> Result<AnalysisReport> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ReportError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}
