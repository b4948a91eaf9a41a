// Copyright 2026 CI Analysis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Job analysis reports for CI pipelines.
//!
//! Each CI job calls into this crate once to produce a JSON report
//! describing the job, stamped with the time and the host it ran on.
//!
//! # Quick Start
//!
//! ```no_run
//! use ci_analysis_report::generate_and_write;
//!
//! let report = generate_and_write("build-and-test", "out/report.json")?;
//! assert_eq!(report.status.as_str(), "success");
//! # Ok::<(), ci_analysis_report::ReportError>(())
//! ```
//!
//! # Modules
//!
//! - [`report`] - The `AnalysisReport` record and its fixed counters
//! - [`environment`] - Toolchain and platform capture
//! - [`io`] - Writing and reading report files
//! - [`console`] - Human-readable run output

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod console;
pub mod environment;
pub mod error;
pub mod io;
pub mod report;

pub use environment::Environment;
pub use error::{ReportError, Result};
pub use report::{AnalysisCounters, AnalysisReport, ReportStatus, ResourceUsage};

use std::path::Path;

/// Build a report for `job_name` and write it to `output`.
///
/// Library entry point for callers that do not need console output.
/// Parent directories of `output` are created as needed and an existing
/// file is replaced.
///
/// # Errors
///
/// Returns a [`ReportError`] if the directory or file cannot be written.
pub fn generate_and_write(job_name: &str, output: impl AsRef<Path>) -> Result<AnalysisReport> {
    let report = AnalysisReport::generate(job_name);
    io::write_report(&report, output)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_and_write_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/report.json");

        let written = generate_and_write("build-and-test", &path).unwrap();
        let loaded = io::read_report(&path).unwrap();

        assert_eq!(loaded, written);
    }

    #[test]
    fn test_written_file_has_exact_key_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        generate_and_write("keys", &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        let keys = |v: &serde_json::Value| -> Vec<String> {
            let mut k: Vec<String> = v.as_object().unwrap().keys().cloned().collect();
            k.sort();
            k
        };
        assert_eq!(
            keys(&value),
            [
                "analysis",
                "job_name",
                "metrics",
                "platform",
                "runtime_version",
                "status",
                "summary",
                "timestamp"
            ]
        );
        assert_eq!(
            keys(&value["analysis"]),
            [
                "average_processing_time_ms",
                "data_points_processed",
                "errors",
                "success_rate",
                "warnings"
            ]
        );
        assert_eq!(keys(&value["metrics"]), ["cpu_usage", "disk_io", "memory_usage"]);
    }
}
