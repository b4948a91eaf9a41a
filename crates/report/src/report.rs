// Copyright 2026 CI Analysis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Analysis report types.
//!
//! [`AnalysisReport`] is the single record written per CI job. Field
//! declaration order is the key order in the serialized JSON.

use crate::environment::Environment;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Number of data points every report claims to have processed.
pub const DATA_POINTS_PROCESSED: u64 = 1000;
/// Reported success rate, in percent.
pub const SUCCESS_RATE: f64 = 98.5;
/// Reported mean processing time per data point.
pub const AVERAGE_PROCESSING_TIME_MS: f64 = 45.3;
/// Reported error count.
pub const ERRORS: u64 = 0;
/// Reported warning count.
pub const WARNINGS: u64 = 2;

/// Outcome of an analysis run.
///
/// Only `Success` exists. Warnings do not downgrade it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// The analysis completed.
    #[default]
    Success,
}

impl ReportStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Success => "success",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters describing the processed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisCounters {
    /// Data points processed.
    pub data_points_processed: u64,
    /// Success rate in percent.
    pub success_rate: f64,
    /// Mean processing time in milliseconds.
    pub average_processing_time_ms: f64,
    /// Error count.
    pub errors: u64,
    /// Warning count.
    pub warnings: u64,
}

impl Default for AnalysisCounters {
    fn default() -> Self {
        Self {
            data_points_processed: DATA_POINTS_PROCESSED,
            success_rate: SUCCESS_RATE,
            average_processing_time_ms: AVERAGE_PROCESSING_TIME_MS,
            errors: ERRORS,
            warnings: WARNINGS,
        }
    }
}

/// Resource usage labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUsage {
    /// CPU usage, e.g. `12%`.
    pub cpu_usage: String,
    /// Memory usage, e.g. `256MB`.
    pub memory_usage: String,
    /// Qualitative disk I/O level.
    pub disk_io: String,
}

impl Default for ResourceUsage {
    fn default() -> Self {
        Self {
            cpu_usage: "12%".to_string(),
            memory_usage: "256MB".to_string(),
            disk_io: "low".to_string(),
        }
    }
}

/// Job analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Job name as given by the caller.
    pub job_name: String,
    /// Time the report was generated (local clock).
    pub timestamp: DateTime<Local>,
    /// Version of the rustc toolchain the generator was built with.
    pub runtime_version: String,
    /// Host operating system family.
    pub platform: String,
    /// Analysis counters.
    pub analysis: AnalysisCounters,
    /// Resource usage labels.
    pub metrics: ResourceUsage,
    /// One-line human summary mentioning the job.
    pub summary: String,
    /// Run outcome.
    pub status: ReportStatus,
}

impl AnalysisReport {
    /// Create a report for `job_name` stamped with the given environment.
    pub fn new(job_name: impl Into<String>, env: &Environment) -> Self {
        let job_name = job_name.into();
        let summary = summary_for(&job_name);
        Self {
            job_name,
            timestamp: Local::now(),
            runtime_version: env.runtime_version.clone(),
            platform: env.platform.clone(),
            analysis: AnalysisCounters::default(),
            metrics: ResourceUsage::default(),
            summary,
            status: ReportStatus::Success,
        }
    }

    /// Create a report for `job_name` using the current environment.
    pub fn generate(job_name: impl Into<String>) -> Self {
        Self::new(job_name, &Environment::capture())
    }
}

fn summary_for(job_name: &str) -> String {
    format!("Analysis of {} completed successfully", job_name)
}
