// Copyright 2026 CI Analysis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Console output for analysis runs.
//!
//! The header is printed before the report is written, the summary after.

use crate::environment::Environment;
use crate::report::AnalysisReport;
use colored::Colorize;
use std::path::Path;

const BANNER_WIDTH: usize = 50;

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Render the lines shown when an analysis run starts.
pub fn render_header(job_name: &str, output: &Path, env: &Environment) -> String {
    let lines = [
        banner(),
        format!("{}", "Running job analysis...".bold()),
        banner(),
        format!("Job name: {}", job_name),
        format!("Output: {}", output.display()),
        format!("Runtime: {}", env.runtime_banner),
        String::new(),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render the completion block for a written report.
pub fn render_summary(report: &AnalysisReport, output: &Path) -> String {
    let analysis = &report.analysis;
    let lines = [
        format!("{}", "Analysis complete".green().bold()),
        format!("Result file: {}", output.display()),
        String::new(),
        "Summary".bold().to_string(),
        format!("  - Data points processed: {}", analysis.data_points_processed),
        format!("  - Success rate: {}%", analysis.success_rate),
        format!("  - Errors: {}", analysis.errors),
        format!("  - Warnings: {}", analysis.warnings),
        String::new(),
        banner(),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
