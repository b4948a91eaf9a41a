// Copyright 2026 CI Analysis Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for CI job analysis.
//!
//! Writes one JSON analysis report per invocation and prints a short
//! summary to stdout. Logs go to stderr.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use ci_analysis_report::{console, io, AnalysisReport, Environment};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate a job analysis report for a CI job.
#[derive(Parser, Debug)]
#[command(name = "ci-analysis")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the job the report describes.
    #[arg(long = "job-name", value_name = "NAME")]
    pub job_name: String,

    /// Destination file for the JSON report. Parent directories are created.
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute an already parsed command line.
pub fn execute(cli: Cli) -> anyhow::Result<AnalysisReport> {
    let env = Environment::capture();
    print!("{}", console::render_header(&cli.job_name, &cli.output, &env));

    let report = AnalysisReport::new(cli.job_name, &env);
    io::write_report(&report, &cli.output)
        .with_context(|| format!("could not save report for job '{}'", report.job_name))?;

    print!("{}", console::render_summary(&report, &cli.output));
    Ok(report)
}

/// Run the CLI with the process arguments.
///
/// Missing arguments are reported by clap, which exits with status 2.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the report cannot be written.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(job = %cli.job_name, output = %cli.output.display(), "starting analysis");

    execute(cli)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_required_arguments() {
        let cli = Cli::try_parse_from([
            "ci-analysis",
            "--job-name",
            "build-and-test",
            "--output",
            "out/report.json",
        ])
        .unwrap();
        assert_eq!(cli.job_name, "build-and-test");
        assert_eq!(cli.output, PathBuf::from("out/report.json"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_missing_job_name_is_usage_error() {
        let err = Cli::try_parse_from(["ci-analysis", "--output", "r.json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_output_is_usage_error() {
        let err = Cli::try_parse_from(["ci-analysis", "--job-name", "x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_execute_writes_report() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out/report.json");
        let cli = Cli {
            job_name: "unit".to_string(),
            output: output.clone(),
            verbose: false,
        };

        let report = execute(cli).unwrap();
        assert_eq!(io::read_report(&output).unwrap(), report);
    }
}
