// Copyright 2026 CI Analysis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while persisting or loading analysis reports.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or reading a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The report file could not be written.
    #[error("failed to write report to {}: {source}", path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The report file could not be read.
    #[error("failed to read report from {}: {source}", path.display())]
    Read {
        /// Source file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The report could not be encoded as JSON.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A file on disk did not contain a valid report.
    #[error("invalid report in {}: {source}", path.display())]
    Deserialize {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
