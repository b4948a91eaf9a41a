// Copyright 2026 CI Analysis Contributors
// SPDX-License-Identifier: Apache-2.0

//! `ci-analysis` entry point.

fn main() {
    if let Err(e) = ci_analysis_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
