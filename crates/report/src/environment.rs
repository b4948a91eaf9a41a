// Copyright 2026 CI Analysis Contributors
// SPDX-License-Identifier: Apache-2.0

//! Toolchain and platform information stamped into every report.

/// Snapshot of the runtime the report was produced on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Version of the rustc toolchain the generator was built with, e.g. `1.80.1`.
    pub runtime_version: String,
    /// Full toolchain banner, e.g. `rustc 1.80.1 (3f5fd8dd4 2024-08-06)`.
    pub runtime_banner: String,
    /// Operating system family, e.g. `linux`.
    pub platform: String,
}

impl Environment {
    /// Capture the current environment.
    pub fn capture() -> Self {
        let meta = rustc_version_runtime::version_meta();
        let env = Self::new(
            &meta.semver.to_string(),
            &meta.short_version_string,
            std::env::consts::OS,
        );
        tracing::debug!(
            runtime_version = %env.runtime_version,
            platform = %env.platform,
            "captured runtime environment"
        );
        env
    }

    /// Build an environment from an explicit toolchain version, banner and platform name.
    pub fn new(version: &str, banner: &str, platform: &str) -> Self {
        Self {
            runtime_version: version.to_string(),
            runtime_banner: banner.to_string(),
            platform: platform.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_fields() {
        let env = Environment::new("1.2.3", "rustc 1.2.3 (abcdef012 2024-01-01)", "macos");
        assert_eq!(env.runtime_version, "1.2.3");
        assert_eq!(env.runtime_banner, "rustc 1.2.3 (abcdef012 2024-01-01)");
        assert_eq!(env.platform, "macos");
    }

    #[test]
    fn test_capture_reports_toolchain_version() {
        let env = Environment::capture();
        assert_eq!(env.runtime_version, rustc_version_runtime::version().to_string());
        assert_ne!(env.runtime_version, env!("CARGO_PKG_VERSION"));
        assert!(env.runtime_banner.starts_with("rustc "));
        assert!(env.runtime_banner.contains(&env.runtime_version));
    }

    #[test]
    fn test_capture_reports_host_platform() {
        let env = Environment::capture();
        assert_eq!(env.platform, std::env::consts::OS);
    }
}
