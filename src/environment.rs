//! @ai:module:intent Describe the runtime environment the function executes in
//! @ai:module:layer infrastructure
//! @ai:module:public_api EnvironmentInfo

use std::path::PathBuf;

/// @ai:intent Snapshot of the process environment printed at startup
#[derive(Debug, Clone)]
pub struct EnvironmentInfo {
    pub version: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
    /// `None` when the working directory cannot be resolved
    pub working_dir: Option<PathBuf>,
}

impl EnvironmentInfo {
    /// @ai:intent Capture crate version, target platform and working directory
    /// @ai:effects fs:read
    /// @ai:edge_cases an unresolvable working directory is recorded as None, never an error
    pub fn detect() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            working_dir: std::env::current_dir().ok(),
        }
    }

    /// @ai:intent Human-readable lines for the progress output
    /// @ai:effects pure
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("nanogrid-summary version: {}", self.version),
            format!("OS/Arch: {}/{}", self.os, self.arch),
            format!(
                "Working directory: {}",
                self.working_dir
                    .as_ref()
                    .map(|dir| dir.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string())
            ),
        ]
    }

    /// @ai:intent Print environment lines to stdout
    /// @ai:effects io
    pub fn print(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}
