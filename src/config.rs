//! @ai:module:intent Run configuration for the summary function
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReporterConfig
//! @ai:module:stateless true

use std::path::PathBuf;

/// Status message written on every successful run.
pub const SUCCESS_MESSAGE: &str = "Function executed successfully!";

/// @ai:intent Settings for a single summary run
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq)]
pub struct ReporterConfig {
    pub range_start: i64,
    pub range_end: i64,
    pub output_path: PathBuf,
    pub message: String,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            range_start: default_range_start(),
            range_end: default_range_end(),
            output_path: default_output_path(),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

fn default_range_start() -> i64 {
    1
}

fn default_range_end() -> i64 {
    1000
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.json")
}

impl ReporterConfig {
    /// @ai:intent Redirect the report to another path
    /// @ai:effects pure
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}
