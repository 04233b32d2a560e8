//! @ai:module:intent JSON summary report writer
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter, JsonReporterTrait
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::summary::SummaryReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Write the report to a file, replacing any previous content
    fn generate(&self, report: &SummaryReport, output_path: &Path) -> Result<()>;
}

/// @ai:intent Writes summary reports as pretty-printed JSON
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render the report as two-space indented JSON with a trailing newline
    /// @ai:effects pure
    pub fn render(&self, report: &SummaryReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Create-or-truncate the output file and write the report
    /// @ai:effects fs:write
    /// @ai:post the file handle is closed on every return path
    fn generate(&self, report: &SummaryReport, output_path: &Path) -> Result<()> {
        let json = self.render(report)?;
        let write_err = |source: std::io::Error| Error::FileWrite {
            path: output_path.to_path_buf(),
            source,
        };

        let file = File::create(output_path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json.as_bytes()).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        tracing::debug!("Wrote {} bytes to {}", json.len(), output_path.display());
        Ok(())
    }
}
