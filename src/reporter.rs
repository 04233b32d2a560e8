//! @ai:module:intent Compute the summary, persist it and report progress
//! @ai:module:layer application
//! @ai:module:public_api SummaryReporter, run
//! @ai:module:depends_on summary, report, environment, config

use crate::config::ReporterConfig;
use crate::environment::EnvironmentInfo;
use crate::error::Result;
use crate::report::{JsonReporter, JsonReporterTrait};
use crate::summary::{Summary, SummaryReport};

/// @ai:intent Produces and persists one summary report per run
pub struct SummaryReporter {
    config: ReporterConfig,
    json: JsonReporter,
}

impl SummaryReporter {
    /// @ai:intent Create a reporter with the default configuration
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::with_config(ReporterConfig::default())
    }

    /// @ai:intent Create a reporter with an explicit configuration
    /// @ai:effects pure
    pub fn with_config(config: ReporterConfig) -> Self {
        Self {
            config,
            json: JsonReporter::new(),
        }
    }

    /// @ai:intent Configuration this reporter runs with
    /// @ai:effects pure
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// @ai:intent Compute the summary, write it as JSON and print progress
    /// @ai:effects fs:write, io, time
    /// @ai:post output file holds exactly one JSON object on success
    pub fn run(&self) -> Result<SummaryReport> {
        println!("=== NanoGrid Rust Function ===");
        println!("Starting execution...");
        EnvironmentInfo::detect().print();

        let summary = Summary::over(self.config.range_start..=self.config.range_end)?;
        tracing::info!(
            "Reduced {} numbers ({}..={})",
            summary.count,
            self.config.range_start,
            self.config.range_end
        );

        println!();
        println!("Calculation results:");
        println!("Sum: {}", summary.sum);
        println!("Average: {:.2}", summary.average);

        let report = SummaryReport::now(&summary, self.config.message.as_str());
        self.json.generate(&report, &self.config.output_path)?;
        tracing::info!("Summary report saved to {}", self.config.output_path.display());

        println!();
        println!("✓ Output written to {}", self.config.output_path.display());
        println!();
        println!("Execution completed successfully!");

        Ok(report)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// @ai:intent Run the summary function with defaults, writing `output.json` in the working directory
/// @ai:effects fs:write, io, time
pub fn run() -> Result<SummaryReport> {
    SummaryReporter::new().run()
}
