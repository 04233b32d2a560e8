//! @ai:module:intent NanoGrid summary function library
//! @ai:module:layer application
//! @ai:module:public_api config, environment, error, report, reporter, summary
//!
//! # NanoGrid Summary
//!
//! Computes the sum and average of `1..=1000` and writes them, with a Unix
//! timestamp and a status message, to `output.json` in the working directory.
//!
//! ```rust,no_run
//! use nanogrid_summary::SummaryReporter;
//!
//! let report = SummaryReporter::new().run().unwrap();
//! assert_eq!(report.sum, 500_500);
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod report;
pub mod reporter;
pub mod summary;

pub use config::ReporterConfig;
pub use environment::EnvironmentInfo;
pub use error::{Error, Result};
pub use report::{JsonReporter, JsonReporterTrait};
pub use reporter::{run, SummaryReporter};
pub use summary::{Summary, SummaryReport};
