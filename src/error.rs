//! @ai:module:intent Define error types for the summary function
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all summary operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to write report {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Sum of {start}..={end} overflows i64")]
    Overflow { start: i64, end: i64 },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
