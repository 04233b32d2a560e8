//! @ai:module:intent Reduce a number range to its sum and average
//! @ai:module:layer domain
//! @ai:module:public_api Summary, SummaryReport
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// @ai:intent Sum, average and element count of a reduced sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: u64,
    pub sum: i64,
    pub average: f64,
}

impl Summary {
    /// @ai:intent Reduce every integer in the range by addition
    /// @ai:effects pure
    /// @ai:edge_cases empty range yields sum 0 and average 0.0
    /// @ai:edge_cases a sum outside i64 returns Error::Overflow instead of wrapping
    pub fn over(mut range: RangeInclusive<i64>) -> Result<Self> {
        let (start, end) = (*range.start(), *range.end());
        let (count, sum) = range.try_fold((0u64, 0i64), |(count, sum), n| {
            sum.checked_add(n)
                .map(|sum| (count + 1, sum))
                .ok_or(Error::Overflow { start, end })
        })?;

        Ok(Self {
            count,
            sum,
            average: average(sum, count),
        })
    }
}

fn average(sum: i64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}

/// @ai:intent Fixed-shape record persisted to the output file
///
/// Field order is the key order of the written JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Unix seconds, encoded as a string
    pub timestamp: String,
    pub sum: i64,
    pub average: f64,
    pub message: String,
}

impl SummaryReport {
    /// @ai:intent Stamp a summary with the given Unix time and message
    /// @ai:effects pure
    pub fn new(summary: &Summary, unix_seconds: i64, message: impl Into<String>) -> Self {
        Self {
            timestamp: unix_seconds.to_string(),
            sum: summary.sum,
            average: summary.average,
            message: message.into(),
        }
    }

    /// @ai:intent Stamp a summary with the current wall-clock time
    /// @ai:effects time
    pub fn now(summary: &Summary, message: impl Into<String>) -> Self {
        Self::new(summary, chrono::Utc::now().timestamp(), message)
    }
}
