// src/stats/duration.rs

use anyhow::Result;
use arrow::{array::Array, compute::sum};
use std::fmt;

use crate::load::{TripTable, TRIP_DURATION};

/// Total and mean trip duration in seconds.
/// The mean of an empty table is NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: f64,
}

impl DurationStats {
    pub fn compute(table: &TripTable) -> Result<Self> {
        let durations = table.float_column(TRIP_DURATION)?;
        let total = sum(durations).unwrap_or(0.0);
        let count = durations.len() - durations.null_count();
        Ok(Self {
            total,
            mean: total / count as f64,
        })
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total travel time: {}", self.total)?;
        writeln!(f, "Mean travel time: {}", self.mean)
    }
}
