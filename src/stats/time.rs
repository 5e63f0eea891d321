// src/stats/time.rs

use anyhow::Result;
use std::fmt;

use super::{mode, no_values};
use crate::{
    calendar::{day_name, hour, month_name},
    load::{TripTable, START_TIME},
};

/// Most frequent travel times, derived from each trip's start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: &'static str,
    pub day: &'static str,
    pub hour: u32,
}

impl TimeStats {
    pub fn compute(table: &TripTable) -> Result<Self> {
        let starts = table.start_times()?;
        Ok(Self {
            month: mode(starts.iter().map(month_name)).ok_or_else(|| no_values(START_TIME))?,
            day: mode(starts.iter().map(day_name)).ok_or_else(|| no_values(START_TIME))?,
            hour: mode(starts.iter().map(hour)).ok_or_else(|| no_values(START_TIME))?,
        })
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most common month: {}", self.month)?;
        writeln!(f, "Most common day: {}", self.day)?;
        writeln!(f, "Most common hour: {}", self.hour)
    }
}
