// src/stats/station.rs

use anyhow::Result;
use std::fmt;

use super::{mode, no_values, present};
use crate::load::{TripTable, END_STATION, START_STATION};

pub const TRIP_SEPARATOR: &str = " --> ";

/// Most popular stations and start/end combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start: String,
    pub end: String,
    pub trip: String,
}

impl StationStats {
    pub fn compute(table: &TripTable) -> Result<Self> {
        let starts = table.string_column(START_STATION)?;
        let ends = table.string_column(END_STATION)?;

        let start = mode(present(starts)).ok_or_else(|| no_values(START_STATION))?;
        let end = mode(present(ends)).ok_or_else(|| no_values(END_STATION))?;

        // a trip only counts when both ends are known
        let trips = starts
            .iter()
            .zip(ends.iter())
            .filter_map(|pair| match pair {
                (Some(s), Some(e)) if !s.is_empty() && !e.is_empty() => {
                    Some(format!("{}{}{}", s, TRIP_SEPARATOR, e))
                }
                _ => None,
            });
        let trip = mode(trips).ok_or_else(|| no_values(START_STATION))?;

        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
            trip,
        })
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most commonly used start station: {}", self.start)?;
        writeln!(f, "Most commonly used end station: {}", self.end)?;
        writeln!(
            f,
            "Most frequent combination of start station and end station: {}",
            self.trip
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::City, fixtures::write_cities, load::read_city_table};
    use tempfile::tempdir;

    #[test]
    fn test_chicago_stations() -> Result<()> {
        let tmp = tempdir()?;
        let config = write_cities(tmp.path())?;
        let table = read_city_table(config.city_path(City::Chicago))?;

        let stats = StationStats::compute(&table)?;
        assert_eq!(stats.start, "Canal St");
        assert_eq!(stats.end, "Clark St");
        assert_eq!(stats.trip, "Canal St --> Clark St");
        Ok(())
    }

    #[test]
    fn test_ties_go_to_first_seen() -> Result<()> {
        let tmp = tempdir()?;
        let config = write_cities(tmp.path())?;
        // every trip in Washington is a distinct pair
        let table = read_city_table(config.city_path(City::Washington))?;

        let stats = StationStats::compute(&table)?;
        assert_eq!(stats.start, "14th & V St NW");
        assert_eq!(stats.end, "Lincoln Memorial");
        assert_eq!(stats.trip, "14th & V St NW --> Lincoln Memorial");
        Ok(())
    }
}
