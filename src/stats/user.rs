// src/stats/user.rs

use anyhow::Result;
use arrow::compute::{max, min};
use std::fmt;

use super::{mode, no_values, present, value_counts};
use crate::load::{TripTable, BIRTH_YEAR, GENDER, USER_TYPE};

/// Earliest, most recent and most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider demographics. Fails when the city has no `Gender` or `Birth Year` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Vec<(String, usize)>,
    pub birth_years: BirthYears,
}

fn owned_counts(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(label, n)| (label.to_string(), n))
        .collect()
}

impl UserStats {
    pub fn compute(table: &TripTable) -> Result<Self> {
        let user_types = value_counts(present(table.string_column(USER_TYPE)?));
        let genders = value_counts(present(table.string_column(GENDER)?));

        let years = table.float_column(BIRTH_YEAR)?;
        let earliest = min(years).ok_or_else(|| no_values(BIRTH_YEAR))?;
        let most_recent = max(years).ok_or_else(|| no_values(BIRTH_YEAR))?;
        let most_common = mode(years.iter().flatten().map(|y| y.round() as i32))
            .ok_or_else(|| no_values(BIRTH_YEAR))?;

        Ok(Self {
            user_types: owned_counts(user_types),
            genders: owned_counts(genders),
            birth_years: BirthYears {
                earliest: earliest.round() as i32,
                most_recent: most_recent.round() as i32,
                most_common,
            },
        })
    }
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User types and their counts:")?;
        for (user_type, count) in &self.user_types {
            writeln!(f, "\t{} : {}", user_type, count)?;
        }

        writeln!(f, "\nUser's genders and their counts:")?;
        for (gender, count) in &self.genders {
            writeln!(f, "\t{} : {}", gender, count)?;
        }

        writeln!(f, "\nEarliest, most recent, and most common year of birth:")?;
        writeln!(f, "\tEarliest year of birth: {}", self.birth_years.earliest)?;
        writeln!(f, "\tMost recent year of birth: {}", self.birth_years.most_recent)?;
        writeln!(f, "\tMost common year of birth: {}", self.birth_years.most_common)
    }
}
