// src/filters.rs

use anyhow::Result;
use chrono::Weekday;
use std::{
    fmt,
    io::{BufRead, Write},
};
use tracing::info;

use crate::{
    calendar::weekday_name,
    config::City,
    prompt::{Choice, Prompter},
};

pub const SEPARATOR: &str = "----------------------------------------";

/// Months covered by the trip data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Choice for Month {
    fn all() -> &'static [Self] {
        &[
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

impl Choice for Weekday {
    fn all() -> &'static [Self] {
        &[
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
    }

    fn label(&self) -> &'static str {
        weekday_name(*self)
    }
}

/// One session iteration's city plus optional month/day constraints.
/// `None` means "no filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSelection {
    pub fn unfiltered(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (month: {}, day: {})",
            self.city,
            self.month.map_or("all", |m| m.label()),
            self.day.map_or("all", |d| d.label())
        )
    }
}

/// Ask for city, then optionally a month and a day of week.
pub fn collect_filters<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<FilterSelection> {
    writeln!(prompter.output(), "Hello! Let's explore some US bikeshare data!")?;

    let city: City = prompter.choose(
        "Choose one of these cities (Chicago, New York City, Washington): ",
        "Please make sure to choose one of these cities (Chicago, New York City, Washington)\n\
         (Don't use any non-alphabetical characters except whitespace.).",
    )?;

    let month = if prompter.yes_no(
        "Do you want to filter the results to a specific month? (Enter 'yes'(or 'y') or 'no'(or 'n')): ",
    )? {
        Some(prompter.choose::<Month>(
            "Choose a month: ",
            "Please make sure to enter a month name, and that it's without typos.",
        )?)
    } else {
        None
    };

    let day = if prompter.yes_no(
        "Do you want to filter the results to a specific day? (Enter 'yes'(or 'y') or 'no'(or 'n')): ",
    )? {
        Some(prompter.choose::<Weekday>(
            "Choose a day: ",
            "Please make sure to enter a day name, and that it's without typos.",
        )?)
    } else {
        None
    };

    writeln!(prompter.output(), "{}", SEPARATOR)?;

    let selection = FilterSelection { city, month, day };
    info!(%selection, "filters collected");
    Ok(selection)
}
