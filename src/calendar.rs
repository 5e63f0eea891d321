// src/calendar.rs

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse `"YYYY-MM-DD HH:MM:SS"` (optionally with fractional seconds) → millis since epoch.
/// Timestamps carry no zone; they are stored as-is.
pub fn parse_timestamp_millis(s: &str) -> Option<i64> {
    let s = s.trim().trim_matches('"');
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Inverse of [`parse_timestamp_millis`].
pub fn from_millis(ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc())
}

pub fn month_name(ts: &NaiveDateTime) -> &'static str {
    MONTH_NAMES[ts.month0() as usize]
}

pub fn day_name(ts: &NaiveDateTime) -> &'static str {
    weekday_name(ts.weekday())
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn hour(ts: &NaiveDateTime) -> u32 {
    ts.hour()
}
