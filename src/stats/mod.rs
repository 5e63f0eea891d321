// src/stats/mod.rs

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use anyhow::{anyhow, Context, Result};
use arrow::array::StringArray;
use std::{
    collections::HashMap,
    fmt,
    hash::Hash,
    io::Write,
    time::Instant,
};
use tracing::debug;

use crate::{filters::SEPARATOR, load::TripTable};

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use user::UserStats;

/// Count each distinct value, most frequent first.
/// Equal counts keep the order in which the values were first seen.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for v in values {
        match index.get(&v) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(v.clone(), counts.len());
                counts.push((v, 1));
            }
        }
    }
    // stable sort: ties stay in encounter order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value; ties go to the first one seen.
pub fn mode<K, I>(values: I) -> Option<K>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    value_counts(values).into_iter().next().map(|(k, _)| k)
}

/// Non-null, non-empty cells of a string column.
pub(crate) fn present(arr: &StringArray) -> impl Iterator<Item = &str> {
    arr.iter().flatten().filter(|s| !s.is_empty())
}

pub(crate) fn no_values(column: &str) -> anyhow::Error {
    anyhow!("no values in column `{}` to summarise", column)
}

/// Print `heading`, compute the report, print it with its elapsed time.
fn timed<W, T, F>(out: &mut W, heading: &str, compute: F) -> Result<()>
where
    W: Write,
    T: fmt::Display,
    F: FnOnce() -> Result<T>,
{
    writeln!(out, "\n{}\n", heading)?;
    let start = Instant::now();
    let report = compute().with_context(|| format!("{} failed", heading.trim_end_matches('.')))?;
    write!(out, "{}", report)?;
    let elapsed = start.elapsed();
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", SEPARATOR)?;
    debug!(heading, elapsed = ?elapsed, "report done");
    Ok(())
}

/// Run the four reports in order: times, stations, durations, users.
pub fn report_all<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    timed(out, "Calculating The Most Frequent Times of Travel...", || {
        TimeStats::compute(table)
    })?;
    timed(out, "Calculating The Most Popular Stations and Trip...", || {
        StationStats::compute(table)
    })?;
    timed(out, "Calculating Trip Duration...", || {
        DurationStats::compute(table)
    })?;
    timed(out, "Calculating User Stats...", || UserStats::compute(table))
}
