// src/load/mod.rs

pub mod convert;

use anyhow::{anyhow, Context, Result};
use arrow::{
    array::{Array, BooleanArray, Float64Array, StringArray, TimestampMillisecondArray},
    compute::{concat_batches, filter_record_batch},
    csv::{reader::Format, ReaderBuilder},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use chrono::{NaiveDateTime, Weekday};
use std::{
    fs::File,
    io::Seek,
    path::Path,
    sync::Arc,
};
use tracing::{debug, info};

use crate::{
    calendar::{day_name, from_millis, month_name},
    config::Config,
    filters::{FilterSelection, Month},
    prompt::Choice,
};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Trip records for one city, in source file order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    batch: RecordBatch,
}

impl TripTable {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    fn column(&self, name: &str) -> Result<&dyn Array> {
        self.batch
            .column_by_name(name)
            .map(|c| c.as_ref())
            .ok_or_else(|| anyhow!("column `{}` not found in trip data", name))
    }

    pub fn string_column(&self, name: &str) -> Result<&StringArray> {
        self.column(name)?
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| anyhow!("column `{}` is not a string column", name))
    }

    pub fn float_column(&self, name: &str) -> Result<&Float64Array> {
        self.column(name)?
            .as_any()
            .downcast_ref::<Float64Array>()
            .ok_or_else(|| anyhow!("column `{}` is not a numeric column", name))
    }

    /// Decoded values of a timestamp column. Nulls are an error.
    pub fn timestamps(&self, name: &str) -> Result<Vec<NaiveDateTime>> {
        let arr = self
            .column(name)?
            .as_any()
            .downcast_ref::<TimestampMillisecondArray>()
            .ok_or_else(|| anyhow!("column `{}` is not a timestamp column", name))?;

        arr.iter()
            .enumerate()
            .map(|(row, ms)| {
                ms.and_then(from_millis)
                    .ok_or_else(|| anyhow!("missing timestamp in `{}` at row {}", name, row))
            })
            .collect()
    }

    pub fn start_times(&self) -> Result<Vec<NaiveDateTime>> {
        self.timestamps(START_TIME)
    }

    /// Rows `[offset, offset + len)`, clamped to the table's end.
    pub fn slice(&self, offset: usize, len: usize) -> TripTable {
        let start = offset.min(self.num_rows());
        let len = len.min(self.num_rows() - start);
        TripTable::new(self.batch.slice(start, len))
    }

    /// Keep the rows whose start time falls in `month` and on `day`.
    /// `None` for either leaves that dimension unfiltered.
    pub fn filter(&self, month: Option<Month>, day: Option<Weekday>) -> Result<TripTable> {
        if month.is_none() && day.is_none() {
            return Ok(self.clone());
        }

        let mask: Vec<bool> = self
            .start_times()?
            .iter()
            .map(|ts| {
                let month_ok = month.map_or(true, |m| month_name(ts).eq_ignore_ascii_case(m.label()));
                let day_ok = day.map_or(true, |d| day_name(ts).eq_ignore_ascii_case(d.label()));
                month_ok && day_ok
            })
            .collect();

        let batch = filter_record_batch(&self.batch, &BooleanArray::from(mask))
            .context("applying month/day filter")?;
        Ok(TripTable::new(batch))
    }
}

fn is_index_column(name: &str) -> bool {
    name.trim().is_empty() || name.starts_with("Unnamed")
}

fn column_type(name: &str) -> DataType {
    match name {
        TRIP_DURATION | BIRTH_YEAR => DataType::Float64,
        _ => DataType::Utf8,
    }
}

/// Read a city CSV into a [`TripTable`]: drops the leftover index column and
/// parses `Start Time`/`End Time` into timestamps.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_city_table<P: AsRef<Path>>(path: P) -> Result<TripTable> {
    let path = path.as_ref();
    let mut file =
        File::open(path).with_context(|| format!("Failed to open trip data {:?}", path))?;

    // header only; column types are fixed below
    let (header, _) = Format::default()
        .with_header(true)
        .infer_schema(&mut file, Some(0))
        .with_context(|| format!("Failed to read CSV header of {:?}", path))?;
    file.rewind()?;

    let fields: Vec<Field> = header
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), column_type(f.name()), true))
        .collect();
    let projection: Vec<usize> = header
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, f)| !is_index_column(f.name()))
        .map(|(i, _)| i)
        .collect();
    debug!(
        columns = fields.len(),
        kept = projection.len(),
        "resolved trip schema"
    );

    let schema = Schema::new(fields);
    let projected = Arc::new(schema.project(&projection)?);
    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_header(true)
        .with_projection(projection)
        .build(file)
        .with_context(|| format!("Failed to build CSV reader for {:?}", path))?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch.with_context(|| format!("CSV parse error in {:?}", path))?);
    }

    let raw = concat_batches(&projected, &batches)?;
    let batch = convert::convert_timestamp_columns(&raw, &[START_TIME, END_TIME])
        .with_context(|| format!("Failed to parse timestamps in {:?}", path))?;

    info!(rows = batch.num_rows(), "loaded trip table");
    Ok(TripTable::new(batch))
}

/// Load the selected city and apply the month/day filters.
#[tracing::instrument(level = "info", skip(config, selection), fields(selection = %selection))]
pub fn load_trips(config: &Config, selection: &FilterSelection) -> Result<TripTable> {
    let table = read_city_table(config.city_path(selection.city))?;
    let filtered = table.filter(selection.month, selection.day)?;
    info!(
        total = table.num_rows(),
        kept = filtered.num_rows(),
        "filtered trips"
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::City,
        fixtures::{init_test_logging, write_cities},
    };
    use tempfile::tempdir;

    #[test]
    fn test_read_drops_index_and_parses_times() -> Result<()> {
        init_test_logging();
        let tmp = tempdir()?;
        let config = write_cities(tmp.path())?;

        let table = read_city_table(config.city_path(City::Chicago))?;
        assert_eq!(table.num_rows(), 7);

        let schema = table.batch().schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(
            names,
            vec![
                START_TIME,
                END_TIME,
                TRIP_DURATION,
                START_STATION,
                END_STATION,
                USER_TYPE,
                GENDER,
                BIRTH_YEAR
            ]
        );

        let starts = table.start_times()?;
        assert_eq!(starts[0].to_string(), "2017-06-05 08:10:00");
        assert_eq!(table.float_column(TRIP_DURATION)?.value(3), 1200.0);
        assert_eq!(table.string_column(START_STATION)?.value(4), "Lake Shore");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp = tempdir().unwrap();
        let config = Config::new(tmp.path());
        let err = load_trips(&config, &FilterSelection::unfiltered(City::NewYorkCity)).unwrap_err();
        assert!(format!("{:#}", err).contains("new_york_city.csv"));
    }

    #[test]
    fn test_month_and_day_filters() -> Result<()> {
        init_test_logging();
        let tmp = tempdir()?;
        let config = write_cities(tmp.path())?;
        let table = read_city_table(config.city_path(City::Chicago))?;

        let june = table.filter(Some(Month::June), None)?;
        assert_eq!(june.num_rows(), 5);
        assert!(june.start_times()?.iter().all(|ts| month_name(ts) == "June"));

        let mondays = table.filter(None, Some(Weekday::Mon))?;
        assert_eq!(mondays.num_rows(), 4);
        assert!(mondays.start_times()?.iter().all(|ts| day_name(ts) == "Monday"));

        let june_mondays = table.filter(Some(Month::June), Some(Weekday::Mon))?;
        let stations: Vec<&str> = june_mondays
            .string_column(END_STATION)?
            .iter()
            .flatten()
            .collect();
        // source order is kept
        assert_eq!(stations, vec!["Clark St", "Clark St", "Lake Shore"]);

        let february = table.filter(Some(Month::February), None)?;
        assert!(february.is_empty());
        Ok(())
    }

    #[test]
    fn test_unfiltered_load_is_stable() -> Result<()> {
        let tmp = tempdir()?;
        let config = write_cities(tmp.path())?;
        let selection = FilterSelection::unfiltered(City::Chicago);

        let first = load_trips(&config, &selection)?;
        let second = load_trips(&config, &selection)?;
        assert_eq!(first, second);
        assert_eq!(first, read_city_table(config.city_path(City::Chicago))?);
        Ok(())
    }

    #[test]
    fn test_washington_without_demographics() -> Result<()> {
        let tmp = tempdir()?;
        let config = write_cities(tmp.path())?;
        let selection = FilterSelection {
            city: City::Washington,
            month: Some(Month::June),
            day: Some(Weekday::Mon),
        };

        let table = load_trips(&config, &selection)?;
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.string_column(START_STATION)?.value(0), "14th & V St NW");
        assert!(table.string_column(GENDER).is_err());
        Ok(())
    }

    #[test]
    fn test_slice_clamps_to_end() -> Result<()> {
        let tmp = tempdir()?;
        let config = write_cities(tmp.path())?;
        let table = read_city_table(config.city_path(City::Chicago))?;

        assert_eq!(table.slice(0, 5).num_rows(), 5);
        assert_eq!(table.slice(5, 5).num_rows(), 2);
        assert_eq!(table.slice(10, 5).num_rows(), 0);
        Ok(())
    }
}
