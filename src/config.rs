// src/config.rs

use std::{fmt, path::PathBuf};

use crate::prompt::Choice;

/// Rows revealed per page by the raw data pager.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// The three cities with a backing trip file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// File name of the city's trip table inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl Choice for City {
    fn all() -> &'static [Self] {
        &[City::Chicago, City::NewYorkCity, City::Washington]
    }

    fn label(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the per-city CSV files.
    pub data_dir: PathBuf,
    pub page_size: usize,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn city_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}
