// src/fixtures.rs
//! Small city tables shared by the unit tests.

use anyhow::Result;
use std::{fs, path::Path};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{City, Config};

/// Seven Chicago trips in 2017:
/// 06-05 (Mon) x2, 06-06 (Tue), 06-12 (Mon), 06-23 (Fri), 01-02 (Mon), 03-04 (Sat).
pub const CHICAGO_CSV: &str = r#",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
100,2017-06-05 08:10:00,2017-06-05 08:20:00,600,Canal St,Clark St,Subscriber,Male,1990.0
101,2017-06-05 17:05:00,2017-06-05 17:15:00,600,Canal St,Clark St,Subscriber,Female,1985.0
102,2017-06-06 08:30:00,2017-06-06 08:35:00,300,Clark St,Canal St,Customer,,
103,2017-06-12 08:45:00,2017-06-12 09:05:00,1200,Canal St,Lake Shore,Subscriber,Male,1990.0
104,2017-06-23 17:00:00,2017-06-23 17:15:00,900,Lake Shore,Clark St,Customer,Female,1972.0
105,2017-01-02 09:00:00,2017-01-02 09:07:30,450,Lake Shore,Canal St,Subscriber,Male,1990.0
106,2017-03-04 13:00:00,2017-03-04 13:02:30,150,Clark St,Lake Shore,Subscriber,Male,2001.0
"#;

/// Washington ships without Gender and Birth Year.
pub const WASHINGTON_CSV: &str = r#",Start Time,End Time,Trip Duration,Start Station,End Station,User Type
7,2017-06-05 07:00:00,2017-06-05 07:10:12.500,612.5,"14th & V St NW","Lincoln Memorial",Subscriber
8,2017-06-05 07:30:00,2017-06-05 07:40:00,600.0,"Lincoln Memorial","14th & V St NW",Customer
9,2017-06-06 18:00:00,2017-06-06 18:20:00,1200.0,"14th & V St NW","Union Station",Subscriber
10,2017-05-01 12:00:00,2017-05-01 12:05:00,300.0,"Union Station","Lincoln Memorial",Subscriber
"#;

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bikeshare=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Write the fixture tables into `dir` and return a config pointing at it.
pub fn write_cities(dir: &Path) -> Result<Config> {
    let config = Config::new(dir);
    fs::write(config.city_path(City::Chicago), CHICAGO_CSV)?;
    fs::write(config.city_path(City::Washington), WASHINGTON_CSV)?;
    Ok(config)
}
