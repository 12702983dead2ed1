//! Daily temperature samples from the weather source.

use chrono::{Datelike, NaiveDate};

use super::{date::parse_calendar_date, Reading, Record};
use crate::aggregate::round2;

pub const TIME_COLUMN: &str = "time";
pub const KELVIN_COLUMN: &str = "Ktemp";

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSample {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    /// Raw reading in Kelvin, as found in the `Ktemp` column.
    pub kelvin: f64,
    pub temperature_f: f64,
}

impl WeatherSample {
    pub fn new(date: NaiveDate, kelvin: f64) -> Self {
        WeatherSample {
            date,
            year: date.year(),
            month: date.month(),
            kelvin,
            temperature_f: kelvin_to_fahrenheit(kelvin),
        }
    }
}

impl Reading for WeatherSample {
    fn from_record(record: &Record) -> Option<Self> {
        let kelvin = record.number(KELVIN_COLUMN)?;
        let date = parse_calendar_date(&record.text(TIME_COLUMN)?)?;

        Some(WeatherSample::new(date, kelvin))
    }
}

/// Converts Kelvin to Fahrenheit, rounded to two decimal places.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    round2((kelvin - 273.15) * (9.0 / 5.0) + 32.0)
}

// -- Tests -------------------------------------------------------------------
