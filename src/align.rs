//! Joins the temperature and turbidity datasets for one covered year.
//!
//! Two views are produced. The dual monthly series averages each dataset over
//! its own samples for a month. Temperature means are rounded to two places,
//! turbidity means are kept as computed. The paired samples match weather days to
//! turbidity samples taken on the same calendar date.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    aggregate::{mean, round2},
    config::CoverageRegistry,
    reading::{TurbiditySample, WeatherSample},
};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyDualPoint {
    pub month: u32,
    pub avg_temperature_f: Option<f64>,
    pub avg_turbidity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairedSample {
    pub date: NaiveDate,
    pub temperature_f: f64,
    pub turbidity: f64,
}

/// Builds joined views over borrowed sample collections.
#[derive(Debug, Clone, Copy)]
pub struct Aligner<'a> {
    coverage: &'a CoverageRegistry,
    weather: &'a [WeatherSample],
    turbidity: &'a [TurbiditySample],
}

impl<'a> Aligner<'a> {
    pub fn new(
        coverage: &'a CoverageRegistry,
        weather: &'a [WeatherSample],
        turbidity: &'a [TurbiditySample],
    ) -> Self {
        Aligner {
            coverage,
            weather,
            turbidity,
        }
    }

    pub fn is_year_joinable(&self, year: i32) -> bool {
        self.coverage.contains(year)
    }

    /// Monthly means of both datasets for `year`, or `None` if the year is
    /// not covered.
    pub fn build_dual_monthly_series(&self, year: i32) -> Option<Vec<MonthlyDualPoint>> {
        if !self.is_year_joinable(year) {
            return None;
        }

        let series = (1..=12)
            .map(|month| {
                let temps = self
                    .weather
                    .iter()
                    .filter(|s| s.year == year && s.month == month)
                    .map(|s| s.temperature_f);
                let turbidity = self
                    .turbidity
                    .iter()
                    .filter(|s| s.year == year && s.month == month)
                    .map(|s| s.turbidity);

                MonthlyDualPoint {
                    month,
                    avg_temperature_f: mean(temps).map(round2),
                    avg_turbidity: mean(turbidity),
                }
            })
            .collect();

        Some(series)
    }

    /// Weather days of `year` paired with a turbidity sample from the same
    /// date, in weather order. `None` if the year is not covered.
    ///
    /// When several turbidity samples share a date the first one wins.
    pub fn build_paired_samples(&self, year: i32) -> Option<Vec<PairedSample>> {
        if !self.is_year_joinable(year) {
            return None;
        }

        let mut by_date: HashMap<NaiveDate, f64> = HashMap::new();
        for sample in self.turbidity.iter().filter(|s| s.year == year) {
            by_date.entry(sample.date).or_insert(sample.turbidity);
        }

        let pairs = self
            .weather
            .iter()
            .filter(|s| s.year == year)
            .filter_map(|s| {
                by_date.get(&s.date).map(|&turbidity| PairedSample {
                    date: s.date,
                    temperature_f: s.temperature_f,
                    turbidity,
                })
            })
            .collect();

        Some(pairs)
    }
}

// -- Tests -------------------------------------------------------------------
