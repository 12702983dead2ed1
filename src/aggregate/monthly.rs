use std::collections::BTreeMap;

use super::{mean, round2};
use crate::reading::WeatherSample;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTemperatureAggregate {
    pub year: i32,
    pub month: u32,
    pub avg_temperature_f: f64,
}

/// Averages samples per (year, month). The result is ordered by year, then month.
pub fn compute_monthly_aggregates(samples: &[WeatherSample]) -> Vec<MonthlyTemperatureAggregate> {
    let mut buckets: BTreeMap<(i32, u32), Vec<f64>> = BTreeMap::new();

    for sample in samples {
        buckets
            .entry((sample.year, sample.month))
            .or_default()
            .push(sample.temperature_f);
    }

    buckets
        .into_iter()
        .filter_map(|((year, month), temps)| {
            mean(temps).map(|avg| MonthlyTemperatureAggregate {
                year,
                month,
                avg_temperature_f: round2(avg),
            })
        })
        .collect()
}

// -- Tests -------------------------------------------------------------------
