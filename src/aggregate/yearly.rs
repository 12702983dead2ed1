use std::collections::BTreeMap;

use super::{mean, round2, MonthlyTemperatureAggregate};

#[derive(Debug, Clone, PartialEq)]
pub struct YearlyTemperatureAggregate {
    pub year: i32,
    pub avg_temperature_f: f64,
}

/// Averages the monthly means of each year, ascending by year.
///
/// Every month with data weighs the same regardless of how many samples it
/// was built from.
pub fn compute_yearly_aggregates(
    monthly: &[MonthlyTemperatureAggregate],
) -> Vec<YearlyTemperatureAggregate> {
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();

    for aggregate in monthly {
        by_year
            .entry(aggregate.year)
            .or_default()
            .push(aggregate.avg_temperature_f);
    }

    by_year
        .into_iter()
        .filter_map(|(year, means)| {
            mean(means).map(|avg| YearlyTemperatureAggregate {
                year,
                avg_temperature_f: round2(avg),
            })
        })
        .collect()
}

/// Returns the earliest year whose average is strictly above `threshold`.
pub fn find_first_threshold_year(
    yearly: &[YearlyTemperatureAggregate],
    threshold: f64,
) -> Option<YearlyTemperatureAggregate> {
    let mut ordered: Vec<&YearlyTemperatureAggregate> = yearly.iter().collect();
    ordered.sort_by_key(|y| y.year);

    ordered
        .into_iter()
        .find(|y| y.avg_temperature_f > threshold)
        .cloned()
}

// -- Tests -------------------------------------------------------------------
