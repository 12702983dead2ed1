//! Time-bucket aggregation of temperature samples.
//!
//! Monthly means are computed from samples; yearly means are computed from the
//! (rounded) monthly means, not from the samples directly.

pub mod monthly;
pub mod profile;
pub mod yearly;

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

pub use monthly::{compute_monthly_aggregates, MonthlyTemperatureAggregate};
pub use profile::{build_year_profile, ChartPoint, YearProfile, MONTH_NAMES};
pub use yearly::{
    compute_yearly_aggregates, find_first_threshold_year, YearlyTemperatureAggregate,
};

/// Rounds to two decimal places using the exact binary value of `value`.
///
/// Exact midpoints round away from zero.
pub fn round2(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or_else(|| (value * 100.0).round() / 100.0)
}

/// Arithmetic mean, or `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

// -- Tests -------------------------------------------------------------------
