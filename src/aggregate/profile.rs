use super::{mean, round2, MonthlyTemperatureAggregate};

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Twelve-month temperature summary of one calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearProfile {
    pub year: i32,
    /// Mean of the monthly means; `None` when the year has no data.
    pub avg_temperature_f: Option<f64>,
    monthly: [Option<f64>; 12],
}

/// One labelled bar of a monthly chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: Option<f64>,
}

impl YearProfile {
    pub fn empty(year: i32) -> Self {
        YearProfile {
            year,
            avg_temperature_f: None,
            monthly: [None; 12],
        }
    }

    /// Average for a month numbered 1 to 12.
    pub fn month(&self, month: u32) -> Option<f64> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        self.monthly.get(idx).copied().flatten()
    }

    /// Average for a month given by short name, e.g. `"Jan"`.
    pub fn month_by_name(&self, name: &str) -> Option<f64> {
        let idx = MONTH_NAMES
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name))?;
        self.monthly[idx]
    }

    pub fn months(&self) -> &[Option<f64>; 12] {
        &self.monthly
    }

    pub fn is_empty(&self) -> bool {
        self.monthly.iter().all(Option::is_none)
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        MONTH_NAMES
            .iter()
            .zip(self.monthly.iter())
            .map(|(label, value)| ChartPoint {
                label: *label,
                value: *value,
            })
            .collect()
    }
}

/// Builds the profile of `year` from monthly aggregates of any years.
pub fn build_year_profile(year: i32, monthly: &[MonthlyTemperatureAggregate]) -> YearProfile {
    let mut profile = YearProfile::empty(year);

    for aggregate in monthly.iter().filter(|a| a.year == year) {
        if let Some(slot) = aggregate
            .month
            .checked_sub(1)
            .and_then(|i| profile.monthly.get_mut(i as usize))
        {
            *slot = Some(aggregate.avg_temperature_f);
        }
    }

    profile.avg_temperature_f = mean(profile.monthly.iter().flatten().copied()).map(round2);
    profile
}

// -- Tests -------------------------------------------------------------------
