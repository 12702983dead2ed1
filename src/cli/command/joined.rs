use envdash::{aggregate::MONTH_NAMES, Dashboard};

use super::{format_value, resolve_year};

pub fn joined(dashboard: &Dashboard, year: Option<i32>) -> String {
    let year = resolve_year(dashboard, year);
    let view = dashboard.joined_view(year);

    if !view.joinable {
        return format!(
            "Data not available for {}. Covered years: {}",
            year,
            dashboard
                .coverage_years()
                .iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let mut lines = vec![format!("Temperature (°F) and turbidity (NTU) for {}", year)];

    for (point, name) in view.dual_series.iter().zip(MONTH_NAMES) {
        lines.push(format!(
            "{:>4} {:>8} {:>8}",
            name,
            format_value(point.avg_temperature_f),
            format_value(point.avg_turbidity)
        ));
    }

    lines.push(format!("Same-day samples: {}", view.paired_samples.len()));
    for pair in &view.paired_samples {
        lines.push(format!(
            "{} {:>8.2} {:>8.2}",
            pair.date, pair.temperature_f, pair.turbidity
        ));
    }

    lines.join("\n")
}

// -- Tests -------------------------------------------------------------------
