use envdash::Dashboard;

use super::{format_value, resolve_year};

pub fn monthly(dashboard: &Dashboard, year: Option<i32>) -> String {
    let year = resolve_year(dashboard, year);
    let profile = dashboard.monthly_profile(year);
    let range = dashboard.year_range();

    let mut lines = vec![format!(
        "Average temperature (°F) for {} (data covers {}-{})",
        year, range.min, range.max
    )];

    for point in profile.chart_points() {
        lines.push(format!("{:>4} {:>8}", point.label, format_value(point.value)));
    }

    lines.push(format!("Year {:>8}", format_value(profile.avg_temperature_f)));
    lines.join("\n")
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cli::command::fixture;

    #[test]
    fn should_render_twelve_months() {
        let report = monthly(&fixture(), Some(1960));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 14);
        assert!(lines[0].contains("1960"));
        assert_eq!(lines[1], " Jan    26.33");
        assert_eq!(lines[2], " Feb        -");
        assert_eq!(lines[7], " Jul    80.60");
    }

    #[test]
    fn should_render_empty_year_without_failing() {
        let report = monthly(&fixture(), Some(1900));

        assert!(report.lines().skip(1).all(|l| l.ends_with('-')));
    }
}
