use envdash::Dashboard;

pub fn yearly(dashboard: &Dashboard) -> String {
    let mut lines = vec!["Yearly average temperature (°F)".to_string()];

    for year in dashboard.yearly_series() {
        lines.push(format!("{} {:>8.2}", year.year, year.avg_temperature_f));
    }

    match dashboard.first_threshold_year() {
        Some(warm) => lines.push(format!(
            "The first year where the average temperature exceeded the threshold was {} ({:.2}°F).",
            warm.year, warm.avg_temperature_f
        )),
        None => lines.push("No year exceeded the threshold.".to_string()),
    }

    lines.join("\n")
}

// -- Tests -------------------------------------------------------------------
