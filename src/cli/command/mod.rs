pub mod joined;
pub mod monthly;
pub mod yearly;

use envdash::Dashboard;

pub use joined::joined;
pub use monthly::monthly;
pub use yearly::yearly;

pub fn coverage(dashboard: &Dashboard) -> String {
    let years: Vec<String> = dashboard
        .coverage_years()
        .iter()
        .map(|y| y.to_string())
        .collect();

    format!("Years with temperature and turbidity coverage: {}", years.join(", "))
}

/// Formats an optional value for a table cell.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

/// Picks the requested year, or the dashboard's default one.
pub fn resolve_year(dashboard: &Dashboard, year: Option<i32>) -> i32 {
    year.unwrap_or_else(|| dashboard.default_year())
}

#[cfg(test)]
pub(crate) fn fixture() -> Dashboard {
    let weather = "time,Ktemp\n\
        1960-01-10,270.0\n\
        1960-07-04,300.15\n\
        1961-07-04,290.0\n";
    let water = "Sample Date,Turbidity (NTU)\n\
        01/10/1960,0.80\n\
        07/04/1960,<0.10\n";

    Dashboard::from_texts(weather, water, &envdash::DashboardConfig::default()).unwrap()
}

// -- Tests -------------------------------------------------------------------
