//! Calendar date parsing for the formats seen in the source files.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses a date or timestamp string into the calendar date it names.
///
/// Timestamps keep their written date; no timezone conversion is applied.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
                .map(|dt| dt.date())
        })
}

/// Parses a water-quality `MM/DD/YYYY` sample date.
///
/// Each slash-separated part contributes its leading digits, so a trailing
/// time of day after the year is ignored. Strings that do not split into
/// exactly three parts fall back to [`parse_calendar_date`]. A month or day
/// outside the calendar is rejected, not rolled into the next month or year.
pub fn parse_sample_date(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.trim().split('/').collect();

    if parts.len() != 3 {
        return parse_calendar_date(s);
    }

    let month = leading_int(parts[0])?;
    let day = leading_int(parts[1])?;
    let year = leading_int(parts[2])?;

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn leading_int(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

// -- Tests -------------------------------------------------------------------
