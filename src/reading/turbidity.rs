//! Turbidity samples from the drinking water quality source.

use chrono::{Datelike, NaiveDate};

use super::{date::parse_sample_date, Reading, Record};

pub const SAMPLE_DATE_COLUMN: &str = "Sample Date";
pub const TURBIDITY_COLUMN: &str = "Turbidity (NTU)";

#[derive(Debug, Clone, PartialEq)]
pub struct TurbiditySample {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub turbidity: f64,
}

impl TurbiditySample {
    pub fn new(date: NaiveDate, turbidity: f64) -> Self {
        TurbiditySample {
            date,
            year: date.year(),
            month: date.month(),
            turbidity,
        }
    }
}

impl Reading for TurbiditySample {
    fn from_record(record: &Record) -> Option<Self> {
        let date = parse_sample_date(&record.text(SAMPLE_DATE_COLUMN)?)?;
        let turbidity = parse_turbidity(&record.text(TURBIDITY_COLUMN)?)?;

        Some(TurbiditySample::new(date, turbidity))
    }
}

/// Reads a turbidity value such as `"<0.10 NTU"`.
///
/// Everything other than digits and `.` is discarded, then the longest
/// leading decimal number is taken.
pub fn parse_turbidity(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut seen_dot = false;
    let end = cleaned
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' {
                if seen_dot {
                    return true;
                }
                seen_dot = true;
            }
            false
        })
        .map_or(cleaned.len(), |(i, _)| i);

    let number = &cleaned[..end];
    if !number.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    number.parse().ok()
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;
    use crate::reading::record::RawValue;

    fn record(date: &str, turbidity: RawValue) -> Record {
        vec![
            (SAMPLE_DATE_COLUMN, RawValue::Text(date.to_string())),
            (TURBIDITY_COLUMN, turbidity),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn should_strip_qualifiers_from_turbidity() {
        assert_eq!(parse_turbidity("<0.10 NTU"), Some(0.1));
        assert_eq!(parse_turbidity("0.68"), Some(0.68));
        assert_eq!(parse_turbidity(">5"), Some(5.0));
        assert_eq!(parse_turbidity("1.2 est."), Some(1.2));
    }

    #[test]
    fn should_take_leading_number_from_cleaned_text() {
        assert_eq!(parse_turbidity("0.1.2"), Some(0.1));
        assert_eq!(parse_turbidity(".5"), Some(0.5));
    }

    #[test]
    fn should_treat_empty_or_non_numeric_as_absent() {
        assert_eq!(parse_turbidity(""), None);
        assert_eq!(parse_turbidity("ND"), None);
        assert_eq!(parse_turbidity("n.a."), None);
    }

    #[test]
    fn should_build_sample_from_record() {
        let sample =
            TurbiditySample::from_record(&record("06/15/2020", RawValue::Text("<0.10".into())))
                .unwrap();

        assert_eq!(sample.date, NaiveDate::from_ymd_opt(2020, 6, 15).unwrap());
        assert_eq!(sample.year, 2020);
        assert_eq!(sample.month, 6);
        assert_eq!(sample.turbidity, 0.1);
    }

    #[test]
    fn should_accept_numeric_turbidity_cell() {
        let sample =
            TurbiditySample::from_record(&record("06/15/2020", RawValue::Number(0.85))).unwrap();

        assert_eq!(sample.turbidity, 0.85);
    }

    #[test]
    fn should_reject_invalid_rows() {
        let bad_date = record("99/99/2020", RawValue::Number(0.85));
        assert!(TurbiditySample::from_record(&bad_date).is_none());

        let bad_value = record("06/15/2020", RawValue::Text("ND".into()));
        assert!(TurbiditySample::from_record(&bad_value).is_none());

        let missing: Record = vec![(SAMPLE_DATE_COLUMN, RawValue::Text("06/15/2020".into()))]
            .into_iter()
            .collect();
        assert!(TurbiditySample::from_record(&missing).is_none());
    }
}
