//! Loosely typed rows read from delimited text with a header row.

use std::collections::HashMap;

use csv::{ReaderBuilder, StringRecord};

/// A single cell value, typed the way a spreadsheet would guess it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    fn from_cell(cell: &str) -> Option<Self> {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return None;
        }

        match parse_number(trimmed) {
            Some(v) => Some(RawValue::Number(v)),
            None => Some(RawValue::Text(cell.to_string())),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(v) => Some(*v),
            RawValue::Text(_) => None,
        }
    }

    /// Text form of the value. Numbers render without a trailing `.0`.
    pub fn as_text(&self) -> String {
        match self {
            RawValue::Number(v) => v.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }
}

/// One data row keyed by header name. Empty cells are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, RawValue>,
}

impl Record {
    fn from_row(headers: &StringRecord, row: &StringRecord) -> Self {
        let fields = headers
            .iter()
            .zip(row.iter())
            .filter_map(|(name, cell)| RawValue::from_cell(cell).map(|v| (name.to_string(), v)))
            .collect();

        Record { fields }
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.fields.get(key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(RawValue::as_number)
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(RawValue::as_text)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, RawValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Parses delimited text into records.
///
/// An unreadable header gives an empty result. Rows that fail to decode, and
/// rows with no non-blank cell, are skipped.
pub fn parse_records(text: &str) -> Vec<Record> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) if !headers.is_empty() => headers.clone(),
        _ => return Vec::new(),
    };

    reader
        .records()
        .filter_map(|row| row.ok())
        .map(|row| Record::from_row(&headers, &row))
        .filter(|record| !record.is_empty())
        .collect()
}

// Accepts plain decimal notation only, so values like "NaN" or "inf" stay text.
fn parse_number(s: &str) -> Option<f64> {
    let body = s.strip_prefix('-').unwrap_or(s);
    let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let mut parts = mantissa.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next().unwrap_or("");
    let digits_only = |p: &str| p.chars().all(|c| c.is_ascii_digit());

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !digits_only(whole) || !digits_only(fraction) {
        return None;
    }
    if let Some(exp) = exponent {
        let exp = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
        if exp.is_empty() || !digits_only(exp) {
            return None;
        }
    }

    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

// -- Tests -------------------------------------------------------------------
