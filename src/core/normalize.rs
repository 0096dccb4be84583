//! Cell-level normalization: blank/NaN detection, trimming, stringification
//! and best-effort date parsing. Unparseable values degrade to empty/None,
//! they never fail a row.

use chrono::{NaiveDate, NaiveDateTime};

/// Candidate date formats, tried in priority order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d/%m/%y"];

/// Format carried by spreadsheet exports that stamp a time component.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Cleans one raw cell: missing/NaN become empty, strings are trimmed,
/// numbers and bools are stringified. Integral floats lose the trailing `.0`
/// that spreadsheet exports tack onto numeric columns.
pub fn clean_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            // pandas-era exports serialize missing cells as the literal "nan"
            if trimmed.eq_ignore_ascii_case("nan") {
                String::new()
            } else {
                trimmed.to_string()
            }
        }
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                    (f as i64).to_string()
                } else {
                    f.to_string()
                }
            } else {
                n.to_string()
            }
        }
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Tries each candidate format in order and returns the first successful
/// parse. All failures collapse to None; a bad date is absence, not an error.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    // Timestamped exports: keep the date component only.
    NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT)
        .map(|dt| dt.date())
        .ok()
}
