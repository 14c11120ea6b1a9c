//! Experience tenure in years
//!
//! Tenure is always non-negative and rounded to one decimal place, whether it
//! comes from a pair of timestamps or from a textual duration.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Average length of a year, leap years included
pub const DAYS_PER_YEAR: f64 = 365.25;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Rounds to one decimal place
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Tenure between two dates; a reversed range counts as zero
///
/// ```
/// use chrono::NaiveDate;
/// use resume_harvest::normalize::tenure_between;
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
/// assert_eq!(tenure_between(start, end), 2.5);
/// ```
pub fn tenure_between(start: NaiveDate, end: NaiveDate) -> f64 {
    let days = (end - start).num_days().max(0);
    round_tenth(days as f64 / DAYS_PER_YEAR)
}

/// Parses an ISO-8601 timestamp or plain date into its calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parses a textual duration such as `2 роки 3 місяці` or `7 months`
///
/// Units are recognized by their first letter (`р`/`y` for years, `м`/`m`
/// for months). A duration without any number ("менше місяця") is counted
/// as one month. Returns `None` for empty input or an unknown unit.
pub fn parse_duration_text(text: &str) -> Option<f64> {
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')' || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return None;
    }

    let mut years = 0.0;
    let mut months = 0.0;
    let mut saw_number = false;
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        let Ok(amount) = token.parse::<u32>() else {
            continue;
        };
        saw_number = true;

        let unit = iter.next()?.to_lowercase();
        match unit.chars().next()? {
            'р' | 'y' => years += f64::from(amount),
            'м' | 'm' => months += f64::from(amount),
            _ => return None,
        }
    }

    if !saw_number {
        months = 1.0;
    }

    Some(round_tenth(years + months / MONTHS_PER_YEAR))
}
