//! Date-of-birth parsing and the 18-100 age gate.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::types::Date;

use super::field::FieldError;

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 100;

/// Parse `YYYY-MM-DD`, or an RFC 3339 timestamp truncated to its date.
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Age in completed years on `today`. Negative for future birth dates.
pub fn age_on(date_of_birth: Date, today: Date) -> i32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years
}

/// Parse a birth date and require an age between 18 and 100 inclusive.
pub fn check_date_of_birth(raw: &str, today: Date) -> Result<Date, FieldError> {
    let dob = parse_date(raw)
        .ok_or_else(|| FieldError::format("Date of birth must be a valid date (YYYY-MM-DD)"))?;

    let age = age_on(dob, today);
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(FieldError::range(format!(
            "Traveller must be between {MIN_AGE} and {MAX_AGE} years old"
        )));
    }
    Ok(dob)
}
