//! Form-field checks for the request form, independent of any rendering surface.

use chrono::{NaiveDate, NaiveDateTime};

use crate::calendar::WorkingDayCount;
use crate::deadline::check_request_date;
use crate::error::FieldError;
use crate::format::parse_date;

/// Rejects empty or whitespace-only values. Returns the trimmed value.
pub fn validate_required(value: &str) -> Result<&str, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(trimmed)
}

/// Parses an integer and checks it against `min` and an optional `max`.
pub fn validate_number(value: &str, min: i64, max: Option<i64>) -> Result<i64, FieldError> {
    let trimmed = value.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| FieldError::NotANumber(trimmed.to_string()))?;

    if number < min {
        return Err(FieldError::BelowMinimum { value: number, min });
    }
    if let Some(max) = max
        && number > max
    {
        return Err(FieldError::AboveMaximum { value: number, max });
    }
    Ok(number)
}

/// Validates a `YYYY-MM-DD` date input against the lead-time rule.
pub fn validate_request_date(
    value: &str,
    now: NaiveDateTime,
    required: WorkingDayCount,
) -> Result<NaiveDate, FieldError> {
    let value = validate_required(value)?;
    let selected = parse_date(value)?;
    let check = check_request_date(selected, now, required)?;
    Ok(check.into_result()?)
}
