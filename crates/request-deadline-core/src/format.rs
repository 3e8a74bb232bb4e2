//! Display formatting for dates shown to users.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::FieldError;

pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DISPLAY_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// `2025-10-09` -> `09/10/2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// `2025-10-09T08:05:00` -> `09/10/2025 08:05`
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(DISPLAY_DATETIME_FORMAT).to_string()
}

/// Parses a date input value in `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT)
        .map_err(|_| FieldError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn format_date_pads_day_and_month() {
        assert_eq!(format_date(date(2025, 1, 5)), "05/01/2025");
        assert_eq!(format_date(date(2025, 12, 31)), "31/12/2025");
    }

    #[test]
    fn format_datetime_uses_24_hour_clock() {
        let dt = date(2025, 10, 9).and_hms_opt(8, 5, 42).unwrap();
        assert_eq!(format_datetime(dt), "09/10/2025 08:05");
        let dt = date(2025, 10, 9).and_hms_opt(18, 30, 0).unwrap();
        assert_eq!(format_datetime(dt), "09/10/2025 18:30");
    }

    #[test]
    fn parse_date_accepts_iso() {
        assert_eq!(parse_date("2025-10-09").unwrap(), date(2025, 10, 9));
        assert_eq!(parse_date(" 2025-10-09 ").unwrap(), date(2025, 10, 9));
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert_eq!(
            parse_date("09/10/2025"),
            Err(FieldError::InvalidDate("09/10/2025".to_string()))
        );
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("").is_err());
    }
}
