use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::calendar::{is_working_day, next_day};
use crate::error::CalendarError;

/// Business hours run from 08:00 to 18:00 on working days.
pub const WORKDAY_START_HOUR: i64 = 8;
pub const WORKDAY_END_HOUR: i64 = 18;

fn at_hour(date: NaiveDate, hour: i64) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::hours(hour)
}

fn next_opening(date: NaiveDate) -> Result<NaiveDateTime, CalendarError> {
    Ok(at_hour(next_day(date)?, WORKDAY_START_HOUR))
}

/// Adds `hours` of business time to `start`.
///
/// Only time inside business hours is consumed; evenings, nights and weekends are
/// skipped. A result landing exactly on closing time stays on that day.
pub fn add_working_hours(start: NaiveDateTime, hours: u32) -> Result<NaiveDateTime, CalendarError> {
    let mut current = start;
    let mut remaining = Duration::hours(i64::from(hours));

    while remaining > Duration::zero() {
        let day = current.date();
        if !is_working_day(day) {
            current = next_opening(day)?;
            continue;
        }

        let open = at_hour(day, WORKDAY_START_HOUR);
        let close = at_hour(day, WORKDAY_END_HOUR);
        if current < open {
            current = open;
        }
        if current >= close {
            current = next_opening(day)?;
            continue;
        }

        let left_today = close - current;
        if remaining <= left_today {
            current += remaining;
            remaining = Duration::zero();
        } else {
            remaining -= left_today;
            current = next_opening(day)?;
        }
    }

    Ok(current)
}
