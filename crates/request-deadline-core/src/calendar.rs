use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalendarError;

/// Lead time applied to new and modified material requests.
pub const REQUIRED_WORKING_DAYS: WorkingDayCount = WorkingDayCount(2);

/// Minimum number of working days that must separate tomorrow from a requested date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkingDayCount(u32);

impl WorkingDayCount {
    pub const fn new(days: u32) -> Self {
        Self(days)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for WorkingDayCount {
    fn default() -> Self {
        REQUIRED_WORKING_DAYS
    }
}

impl From<u32> for WorkingDayCount {
    fn from(days: u32) -> Self {
        Self(days)
    }
}

impl TryFrom<i64> for WorkingDayCount {
    type Error = CalendarError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        if days < 0 {
            return Err(CalendarError::NegativeWorkingDays(days));
        }
        u32::try_from(days)
            .map(Self)
            .map_err(|_| CalendarError::TooManyWorkingDays(days))
    }
}

/// Monday through Friday. Public holidays are not taken into account.
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Lists the working days in the half-open range [start, end).
pub fn working_days_in(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|day| *day < end)
        .filter(|day| is_working_day(*day))
        .collect()
}

/// Counts working days in the half-open range [start, end).
pub fn count_working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|day| *day < end)
        .filter(|day| is_working_day(*day))
        .count() as u32
}

pub(crate) fn next_day(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    date.succ_opt().ok_or(CalendarError::OutOfRange(date))
}

/// Earliest date that can be requested at `now`.
///
/// Starting from tomorrow, the candidate moves forward one day at a time until the
/// working days in [tomorrow, candidate) reach `required`. The time of day of `now`
/// is ignored. With `required == 0` the answer is tomorrow.
///
/// The count is carried forward as the window grows, so the walk is linear in the
/// distance to the result.
pub fn minimum_valid_date(
    now: NaiveDateTime,
    required: WorkingDayCount,
) -> Result<NaiveDate, CalendarError> {
    let tomorrow = next_day(now.date())?;
    let mut candidate = tomorrow;
    let mut working_days = 0;

    loop {
        if working_days >= required.get() {
            debug!(
                %now,
                required = required.get(),
                %candidate,
                "minimum valid date found"
            );
            return Ok(candidate);
        }
        if is_working_day(candidate) {
            working_days += 1;
        }
        candidate = next_day(candidate)?;
    }
}
