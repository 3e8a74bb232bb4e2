use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::calendar::{WorkingDayCount, count_working_days, minimum_valid_date, next_day};
use crate::error::{CalendarError, DateRejection};

/// Result of checking a requested date against the lead-time rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineCheck {
    pub selected: NaiveDate,
    /// Working days in [tomorrow, selected).
    pub working_days: u32,
    pub required: u32,
    pub earliest: NaiveDate,
    pub rejection: Option<DateRejection>,
}

impl DeadlineCheck {
    pub fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }

    /// Message shown to the person filling in the request.
    pub fn message(&self) -> String {
        match &self.rejection {
            None => format!(
                "Request accepted - {} working day(s) ahead",
                self.working_days
            ),
            Some(rejection) => rejection.to_string(),
        }
    }

    pub fn into_result(self) -> Result<NaiveDate, DateRejection> {
        match self.rejection {
            None => Ok(self.selected),
            Some(rejection) => Err(rejection),
        }
    }
}

/// Checks `selected` against `now`.
///
/// A date before today is rejected as in the past; otherwise a date before
/// [`minimum_valid_date`] is rejected for insufficient lead time.
pub fn check_request_date(
    selected: NaiveDate,
    now: NaiveDateTime,
    required: WorkingDayCount,
) -> Result<DeadlineCheck, CalendarError> {
    let today = now.date();
    let tomorrow = next_day(today)?;
    let earliest = minimum_valid_date(now, required)?;
    let working_days = count_working_days(tomorrow, selected);

    let rejection = if selected < today {
        Some(DateRejection::InPast)
    } else if selected < earliest {
        Some(DateRejection::InsufficientLeadTime {
            earliest,
            required: required.get(),
            missing: required.get().saturating_sub(working_days),
        })
    } else {
        None
    };

    debug!(%selected, working_days, %earliest, ?rejection, "checked request date");

    Ok(DeadlineCheck {
        selected,
        working_days,
        required: required.get(),
        earliest,
        rejection,
    })
}
