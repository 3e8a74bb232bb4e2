use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Working day count must not be negative, got {0}")]
    NegativeWorkingDays(i64),

    #[error("Working day count {0} exceeds the supported maximum")]
    TooManyWorkingDays(i64),

    #[error("Date out of range after {0}")]
    OutOfRange(NaiveDate),
}

/// Why a selected request date was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DateRejection {
    #[error("Date cannot be in the past")]
    InPast,

    #[error(
        "Insufficient lead time, {missing} working day(s) missing. Earliest possible date: {} ({required} working days minimum)",
        .earliest.format("%d/%m/%Y")
    )]
    InsufficientLeadTime {
        earliest: NaiveDate,
        required: u32,
        missing: u32,
    },
}

/// Errors raised by form-field validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Field is required")]
    Required,

    #[error("Not a number: {0}")]
    NotANumber(String),

    #[error("Value {value} is below the minimum of {min}")]
    BelowMinimum { value: i64, min: i64 },

    #[error("Value {value} is above the maximum of {max}")]
    AboveMaximum { value: i64, max: i64 },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error(transparent)]
    Deadline(#[from] DateRejection),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
