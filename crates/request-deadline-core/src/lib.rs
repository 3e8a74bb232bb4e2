pub mod calendar;
pub mod deadline;
pub mod error;
pub mod format;
pub mod hours;
pub mod validation;
