use crate::field::Unit;
use chrono::{NaiveDateTime, TimeDelta};
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum CronError {
    /// Expression doesn't consist of exactly five whitespace-separated fields.
    #[error("invalid cron expression: found {parts} parts instead of 5")]
    InvalidFieldCount {
        /// Number of fields actually found.
        parts: usize,
    },
    /// Field (or one of its list items) is syntactically malformed.
    #[error("invalid {unit} format: {value:?}")]
    InvalidFormat {
        /// Field the value was assigned to.
        unit: Unit,
        /// Offending piece of text.
        value: String,
    },
    /// Numeric value is outside the field's bounds.
    #[error("value {value} for {unit} must be between {min} and {max}")]
    ValueOutOfRange {
        /// Field the value was assigned to.
        unit: Unit,
        /// Offending value, saturated to `u32::MAX` when it doesn't fit.
        value: u32,
        /// Lower bound of the field.
        min: u32,
        /// Upper bound of the field.
        max: u32,
    },
    /// Range start isn't strictly less than its end.
    #[error("start value {start} for {unit} must be less than end value {end}")]
    InvalidRange {
        /// Field the range was assigned to.
        unit: Unit,
        /// Range start.
        start: u32,
        /// Range end.
        end: u32,
    },
    /// Step interval is zero.
    #[error("interval value {interval} for {unit} must be greater than 0")]
    InvalidInterval {
        /// Field the step was assigned to.
        unit: Unit,
        /// Offending interval.
        interval: u32,
    },
    /// Explicit day doesn't exist in the explicit month.
    #[error("day of month {day} for month {month} is invalid, it must be between 1 and {max}")]
    InvalidDayOfMonth {
        /// Day of month.
        day: u32,
        /// Month.
        month: u32,
        /// Maximum day of that month.
        max: u32,
    },
    /// Syntactically valid construct which isn't allowed for the field.
    #[error("interval values are not supported for {unit}")]
    UnsupportedStep {
        /// Field the step was assigned to.
        unit: Unit,
    },
    /// Search didn't find any matching time within the horizon.
    #[error("no upcoming execution after {from} within {} days", .horizon.num_days())]
    NoUpcomingExecution {
        /// Wall-clock time the search started from.
        from: NaiveDateTime,
        /// Search horizon.
        horizon: TimeDelta,
    },
}

/// Category of a [`CronError`], to branch on syntax vs. semantic problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// Malformed text: non-numeric literal, wrong separators or wrong number of fields.
    Format,
    /// Well-formed but out of bounds, inverted range, zero interval or impossible day of month.
    Range,
    /// Well-formed but disallowed construct.
    Unsupported,
    /// Schedule has no matching time within the search horizon.
    Unsatisfiable,
}

impl CronError {
    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFieldCount { .. } | Self::InvalidFormat { .. } => ErrorKind::Format,
            Self::ValueOutOfRange { .. }
            | Self::InvalidRange { .. }
            | Self::InvalidInterval { .. }
            | Self::InvalidDayOfMonth { .. } => ErrorKind::Range,
            Self::UnsupportedStep { .. } => ErrorKind::Unsupported,
            Self::NoUpcomingExecution { .. } => ErrorKind::Unsatisfiable,
        }
    }
}
