/// Common utility functions.
use crate::{field::Unit, CronError, Result};

/// Maximum day of each month, February is fixed at 29 regardless of the year.
const DAYS_IN_MONTHS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Converts string of decimal digits into unsigned number.
///
/// Returns `None` if the input is empty or contains anything but ASCII digits.
/// Values which don't fit into `u32` are saturated, since they are out of any field's bounds anyway.
pub(crate) fn parse_number(input: &str) -> Option<u32> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        Some(input.parse::<u32>().unwrap_or(u32::MAX))
    }
}

/// Returns the maximum number of days which the month may have.
pub(crate) fn max_days_in_month(month: u32) -> Option<u32> {
    match month {
        1..=12 => Some(DAYS_IN_MONTHS[(month - 1) as usize]),
        _ => None,
    }
}

/// Validates an explicit day of month against an explicit month.
pub(crate) fn check_day_of_month(day: u32, month: u32) -> Result<()> {
    let (min, max) = Unit::Month.min_max();
    let Some(max_day) = max_days_in_month(month) else {
        return Err(CronError::ValueOutOfRange {
            unit: Unit::Month,
            value: month,
            min,
            max,
        });
    };

    if day < 1 || day > max_day {
        Err(CronError::InvalidDayOfMonth {
            day,
            month,
            max: max_day,
        })
    } else {
        Ok(())
    }
}
