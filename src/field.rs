use crate::{utils, CronError, Result};
use chrono::{Datelike, Timelike};
use std::fmt::Display;

const WILDCARD: &str = "*";

/// Type of the single value inside a [`FieldToken`].
pub type FieldValue = u8;

/// One of the five fields of a cron expression, with its inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// Minute of the hour, `0-59`.
    Minute,
    /// Hour of the day, `0-23`.
    Hour,
    /// Day of the month, `1-31`.
    DayOfMonth,
    /// Month of the year, `1-12`.
    Month,
    /// Day of the week, `0-6`, where `0` is Sunday.
    DayOfWeek,
}

impl Unit {
    /// All units in the order they appear in an expression.
    pub const ALL: [Unit; 5] = [
        Unit::Minute,
        Unit::Hour,
        Unit::DayOfMonth,
        Unit::Month,
        Unit::DayOfWeek,
    ];

    /// Returns inclusive `(min, max)` bounds of the unit.
    pub const fn min_max(&self) -> (u32, u32) {
        match self {
            Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (0, 6),
        }
    }

    /// Extracts the unit's value from a date/time.
    pub fn value_of<T: Datelike + Timelike>(&self, instant: &T) -> u32 {
        match self {
            Self::Minute => instant.minute(),
            Self::Hour => instant.hour(),
            Self::DayOfMonth => instant.day(),
            Self::Month => instant.month(),
            Self::DayOfWeek => instant.weekday().num_days_from_sunday(),
        }
    }

    /// Parses a number without checking bounds.
    fn number(&self, input: &str, item: &str) -> Result<u32> {
        utils::parse_number(input).ok_or_else(|| CronError::InvalidFormat {
            unit: *self,
            value: item.to_owned(),
        })
    }

    /// Checks that a number fits into the unit's bounds.
    fn check(&self, value: u32) -> Result<FieldValue> {
        let (min, max) = self.min_max();
        if value < min || value > max {
            Err(CronError::ValueOutOfRange {
                unit: *self,
                value,
                min,
                max,
            })
        } else {
            Ok(value as FieldValue)
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day of month",
            Self::Month => "month",
            Self::DayOfWeek => "day of week",
        };
        f.write_str(name)
    }
}

/// Parsed constraint of a single cron field.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldToken {
    /// `*`, each possible value.
    #[default]
    All,
    /// Particular value, i.e. `5`.
    Value(FieldValue),
    /// Inclusive range `start-end`, `start` is always less than `end`.
    Range(FieldValue, FieldValue),
    /// Repeating values `start/interval` or `*/interval` (start is `None`, which means zero).
    Step(Option<FieldValue>, FieldValue),
    /// Sorted and de-duplicated list of other tokens.
    List(Vec<FieldToken>),
}

impl FieldToken {
    /// Parses and validates `input` as a value of the `unit` field.
    ///
    /// List items are sorted by their first value and de-duplicated,
    /// so the token is stored in its canonical form.
    pub fn parse(unit: Unit, input: &str) -> Result<Self> {
        if input == WILDCARD {
            return Ok(Self::All);
        }

        if !input.contains(',') {
            return Self::parse_item(unit, input);
        }

        let mut items = input
            .split(',')
            .map(|item| Self::parse_item(unit, item))
            .collect::<Result<Vec<_>>>()?;

        items.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()).then_with(|| a.cmp(b)));
        items.dedup();

        if items.len() == 1 {
            Ok(items.remove(0))
        } else {
            Ok(Self::List(items))
        }
    }

    fn parse_item(unit: Unit, item: &str) -> Result<Self> {
        if item == WILDCARD {
            Ok(Self::All)
        } else if let Some((start, end)) = item.split_once('-') {
            let start = unit.number(start, item)?;
            let end = unit.number(end, item)?;
            let start = unit.check(start)?;
            let end = unit.check(end)?;
            if start >= end {
                return Err(CronError::InvalidRange {
                    unit,
                    start: start.into(),
                    end: end.into(),
                });
            }
            Ok(Self::Range(start, end))
        } else if let Some((start, interval)) = item.split_once('/') {
            if unit == Unit::DayOfWeek {
                return Err(CronError::UnsupportedStep { unit });
            }
            let start = if start == WILDCARD {
                None
            } else {
                Some(unit.number(start, item)?)
            };
            let interval = unit.number(interval, item)?;
            let start = start.map(|start| unit.check(start)).transpose()?;
            let interval = unit.check(interval)?;
            if interval < 1 {
                return Err(CronError::InvalidInterval {
                    unit,
                    interval: interval.into(),
                });
            }
            Ok(Self::Step(start, interval))
        } else {
            Ok(Self::Value(unit.check(unit.number(item, item)?)?))
        }
    }

    fn sort_key(&self) -> FieldValue {
        match self {
            Self::All | Self::List(_) => 0,
            Self::Value(value) | Self::Range(value, _) => *value,
            Self::Step(start, _) => start.unwrap_or(0),
        }
    }

    /// Returns `true` if `value` satisfies the token.
    ///
    /// Steps match every value congruent to the start modulo the interval,
    /// including values below the start: `10/5` matches `0`, `5`, `10`, `15`, ...
    pub fn matches(&self, value: u32) -> bool {
        match self {
            Self::All => true,
            Self::Value(expected) => value == u32::from(*expected),
            Self::Range(start, end) => (u32::from(*start)..=u32::from(*end)).contains(&value),
            Self::Step(start, interval) => {
                let offset = i64::from(value) - i64::from(start.unwrap_or(0));
                offset.rem_euclid(i64::from(*interval)) == 0
            }
            Self::List(items) => items.iter().any(|item| item.matches(value)),
        }
    }

    /// Returns the value if the token is a single explicit value.
    pub fn as_value(&self) -> Option<FieldValue> {
        match self {
            Self::Value(value) => Some(*value),
            _ => None,
        }
    }
}

impl Display for FieldToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldToken::All => write!(f, "{WILDCARD}"),
            FieldToken::Value(value) => write!(f, "{value}"),
            FieldToken::Range(start, end) => write!(f, "{start}-{end}"),
            FieldToken::Step(None, interval) => write!(f, "{WILDCARD}/{interval}"),
            FieldToken::Step(Some(start), interval) => write!(f, "{start}/{interval}"),
            FieldToken::List(items) => {
                let values = items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
                write!(f, "{values}")
            }
        }
    }
}

/// Validates `input` as a value of the `unit` field.
///
/// Distinguishes malformed text ([`ErrorKind::Format`](crate::ErrorKind::Format))
/// from well-formed but invalid numbers ([`ErrorKind::Range`](crate::ErrorKind::Range))
/// and disallowed constructs ([`ErrorKind::Unsupported`](crate::ErrorKind::Unsupported)).
pub fn validate(input: &str, unit: Unit) -> Result<()> {
    FieldToken::parse(unit, input).map(|_| ())
}

/// Validates that an explicit `day` exists in an explicit `month`.
///
/// The check applies only if both values are plain numbers, any other pattern passes.
/// February is allowed to have 29 days regardless of the year.
///
/// Works on raw text, so `30,30` passes here, while [`Schedule::validate`](crate::Schedule::validate)
/// checks canonical fields where the same list is the single value `30`.
pub fn validate_day_of_month(day: &str, month: &str) -> Result<()> {
    match (utils::parse_number(day), utils::parse_number(month)) {
        (Some(day), Some(month)) => utils::check_day_of_month(day, month),
        _ => Ok(()),
    }
}

impl PartialEq<FieldToken> for &str {
    fn eq(&self, other: &FieldToken) -> bool {
        other.to_string() == *self
    }
}

impl PartialEq<&str> for FieldToken {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}
