use crate::{
    field::{FieldToken, Unit},
    utils, CronError, Result,
};
use chrono::{
    DateTime, Datelike, Local, Months, NaiveDateTime, TimeDelta, TimeZone, Timelike,
};
use log::{debug, trace};
use std::{fmt::Display, str::FromStr};

/// Default search horizon of [`Schedule::next_execution`], in days.
///
/// Eight leap-year-long years reach the next February 29 from any date,
/// even across a century year which isn't a leap one.
pub const DEFAULT_HORIZON_DAYS: i64 = 8 * 366;

/// Represents a five-field cron expression with its methods.
///
/// For field syntax and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub struct Schedule {
    minute: FieldToken,
    hour: FieldToken,
    day: FieldToken,
    month: FieldToken,
    day_of_week: FieldToken,
}

impl Schedule {
    /// Parses and validates provided `expression` and constructs [`Schedule`] instance.
    ///
    /// The expression is split by whitespace and must have exactly five fields:
    /// `minute hour day-of-month month day-of-week`.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] in a case provided expression is unparsable or has invalid fields.
    /// Day of month isn't checked against month here, see [`Schedule::validate`].
    pub fn parse(expression: &str) -> Result<Self> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        let [minute, hour, day, month, day_of_week] = parts.as_slice() else {
            return Err(CronError::InvalidFieldCount { parts: parts.len() });
        };

        Self::from_fields(minute, hour, day, month, day_of_week)
    }

    /// The same as [`Schedule::parse`] but returns `None` instead of any error.
    pub fn try_parse(expression: &str) -> Option<Self> {
        Self::parse(expression).ok()
    }

    /// Constructs [`Schedule`] from separate fields, validating each of them.
    pub fn from_fields(minute: &str, hour: &str, day: &str, month: &str, day_of_week: &str) -> Result<Self> {
        let mut schedule = Self::default();
        schedule
            .set_minute(minute)?
            .set_hour(hour)?
            .set_day(day)?
            .set_month(month)?
            .set_day_of_week(day_of_week)?;

        Ok(schedule)
    }

    /// Returns minute field.
    pub fn minute(&self) -> &FieldToken {
        &self.minute
    }

    /// Returns hour field.
    pub fn hour(&self) -> &FieldToken {
        &self.hour
    }

    /// Returns day of month field.
    pub fn day(&self) -> &FieldToken {
        &self.day
    }

    /// Returns month field.
    pub fn month(&self) -> &FieldToken {
        &self.month
    }

    /// Returns day of week field.
    pub fn day_of_week(&self) -> &FieldToken {
        &self.day_of_week
    }

    /// Returns field of the `unit`.
    pub fn field(&self, unit: Unit) -> &FieldToken {
        match unit {
            Unit::Minute => &self.minute,
            Unit::Hour => &self.hour,
            Unit::DayOfMonth => &self.day,
            Unit::Month => &self.month,
            Unit::DayOfWeek => &self.day_of_week,
        }
    }

    pub(crate) fn field_mut(&mut self, unit: Unit) -> &mut FieldToken {
        match unit {
            Unit::Minute => &mut self.minute,
            Unit::Hour => &mut self.hour,
            Unit::DayOfMonth => &mut self.day,
            Unit::Month => &mut self.month,
            Unit::DayOfWeek => &mut self.day_of_week,
        }
    }

    /// Validates `value` and assigns it to the field of the `unit`.
    ///
    /// The field stays untouched if `value` is invalid.
    pub fn set(&mut self, unit: Unit, value: &str) -> Result<&mut Self> {
        let token = FieldToken::parse(unit, value)
            .inspect_err(|err| debug!("rejected {unit} value {value:?}: {err}"))?;
        *self.field_mut(unit) = token;
        Ok(self)
    }

    /// Validates and sets minute field.
    pub fn set_minute(&mut self, value: &str) -> Result<&mut Self> {
        self.set(Unit::Minute, value)
    }

    /// Validates and sets hour field.
    pub fn set_hour(&mut self, value: &str) -> Result<&mut Self> {
        self.set(Unit::Hour, value)
    }

    /// Validates and sets day of month field.
    pub fn set_day(&mut self, value: &str) -> Result<&mut Self> {
        self.set(Unit::DayOfMonth, value)
    }

    /// Validates and sets month field.
    pub fn set_month(&mut self, value: &str) -> Result<&mut Self> {
        self.set(Unit::Month, value)
    }

    /// Validates and sets day of week field.
    pub fn set_day_of_week(&mut self, value: &str) -> Result<&mut Self> {
        self.set(Unit::DayOfWeek, value)
    }

    /// Checks that an explicit day of month exists in an explicit month.
    ///
    /// Any other combination of patterns passes.
    pub fn validate(&self) -> Result<()> {
        match (self.day.as_value(), self.month.as_value()) {
            (Some(day), Some(month)) => utils::check_day_of_month(day.into(), month.into()),
            _ => Ok(()),
        }
    }

    /// Returns canonical cron expression after [validation](Schedule::validate).
    ///
    /// Use [`Display`] to get expression without validation.
    pub fn to_expression(&self) -> Result<String> {
        self.validate()?;
        Ok(self.to_string())
    }

    /// Returns `true` if every field matches the `instant`, seconds are ignored.
    pub fn will_run_at<T: Datelike + Timelike>(&self, instant: &T) -> bool {
        Unit::ALL
            .iter()
            .all(|unit| self.field(*unit).matches(unit.value_of(instant)))
    }

    /// Returns time of the upcoming execution strictly after `from`.
    ///
    /// The search runs on the wall clock of `from` and gives up after [`DEFAULT_HORIZON_DAYS`].
    /// Local times which don't exist in the time zone of `from` are skipped,
    /// ambiguous ones resolve to the earliest instant after `from`.
    ///
    /// Returns [`CronError::NoUpcomingExecution`] if nothing matches within the horizon.
    #[inline]
    pub fn next_execution<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        self.next_execution_within(from, TimeDelta::days(DEFAULT_HORIZON_DAYS))
    }

    /// The same as [`Schedule::next_execution`] but with explicit search `horizon`.
    pub fn next_execution_within<Tz: TimeZone>(&self, from: &DateTime<Tz>, horizon: TimeDelta) -> Result<DateTime<Tz>> {
        let origin = from.naive_local();
        let unsatisfiable = || {
            debug!("no upcoming execution of '{self}' after {origin} within {horizon}");
            CronError::NoUpcomingExecution { from: origin, horizon }
        };
        let limit = origin.checked_add_signed(horizon).ok_or_else(unsatisfiable)?;
        let timezone = from.timezone();

        let mut after = origin;
        loop {
            let candidate = self.search(&after, &limit).ok_or_else(unsatisfiable)?;
            let mapped = timezone.from_local_datetime(&candidate);
            let found = [mapped.clone().earliest(), mapped.latest()]
                .into_iter()
                .flatten()
                .find(|instant| instant > from);

            if let Some(found) = found {
                debug!("next execution of '{self}' after {origin} is {candidate}");
                return Ok(found);
            }

            debug!("skipping local time {candidate}, it doesn't map to an instant after {origin}");
            after = candidate;
        }
    }

    /// Returns upcoming wall-clock execution time strictly after `from`.
    pub fn next_naive_execution(&self, from: &NaiveDateTime) -> Result<NaiveDateTime> {
        let horizon = TimeDelta::days(DEFAULT_HORIZON_DAYS);
        let unsatisfiable = || {
            debug!("no upcoming execution of '{self}' after {from} within {horizon}");
            CronError::NoUpcomingExecution { from: *from, horizon }
        };
        let limit = from.checked_add_signed(horizon).ok_or_else(unsatisfiable)?;
        let next = self.search(from, &limit).ok_or_else(unsatisfiable)?;

        debug!("next execution of '{self}' after {from} is {next}");
        Ok(next)
    }

    /// Returns time of the upcoming execution after the current local time.
    pub fn next_execution_from_now(&self) -> Result<DateTime<Local>> {
        self.next_execution(&Local::now())
    }

    /// Looks for the first matching wall-clock minute after `after` but not later than `limit`.
    ///
    /// Each mismatch of a coarser field moves the candidate to the next value of that field
    /// and resets all finer ones, then all checks start over.
    fn search(&self, after: &NaiveDateTime, limit: &NaiveDateTime) -> Option<NaiveDateTime> {
        let start = after.with_second(0)?.with_nanosecond(0)?;
        let mut next = start;

        while next <= *limit {
            next = if !self.matches_unit(Unit::Minute, &next) {
                next.checked_add_signed(TimeDelta::minutes(1))?
            } else if !self.matches_unit(Unit::Hour, &next) {
                trace!("{next}: skipping hour");
                next.with_minute(0)?.checked_add_signed(TimeDelta::hours(1))?
            } else if !self.matches_unit(Unit::DayOfMonth, &next) {
                trace!("{next}: skipping day");
                next.date().and_hms_opt(0, 0, 0)?.checked_add_signed(TimeDelta::days(1))?
            } else if !self.matches_unit(Unit::Month, &next) {
                trace!("{next}: skipping month");
                next.date()
                    .with_day(1)?
                    .and_hms_opt(0, 0, 0)?
                    .checked_add_months(Months::new(1))?
            } else if !self.matches_unit(Unit::DayOfWeek, &next) {
                trace!("{next}: skipping day of week");
                next.date().and_hms_opt(0, 0, 0)?.checked_add_signed(TimeDelta::days(1))?
            } else if next == start {
                next.checked_add_signed(TimeDelta::minutes(1))?
            } else {
                return Some(next);
            };
        }

        None
    }

    #[inline]
    fn matches_unit(&self, unit: Unit, instant: &NaiveDateTime) -> bool {
        self.field(unit).matches(unit.value_of(instant))
    }

    /// Returns iterator of executions strictly after `from`.
    ///
    /// Iterator ends as soon as no upcoming execution can be found.
    #[inline]
    pub fn iter<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        ScheduleIterator {
            schedule: self.clone(),
            next: self.next_execution(from).ok(),
        }
    }

    /// Consumes [`Schedule`] and returns iterator of executions strictly after `from`.
    #[inline]
    pub fn into_iter<Tz: TimeZone>(self, from: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        let next = self.next_execution(from).ok();
        ScheduleIterator { schedule: self, next }
    }
}

/// Contains iterator state.
#[derive(Debug, Clone)]
struct ScheduleIterator<Tz: TimeZone> {
    schedule: Schedule,
    next: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> Iterator for ScheduleIterator<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.schedule.next_execution(&current).ok();
        Some(current)
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.to_string()
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day, self.month, self.day_of_week
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Schedule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let expression = self.to_expression().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&expression)
    }
}
