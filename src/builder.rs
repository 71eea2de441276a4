//! Shortcuts which format a pattern and assign it through the validating setter.

use crate::{
    field::{FieldToken, Unit},
    Result, Schedule,
};

impl Schedule {
    fn every(&mut self, unit: Unit) -> &mut Self {
        *self.field_mut(unit) = FieldToken::All;
        self
    }

    fn every_x(&mut self, unit: Unit, interval: u32) -> Result<&mut Self> {
        if interval == 1 {
            Ok(self.every(unit))
        } else {
            self.set(unit, &format!("*/{interval}"))
        }
    }

    fn every_x_from(&mut self, unit: Unit, start: u32, interval: u32) -> Result<&mut Self> {
        if start == 1 && interval == 1 {
            Ok(self.every(unit))
        } else {
            self.set(unit, &format!("{start}/{interval}"))
        }
    }

    fn range_of(&mut self, unit: Unit, start: u32, end: u32) -> Result<&mut Self> {
        self.set(unit, &format!("{start}-{end}"))
    }

    fn on(&mut self, unit: Unit, values: &[u32]) -> Result<&mut Self> {
        let mut values = values.to_vec();
        values.sort_unstable();
        values.dedup();

        let list = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        self.set(unit, &list)
    }

    /// Sets minute field to `*`.
    pub fn every_minute(&mut self) -> &mut Self {
        self.every(Unit::Minute)
    }

    /// Sets minute field to `*/interval`, or to `*` if `interval` is 1.
    pub fn every_x_minutes(&mut self, interval: u32) -> Result<&mut Self> {
        self.every_x(Unit::Minute, interval)
    }

    /// Sets minute field to `start/interval`.
    pub fn every_x_minutes_from(&mut self, start: u32, interval: u32) -> Result<&mut Self> {
        self.every_x_from(Unit::Minute, start, interval)
    }

    /// Sets hour field to `*`.
    pub fn every_hour(&mut self) -> &mut Self {
        self.every(Unit::Hour)
    }

    /// Sets hour field to `*/interval`, or to `*` if `interval` is 1.
    pub fn every_x_hours(&mut self, interval: u32) -> Result<&mut Self> {
        self.every_x(Unit::Hour, interval)
    }

    /// Sets hour field to `start/interval`.
    pub fn every_x_hours_from(&mut self, start: u32, interval: u32) -> Result<&mut Self> {
        self.every_x_from(Unit::Hour, start, interval)
    }

    /// Sets day of month field to `*`.
    pub fn every_day(&mut self) -> &mut Self {
        self.every(Unit::DayOfMonth)
    }

    /// Sets day of month field to `*/interval`, or to `*` if `interval` is 1.
    pub fn every_x_days(&mut self, interval: u32) -> Result<&mut Self> {
        self.every_x(Unit::DayOfMonth, interval)
    }

    /// Sets day of month field to `start/interval`.
    pub fn every_x_days_from(&mut self, start: u32, interval: u32) -> Result<&mut Self> {
        self.every_x_from(Unit::DayOfMonth, start, interval)
    }

    /// Sets month field to `*`.
    pub fn every_month(&mut self) -> &mut Self {
        self.every(Unit::Month)
    }

    /// Sets month field to `*/interval`, or to `*` if `interval` is 1.
    pub fn every_x_months(&mut self, interval: u32) -> Result<&mut Self> {
        self.every_x(Unit::Month, interval)
    }

    /// Sets month field to `start/interval`.
    pub fn every_x_months_from(&mut self, start: u32, interval: u32) -> Result<&mut Self> {
        self.every_x_from(Unit::Month, start, interval)
    }

    /// Sets minute field to `start-end`.
    pub fn range_of_minutes(&mut self, start: u32, end: u32) -> Result<&mut Self> {
        self.range_of(Unit::Minute, start, end)
    }

    /// Sets hour field to `start-end`.
    pub fn range_of_hours(&mut self, start: u32, end: u32) -> Result<&mut Self> {
        self.range_of(Unit::Hour, start, end)
    }

    /// Sets day of month field to `start-end`.
    pub fn range_of_days(&mut self, start: u32, end: u32) -> Result<&mut Self> {
        self.range_of(Unit::DayOfMonth, start, end)
    }

    /// Sets month field to `start-end`.
    pub fn range_of_months(&mut self, start: u32, end: u32) -> Result<&mut Self> {
        self.range_of(Unit::Month, start, end)
    }

    /// Sets day of week field to `start-end`, `0` is Sunday.
    pub fn range_of_days_of_week(&mut self, start: u32, end: u32) -> Result<&mut Self> {
        self.range_of(Unit::DayOfWeek, start, end)
    }

    /// Sets minute field to the sorted list of unique `minutes`.
    pub fn on_minutes(&mut self, minutes: &[u32]) -> Result<&mut Self> {
        self.on(Unit::Minute, minutes)
    }

    /// Sets hour field to the sorted list of unique `hours`.
    pub fn on_hours(&mut self, hours: &[u32]) -> Result<&mut Self> {
        self.on(Unit::Hour, hours)
    }

    /// Sets day of month field to the sorted list of unique `days`.
    pub fn on_days(&mut self, days: &[u32]) -> Result<&mut Self> {
        self.on(Unit::DayOfMonth, days)
    }

    /// Sets month field to the sorted list of unique `months`.
    pub fn on_months(&mut self, months: &[u32]) -> Result<&mut Self> {
        self.on(Unit::Month, months)
    }

    /// Sets day of week field to the sorted list of unique `days`, `0` is Sunday.
    pub fn on_days_of_week(&mut self, days: &[u32]) -> Result<&mut Self> {
        self.on(Unit::DayOfWeek, days)
    }
}
