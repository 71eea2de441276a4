//! Five-field cron expressions: validation, time matching and next execution search.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a small crate, intended to:
//! - validate and normalize fields of classic cron expressions;
//! - check whether some calendar time matches an expression;
//! - find the next matching time after some reference time.
//!
//! _This is not a cron jobs scheduler or runner._ It only computes calendar times and matches.
//!
//! ## Cron expression format
//!
//! Expression consists of exactly five fields separated by whitespace:
//! minutes, hours, days of month, months and days of week.
//! There are no seconds, years or named aliases (like `JAN` or `MON`).
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Allowed values | Allowed special characters |
//! |--------------|----------------|----------------------------|
//! | Minutes      | 0-59           | * , - /                    |
//! | Hours        | 0-23           | * , - /                    |
//! | Day of Month | 1-31           | * , - /                    |
//! | Month        | 1-12           | * , - /                    |
//! | Day of Week  | 0-6            | * , -                      |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `1-5,*/20`;
//! - `-` - range of values, start must be less than end, i.e. `0-15`;
//! - `/` - repeating values, i.e. `*/12` or `10/5`. Not allowed for days of week.
//!
//! Repeating values match each value congruent to the start modulo the interval,
//! so `10/5` for minutes is the same as `*/5`, and `*/2` for days of month means even days.
//!
//! Day of week `0` is Sunday.
//!
//! If both day of month and month are single values, the day must exist in that month.
//! This is checked by [Schedule::to_expression()] and [Schedule::validate()], February may have 29 days.
//!
//! ## How to use
//!
//! The main entity of the crate is a [`Schedule`] structure, which has several basic methods:
//! - [parse()](Schedule::parse): constructor to parse and validate provided expression;
//! - [will_run_at()](Schedule::will_run_at): checks whether some time matches the schedule;
//! - [next_execution()](Schedule::next_execution): returns time of the next execution strictly after the provided time;
//! - [iter()](Schedule::iter): returns an `Iterator` which produces a series of execution times;
//! - [to_expression()](Schedule::to_expression): returns validated canonical expression.
//!
//! Single fields may be validated with [validate()] and [validate_day_of_month()].
//!
//! ### Example with `next_execution`
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use cron_fields::{Result, Schedule};
//!
//! fn next_execution() -> Result<()> {
//!     let schedule = Schedule::parse("0 0 1 1 *")?;
//!     let from = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
//!
//!     let next = schedule.next_execution(&from)?;
//!     assert_eq!(next, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
//!
//!     Ok(())
//! }
//! # next_execution().unwrap();
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use chrono::Utc;
//! use cron_fields::{Result, Schedule};
//!
//! fn iterator() -> Result<()> {
//!     let schedule = Schedule::parse("*/15 9-17 * * 1-5")?;
//!     let now = Utc::now();
//!
//!     // Get the next 10 times starting from now
//!     schedule.iter(&now).take(10).for_each(|t| println!("next: {t}"));
//!
//!     Ok(())
//! }
//! # iterator().unwrap();
//! ```
//!
//! ### Example with builder methods
//! ```rust
//! use cron_fields::{ErrorKind, Result, Schedule};
//!
//! fn builder() -> Result<()> {
//!     let mut schedule = Schedule::default();
//!     schedule
//!         .every_x_minutes(2)?
//!         .range_of_hours(8, 17)?
//!         .on_months(&[12, 2, 4, 2])?
//!         .range_of_days_of_week(1, 5)?;
//!     assert_eq!(schedule.to_expression()?, "*/2 8-17 * 2,4,12 1-5");
//!
//!     // invalid values are rejected, the field stays unchanged
//!     assert_eq!(schedule.set_minute("60").unwrap_err().kind(), ErrorKind::Range);
//!     assert_eq!(schedule.minute().to_string(), "*/2");
//!
//!     Ok(())
//! }
//! # builder().unwrap();
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Schedule`].

mod builder;
/// Crate specific Error implementation.
pub mod error;
/// Field units, parsed field patterns and their validation.
pub mod field;
/// Cron expression, time matching and next execution search.
pub mod schedule;
mod utils;

// Re-export of public entities.
pub use error::{CronError, ErrorKind};
pub use field::{validate, validate_day_of_month, FieldToken, Unit};
pub use schedule::{Schedule, DEFAULT_HORIZON_DAYS};

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
