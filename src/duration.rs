//! duration.rs
//!
//! Elapsed calendar time between two instants, expressed as
//!     (years, months, days)
//!
//! The difference is taken field by field on the UTC dates and then fixed up
//! with a single borrow per field:
//!   • day underflow borrows the length of the month preceding `now`
//!   • month underflow borrows 12 months from the years
//!
//! This is not a total-day count: Jan 31 → Mar 1 reads as one month and one
//! day whether or not February had a leap day.

use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    /// The start instant lies after the reference instant.
    #[error("start {start} is after reference time {now}")]
    InvalidRange {
        start: DateTime<Utc>,
        now: DateTime<Utc>,
    },
}

/// Calendar-field-wise elapsed time. `months` is always in `0..=11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarDuration {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl CalendarDuration {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Computes the elapsed calendar time from `start` to `now`.
    pub fn between(start: DateTime<Utc>, now: DateTime<Utc>) -> Result<Self, DurationError> {
        if start > now {
            return Err(DurationError::InvalidRange { start, now });
        }

        let mut years = now.year() - start.year();
        let mut months = now.month() as i32 - start.month() as i32;
        let mut days = now.day() as i32 - start.day() as i32;

        // Fix day underflow
        if days < 0 {
            months -= 1;

            let (prev_year, prev_month) = if now.month() == 1 {
                (now.year() - 1, 12)
            } else {
                (now.year(), now.month() - 1)
            };

            // Add days from the previous month (28–31 depending on month & leap year)
            days += days_in_month(prev_year, prev_month) as i32;

            // Still short (the 31st borrowed against February): count from the
            // end of the borrowed month instead.
            if days < 0 {
                days = now.day() as i32;
            }
        }

        // Fix month underflow
        if months < 0 {
            years -= 1;
            months += 12;
        }

        // start <= now keeps every field non-negative after borrowing.
        Ok(Self {
            years: years.max(0) as u32,
            months: months.max(0) as u32,
            days: days.max(0) as u32,
        })
    }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // month comes from chrono, always 1..=12
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
