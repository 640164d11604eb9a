mod consts;
mod prelude;
mod sort;
mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use consts::*;
pub use sort::{is_r_month, r_month_order, sort_dates};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An immutable calendar date: year, month, and day.
/// Every value of this type is a well-formed Gregorian date, guaranteed by
/// the validated component types it is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
#[serde(try_from = "(u16, u8, u8)", into = "(u16, u8, u8)")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("invalid year: {0} (must be 1..=9999)")]
    InvalidYear(u16),
    #[error("invalid month: {0} (must be 1..=12)")]
    InvalidMonth(u8),
    #[error("invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
}

impl CalendarDate {
    /// Creates a date from already-validated components.
    /// The `day` must have been validated for this same `year` and `month`
    /// (see `Day::new`); `from_ymd` is the checked front door.
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw components, validating each of them.
    ///
    /// # Errors
    /// Returns `DateError` if the year, month, or day is out of range,
    /// including day-past-end-of-month and leap-year violations.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month as u8 (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day as u8 (1..=31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the uppercase English name of the date's month
    /// ("JANUARY".."DECEMBER")
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Converts to database columns: (year, month, day)
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Creates from database columns: (year, month, day)
    ///
    /// # Errors
    /// Returns `DateError` if any column holds an out-of-range value.
    pub fn from_columns(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::from_ymd(year, month, day)
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural chronological order: year, then month, then day.
        self.to_columns().cmp(&other.to_columns())
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_columns(value.0, value.1, value.2)
    }
}

impl From<CalendarDate> for (u16, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        date.to_columns()
    }
}
