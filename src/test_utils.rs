//! Shared constructors for tests. Panicking here is fine: a bad literal in
//! a test is a bug in the test.

#![allow(clippy::unwrap_used)]

use crate::{CalendarDate, Day, Month, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).unwrap()
}

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub fn day(value: u8, year: u16, month: u8) -> Day {
    Day::new(value, year, month).unwrap()
}

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}
