//! Calendar-day arithmetic for laying out month grids.
//!
//! All dates are proleptic Gregorian, as implemented by [`chrono::NaiveDate`].

use chrono::{Datelike as _, NaiveDate};

/// Day-of-week column (`0..=6`, `0` = Sunday) of the first day of the given month.
///
/// This is also the number of leading blank cells in a Sunday-first month grid.
///
/// The month must be in `1..=12` and `(year, month)` must denote a representable month.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("invalid year/month");
    first.weekday().num_days_from_sunday()
}

/// Number of days (`28..=31`) in the given month, accounting for leap years.
///
/// The month must be in `1..=12` and `(year, month)` must denote a representable month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("invalid year/month");
    first
        .with_day(31)
        .map(|_| 31)
        .or_else(|| first.with_day(30).map(|_| 30))
        .or_else(|| first.with_day(29).map(|_| 29))
        .unwrap_or(28)
}

/// English name of the given month (`1..=12`).
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => panic!("Unknown month: {month}"),
    }
}
