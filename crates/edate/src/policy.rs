//! Which days may be picked, relative to a fixed reference day.

use chrono::{Datelike as _, NaiveDate, Weekday};

/// Restricts which days can be selected, relative to a reference "today".
///
/// The reference day itself always satisfies every mode.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ConstraintMode {
    /// Every day is selectable.
    #[default]
    Unrestricted,

    /// Only today and days before it are selectable.
    PastOnly,

    /// Only today and days after it are selectable.
    FutureOnly,

    /// Like [`Self::FutureOnly`], for ranges that must start no earlier than today
    /// and run without gaps from there on.
    ContinuousFromToday,
}

impl ConstraintMode {
    /// Can any day of the given year be selected?
    pub fn year_selectable(self, year: i32, today: NaiveDate) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::PastOnly => year <= today.year(),
            Self::FutureOnly | Self::ContinuousFromToday => year >= today.year(),
        }
    }

    /// Can any day of the given month be selected?
    ///
    /// Implies [`Self::year_selectable`] for the same year.
    pub fn month_selectable(self, year: i32, month: u32, today: NaiveDate) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::PastOnly => {
                year < today.year() || (year == today.year() && month <= today.month())
            }
            Self::FutureOnly | Self::ContinuousFromToday => {
                year > today.year() || (year == today.year() && month >= today.month())
            }
        }
    }

    /// Can this day be selected?
    pub fn day_selectable(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::PastOnly => date <= today,
            Self::FutureOnly | Self::ContinuousFromToday => date >= today,
        }
    }

    /// Snap a displayed `(year, month)` back into range.
    ///
    /// Returns the pair unchanged if some day of that month is selectable,
    /// and today's `(year, month)` otherwise.
    pub fn clamp_month(self, year: i32, month: u32, today: NaiveDate) -> (i32, u32) {
        if self.month_selectable(year, month, today) {
            (year, month)
        } else {
            (today.year(), today.month())
        }
    }
}

// ----------------------------------------------------------------------------

/// The two days of the week to highlight as the weekend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Weekend(pub [Weekday; 2]);

impl Weekend {
    /// Friday and Saturday.
    pub const FRI_SAT: Self = Self([Weekday::Fri, Weekday::Sat]);

    /// Saturday and Sunday.
    pub const SAT_SUN: Self = Self([Weekday::Sat, Weekday::Sun]);

    /// Is the given weekday part of this weekend?
    #[inline]
    pub fn contains(self, weekday: Weekday) -> bool {
        self.0[0] == weekday || self.0[1] == weekday
    }
}

impl Default for Weekend {
    #[inline]
    fn default() -> Self {
        Self::FRI_SAT
    }
}
