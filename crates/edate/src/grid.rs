//! The month grid a calendar view renders: padded weeks of classified day cells.

use chrono::{Datelike as _, NaiveDate};

use crate::{PickerState, Weekend, days_in_month, first_weekday_of_month};

/// One cell of a [`MonthGrid`].
///
/// The classification flags are independent of each other: a disabled cell
/// still reports `weekend`/`today`/`selected`, it just must not react to clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DayCell {
    /// The day this cell shows, or `None` for blank padding cells.
    pub date: Option<NaiveDate>,

    /// Falls on a highlighted weekend day.
    pub weekend: bool,

    /// Is the reference day.
    pub today: bool,

    /// Is the currently selected day.
    pub selected: bool,

    /// Not clickable: blank padding, or a day the active mode disallows.
    pub disabled: bool,
}

impl DayCell {
    pub(crate) const BLANK: Self = Self {
        date: None,
        weekend: false,
        today: false,
        selected: false,
        disabled: true,
    };
}

/// A month laid out Sunday-first, padded to whole weeks of seven [`DayCell`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MonthGrid {
    year: i32,
    month: u32,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub(crate) fn derive(state: &PickerState, weekend: Weekend) -> Self {
        let (year, month) = (state.year(), state.month());
        let today = state.today();
        let leading = first_weekday_of_month(year, month);
        let mut cells = Vec::with_capacity(42);
        for _ in 0..leading {
            cells.push(DayCell::BLANK);
        }
        for day in 1..=days_in_month(year, month) {
            let date = NaiveDate::from_ymd_opt(year, month, day).expect("invalid year/month");
            cells.push(DayCell {
                date: Some(date),
                weekend: weekend.contains(date.weekday()),
                today: date == today,
                selected: state.selected() == Some(date),
                disabled: !state.mode().day_selectable(date, today),
            });
        }
        while cells.len() % 7 != 0 {
            cells.push(DayCell::BLANK);
        }
        Self { year, month, cells }
    }

    /// The displayed year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The displayed month (`1..=12`).
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// All cells in row-major order. Always a multiple of seven.
    #[inline]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The rows of the grid, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks_exact(7)
    }
}
