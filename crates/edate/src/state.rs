//! The picker's navigation and selection state machine.

use chrono::{Datelike as _, NaiveDate};

use crate::{ConstraintMode, MonthGrid, Weekend, format_date, parse_date};

/// Everything a date picker remembers between frames: the displayed month,
/// the selection, whether the overlay is open, and the rules it plays by.
///
/// The displayed `(year, month)` always denotes a real calendar month that
/// satisfies the active [`ConstraintMode`]: every transition snaps it back to
/// the reference day's month when it would leave the selectable range. All
/// mutation goes through the methods here; there is no way to hold a
/// `PickerState` that violates its own mode.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PickerState {
    mode: ConstraintMode,
    today: NaiveDate,
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
    open: bool,
}

impl PickerState {
    /// An empty selection, displaying the reference day's month.
    ///
    /// `today` is the fixed baseline all past/future constraints compare against.
    /// It is deliberately passed in rather than read from a clock, so callers
    /// decide what "today" means (and tests can pick one).
    pub fn new(mode: ConstraintMode, today: NaiveDate) -> Self {
        Self {
            mode,
            today,
            year: today.year(),
            month: today.month(),
            selected: None,
            open: false,
        }
    }

    /// Like [`Self::new`], but adopts `text` as the initial selection if it is
    /// a canonical `YYYY-MM-DD` date that the mode allows.
    ///
    /// Anything else (empty, malformed, nonexistent, out of range for the mode)
    /// leaves the selection empty and the reference day's month displayed.
    pub fn attach(mode: ConstraintMode, today: NaiveDate, text: &str) -> Self {
        let mut state = Self::new(mode, today);
        if let Ok(date) = parse_date(text) {
            // `select` re-checks the mode and aligns the displayed month.
            state.select(date);
        }
        state
    }

    /// The active constraint mode.
    #[inline]
    pub fn mode(&self) -> ConstraintMode {
        self.mode
    }

    /// The fixed reference day.
    #[inline]
    pub fn today(&self) -> NaiveDate {
        self.today
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

    /// The selected day, if any.
    #[inline]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Display another year, snapping back into range if the mode disallows it.
    ///
    /// Years beyond what [`NaiveDate`] can represent are clamped to its limits,
    /// so the displayed pair always denotes a real calendar month.
    pub fn set_year(&mut self, year: i32) {
        let year = year.clamp(NaiveDate::MIN.year(), NaiveDate::MAX.year());
        let (year, month) = self.mode.clamp_month(year, self.month, self.today);
        self.year = year;
        self.month = month;
    }

    /// Display another month, snapping back into range if the mode disallows it.
    ///
    /// Months outside `1..=12` are clamped to the nearest real month.
    pub fn set_month(&mut self, month: u32) {
        let month = month.clamp(1, 12);
        let (year, month) = self.mode.clamp_month(self.year, month, self.today);
        self.year = year;
        self.month = month;
    }

    /// Switch constraint modes in place.
    ///
    /// Re-validates what the new mode no longer allows: the displayed month is
    /// snapped back into range and a now-disallowed selection is dropped.
    pub fn set_mode(&mut self, mode: ConstraintMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        let (year, month) = mode.clamp_month(self.year, self.month, self.today);
        self.year = year;
        self.month = month;
        if self
            .selected
            .is_some_and(|date| !mode.day_selectable(date, self.today))
        {
            self.selected = None;
        }
    }

    /// Select a day and display its month.
    ///
    /// Returns `false` (and changes nothing) if the mode disallows the day.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        if !self.mode.day_selectable(date, self.today) {
            return false;
        }
        self.selected = Some(date);
        self.year = date.year();
        self.month = date.month();
        true
    }

    /// Drop the selection. The displayed month stays put.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Select the reference day and display its month.
    ///
    /// The reference day satisfies every mode, so this always succeeds.
    pub fn jump_to_today(&mut self) {
        self.select(self.today);
    }

    /// Is the calendar overlay open?
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the calendar overlay. Opening an open overlay is a no-op.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the calendar overlay without touching the selection.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Lay out the displayed month as rows of classified day cells.
    pub fn grid(&self, weekend: Weekend) -> MonthGrid {
        MonthGrid::derive(self, weekend)
    }

    /// The selection in canonical `YYYY-MM-DD` form, or `None` when empty.
    pub fn canonical_text(&self) -> Option<String> {
        self.selected.map(format_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn new_displays_todays_month() {
        let state = PickerState::new(ConstraintMode::PastOnly, date(2024, 6, 1));
        assert_eq!((state.year(), state.month()), (2024, 6));
        assert_eq!(state.selected(), None);
        assert!(!state.is_open());
    }

    #[test]
    fn attach_adopts_canonical_text() {
        let state =
            PickerState::attach(ConstraintMode::Unrestricted, date(2024, 6, 1), "2023-01-10");
        assert_eq!(state.selected(), Some(date(2023, 1, 10)));
        assert_eq!((state.year(), state.month()), (2023, 1));
    }

    #[test]
    fn attach_ignores_bad_or_disallowed_text() {
        for text in ["", "not a date", "2024-6-1", "2023-02-30"] {
            let state = PickerState::attach(ConstraintMode::Unrestricted, date(2024, 6, 1), text);
            assert_eq!(state.selected(), None, "{text:?} should be ignored");
            assert_eq!((state.year(), state.month()), (2024, 6));
        }

        // Parses fine, but FutureOnly forbids it.
        let state = PickerState::attach(ConstraintMode::FutureOnly, date(2024, 6, 1), "2023-01-10");
        assert_eq!(state.selected(), None);
        assert_eq!((state.year(), state.month()), (2024, 6));
    }

    #[test]
    fn navigation_clamps_to_todays_month() {
        let mut state = PickerState::new(ConstraintMode::FutureOnly, date(2024, 6, 1));
        state.set_year(2024);
        state.set_month(1); // January 2024 is in the past
        assert_eq!((state.year(), state.month()), (2024, 6));

        state.set_month(9);
        assert_eq!((state.year(), state.month()), (2024, 9));
        state.set_year(2023); // whole year in the past
        assert_eq!((state.year(), state.month()), (2024, 6));
        state.set_year(2025);
        assert_eq!((state.year(), state.month()), (2025, 6));
    }

    #[test]
    fn set_year_clamps_to_representable_years() {
        let mut state = PickerState::new(ConstraintMode::Unrestricted, date(2024, 6, 1));

        state.set_year(300_000);
        assert_eq!((state.year(), state.month()), (NaiveDate::MAX.year(), 6));
        let grid = state.grid(Weekend::default());
        assert_eq!((grid.year(), grid.month()), (NaiveDate::MAX.year(), 6));

        state.set_year(-300_000);
        assert_eq!((state.year(), state.month()), (NaiveDate::MIN.year(), 6));
        let grid = state.grid(Weekend::default());
        assert_eq!((grid.year(), grid.month()), (NaiveDate::MIN.year(), 6));

        // Under a mode the clamped year still violates, the mode snap wins.
        let mut state = PickerState::new(ConstraintMode::FutureOnly, date(2024, 6, 1));
        state.set_year(-300_000);
        assert_eq!((state.year(), state.month()), (2024, 6));
    }

    #[test]
    fn set_month_clamps_out_of_range_months() {
        let mut state = PickerState::new(ConstraintMode::Unrestricted, date(2024, 6, 1));

        state.set_month(13);
        assert_eq!((state.year(), state.month()), (2024, 12));
        state.set_month(0);
        assert_eq!((state.year(), state.month()), (2024, 1));

        let grid = state.grid(Weekend::default());
        assert_eq!((grid.year(), grid.month()), (2024, 1));
    }

    #[test]
    fn select_rejects_disallowed_days() {
        let mut state = PickerState::new(ConstraintMode::PastOnly, date(2024, 3, 15));
        assert!(!state.select(date(2024, 3, 16)));
        assert_eq!(state.selected(), None);
        assert!(state.select(date(2024, 3, 15)));
        assert!(state.select(date(2020, 12, 31)));
        assert_eq!((state.year(), state.month()), (2020, 12));
    }

    #[test]
    fn clear_keeps_displayed_month() {
        let mut state = PickerState::new(ConstraintMode::Unrestricted, date(2024, 6, 1));
        assert!(state.select(date(2023, 1, 10)));
        state.clear();
        assert_eq!(state.selected(), None);
        assert_eq!((state.year(), state.month()), (2023, 1));
    }

    #[test]
    fn jump_to_today_always_works() {
        for mode in [
            ConstraintMode::Unrestricted,
            ConstraintMode::PastOnly,
            ConstraintMode::FutureOnly,
            ConstraintMode::ContinuousFromToday,
        ] {
            let mut state = PickerState::new(mode, date(2024, 6, 1));
            state.set_year(2024);
            state.jump_to_today();
            assert_eq!(state.selected(), Some(date(2024, 6, 1)), "{mode:?}");
            assert_eq!((state.year(), state.month()), (2024, 6));
        }
    }

    #[test]
    fn mode_switch_revalidates() {
        let mut state = PickerState::new(ConstraintMode::Unrestricted, date(2024, 6, 1));
        assert!(state.select(date(2023, 1, 10)));

        state.set_mode(ConstraintMode::FutureOnly);
        assert_eq!(state.selected(), None, "past selection must be dropped");
        assert_eq!(
            (state.year(), state.month()),
            (2024, 6),
            "displayed month must snap back into range"
        );

        // Switching to the same mode changes nothing.
        let before = state.clone();
        state.set_mode(ConstraintMode::FutureOnly);
        assert_eq!(state, before);
    }

    #[test]
    fn overlay_flag_round_trip() {
        let mut state = PickerState::new(ConstraintMode::Unrestricted, date(2024, 6, 1));
        state.open();
        state.open(); // idempotent
        assert!(state.is_open());
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn canonical_text_matches_selection() {
        let mut state = PickerState::new(ConstraintMode::Unrestricted, date(2024, 6, 1));
        assert_eq!(state.canonical_text(), None);
        assert!(state.select(date(2024, 6, 5)));
        assert_eq!(state.canonical_text(), Some("2024-06-05".to_owned()));
    }
}
