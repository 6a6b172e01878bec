//! Calendar-day math and date-picker state for GUI work.
//!
//! This crate is the UI-free core of a date-selection widget: it lays out month
//! grids, enforces past/future selection rules against a fixed reference day,
//! and converts selections to and from their canonical `YYYY-MM-DD` text form.
//! A rendering layer (e.g. `egui_date_input`) draws what [`PickerState`] and
//! [`MonthGrid`] describe and feeds interactions back in.
//!
//! Months are numbered `1..=12` and week rows start on Sunday.
//!
//! ```
//! use edate::{ConstraintMode, PickerState, Weekend};
//!
//! let today = edate::parse_date("2024-03-15").unwrap();
//! let mut picker = PickerState::attach(ConstraintMode::FutureOnly, today, "2024-04-02");
//! assert_eq!(picker.canonical_text().as_deref(), Some("2024-04-02"));
//!
//! // Navigation can never escape the selectable range:
//! picker.set_month(1);
//! assert_eq!((picker.year(), picker.month()), (2024, 3));
//!
//! // The grid is what a calendar view renders:
//! let grid = picker.grid(Weekend::default());
//! assert_eq!(grid.cells().len() % 7, 0);
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod calendar;
mod grid;
mod policy;
mod state;
mod text;

pub use calendar::{days_in_month, first_weekday_of_month, month_name};
pub use grid::{DayCell, MonthGrid};
pub use policy::{ConstraintMode, Weekend};
pub use state::PickerState;
pub use text::{ParseDateError, format_date, parse_date};
