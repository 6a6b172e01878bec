//! A date input widget for [`egui`]: a text field bound to a `String`, kept a
//! canonical `YYYY-MM-DD` date by a calendar popup.
//!
//! The popup navigates by year/month dropdowns, constrains what is selectable
//! (all days, past only, future only), highlights the weekend and the current
//! day, and commits selections back into the host text. Everything the popup
//! decides (month layout, selection rules, text parsing) lives in the UI-free
//! [`edate`] crate; this crate draws it.
//!
//! See [`DateInput`] for the widget and its knobs.

mod field;
mod popup;

pub use field::DateInput;

pub use edate;
pub use edate::{ConstraintMode, Weekend};
