use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDate, Utc};
use egui::{Area, Frame, InnerResponse, Key, Order, Response, TextEdit, Ui, Widget};

use edate::{ConstraintMode, PickerState, Weekend};

use crate::popup::{CalendarPopup, PopupAction};

/// A text field holding a `YYYY-MM-DD` date, with a calendar popup that keeps
/// it one.
///
/// The widget attaches to any `&mut String`: existing canonical text becomes
/// the initial selection, committing a day in the popup writes canonical text
/// back, and the returned [`Response`] reports `changed` when that happens.
/// Text that is not a canonical date (or that the active [`ConstraintMode`]
/// disallows) is left alone and simply starts the picker unselected.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// # let mut departure = String::new();
/// ui.add(
///     egui_date_input::DateInput::new(&mut departure)
///         .id_salt("departure")
///         .mode(egui_date_input::ConstraintMode::FutureOnly),
/// );
/// # });
/// ```
pub struct DateInput<'a> {
    text: &'a mut String,
    id_salt: Option<&'a str>,
    mode: ConstraintMode,
    weekend: Weekend,
    reference_today: Option<NaiveDate>,
    today_offset_hours: i64,
    year_range: RangeInclusive<i32>,
    show_icon: bool,
    placeholder: String,
    prefill_today: bool,
}

impl<'a> DateInput<'a> {
    /// Attach to the text value that holds the date.
    pub fn new(text: &'a mut String) -> Self {
        Self {
            text,
            id_salt: None,
            mode: ConstraintMode::Unrestricted,
            weekend: Weekend::default(),
            reference_today: None,
            today_offset_hours: 0,
            year_range: 1900..=2100,
            show_icon: true,
            placeholder: "YYYY-MM-DD".to_owned(),
            prefill_today: false,
        }
    }

    /// Add id source.
    /// Must be set if multiple date inputs are in the same Ui.
    #[inline]
    pub fn id_salt(mut self, id_salt: &'a str) -> Self {
        self.id_salt = Some(id_salt);
        self
    }

    /// Restrict which days can be picked. (Default: [`ConstraintMode::Unrestricted`])
    #[inline]
    pub fn mode(mut self, mode: ConstraintMode) -> Self {
        self.mode = mode;
        self
    }

    /// Which two weekdays to highlight as the weekend. (Default: [`Weekend::FRI_SAT`])
    #[inline]
    pub fn weekend(mut self, weekend: Weekend) -> Self {
        self.weekend = weekend;
        self
    }

    /// Fix the reference day all past/future constraints compare against,
    /// instead of reading the clock.
    ///
    /// The day (given or clock-derived) is captured anew each time the popup
    /// opens, then held fixed while it stays open.
    #[inline]
    pub fn reference_today(mut self, today: NaiveDate) -> Self {
        self.reference_today = Some(today);
        self
    }

    /// Shift the clock-derived reference day by this many hours. (Default: 0)
    ///
    /// Useful when the audience's calendar day leads or lags UTC and no
    /// explicit [`Self::reference_today`] is given.
    #[inline]
    pub fn today_offset_hours(mut self, hours: i64) -> Self {
        self.today_offset_hours = hours;
        self
    }

    /// Years offered in the popup's year dropdown, listed newest first.
    /// (Default: 1900..=2100)
    #[inline]
    pub fn year_range(mut self, year_range: RangeInclusive<i32>) -> Self {
        self.year_range = year_range;
        self
    }

    /// Show the calendar icon next to the field. (Default: true)
    ///
    /// Without it the popup opens when the field itself is clicked or focused.
    #[inline]
    pub fn show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    /// Hint text shown while the field is empty. (Default: "YYYY-MM-DD")
    #[inline]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Write the reference day into an empty field on first show. (Default: false)
    ///
    /// The prefill does not count as a user edit: the response does not report
    /// `changed` for it.
    #[inline]
    pub fn prefill_today(mut self, prefill_today: bool) -> Self {
        self.prefill_today = prefill_today;
        self
    }
}

impl Widget for DateInput<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let id = ui.make_persistent_id(self.id_salt);
        let today = self.reference_today.unwrap_or_else(|| {
            (Utc::now() + Duration::hours(self.today_offset_hours)).date_naive()
        });
        let stored = ui.data_mut(|data| data.get_persisted::<PickerState>(id));
        let first_frame = stored.is_none();
        let mut picker = match stored {
            Some(mut picker) => {
                picker.set_mode(self.mode);
                picker
            }
            None => {
                let picker = PickerState::attach(self.mode, today, self.text);
                if picker.selected().is_none() && !self.text.is_empty() {
                    log::debug!("ignoring {:?}: not a selectable YYYY-MM-DD date", self.text);
                }
                picker
            }
        };

        if first_frame && self.prefill_today && self.text.is_empty() {
            picker.jump_to_today();
            *self.text = picker.canonical_text().unwrap_or_default();
        }

        let (field_response, icon_response) = ui
            .horizontal(|ui| {
                let field_response = ui.add(
                    TextEdit::singleline(self.text)
                        .hint_text(self.placeholder)
                        .desired_width(96.0),
                );
                let icon_response = self.show_icon.then(|| ui.button("📆"));
                (field_response, icon_response)
            })
            .inner;

        let activated = field_response.clicked()
            || field_response.gained_focus()
            || icon_response.as_ref().is_some_and(Response::clicked);

        if activated && !picker.is_open() {
            // Re-sync from the host text on every open, capturing the
            // reference day afresh: a stored picker may carry a day from
            // before midnight or from a previous run. While the popup stays
            // open the captured day is held fixed.
            let mut reopened = PickerState::attach(self.mode, today, self.text);
            reopened.open();
            picker = reopened;
        }

        let mut response = match icon_response {
            Some(icon_response) => field_response | icon_response,
            None => field_response,
        };

        if picker.is_open() {
            let width = 242.0;
            let mut pos = response.rect.left_bottom();
            if pos.x + width > ui.clip_rect().right() {
                pos.x = ui.clip_rect().right() - width;
            }
            pos.x = pos.x.max(ui.clip_rect().left());

            let InnerResponse {
                inner: outcome,
                response: area_response,
            } = Area::new(id.with("popup"))
                .order(Order::Foreground)
                .fixed_pos(pos)
                .show(ui.ctx(), |ui| {
                    Frame::popup(ui.style())
                        .show(ui, |ui| {
                            ui.set_min_width(width);
                            ui.set_max_width(width);

                            CalendarPopup {
                                picker: &mut picker,
                                weekend: self.weekend,
                                year_range: self.year_range,
                            }
                            .draw(ui)
                        })
                        .inner
                });

            match outcome.action {
                PopupAction::Committed => {
                    *self.text = picker.canonical_text().unwrap_or_default();
                    response.mark_changed();
                    picker.close();
                    log::trace!("committed {:?}", self.text);
                }
                PopupAction::Cleared => {
                    self.text.clear();
                    response.mark_changed();
                    picker.close();
                }
                PopupAction::Dismissed => picker.close(),
                PopupAction::None => {}
            }

            if picker.is_open()
                && !outcome.combo_open
                && !activated
                && (ui.input(|i| i.key_pressed(Key::Escape)) || area_response.clicked_elsewhere())
            {
                picker.close();
            }
        }

        ui.data_mut(|data| data.insert_persisted(id, picker));

        response
    }
}
