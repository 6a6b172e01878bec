use std::ops::RangeInclusive;

use chrono::Datelike as _;
use egui::{Button, Color32, ComboBox, Grid, RichText, Ui, vec2};

use edate::{PickerState, Weekend, month_name};

/// What the user did to the popup this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PopupAction {
    None,
    /// A day was committed: write the canonical text and close.
    Committed,
    /// The selection was cleared: empty the text and close.
    Cleared,
    /// Close without touching the text.
    Dismissed,
}

pub(crate) struct PopupOutcome {
    pub action: PopupAction,
    /// A dropdown is open, so outside-click dismissal must hold off:
    /// clicks on dropdown entries land outside the popup area.
    pub combo_open: bool,
}

pub(crate) struct CalendarPopup<'a> {
    pub picker: &'a mut PickerState,
    pub weekend: Weekend,
    pub year_range: RangeInclusive<i32>,
}

impl CalendarPopup<'_> {
    pub fn draw(&mut self, ui: &mut Ui) -> PopupOutcome {
        let mut action = PopupAction::None;
        let mut combo_open = false;
        let today = self.picker.today();
        let mode = self.picker.mode();
        let cell_size = vec2(28.0, 20.0);

        ui.spacing_mut().item_spacing = vec2(2.0, 2.0);

        // Year and month dropdowns, newest year first. Entries the mode rules
        // out entirely are not offered, so picking one can never force a snap.
        ui.horizontal(|ui| {
            let mut year = self.picker.year();
            let year_box = ComboBox::from_id_salt("date_input_year")
                .width(74.0)
                .selected_text(year.to_string())
                .show_ui(ui, |ui| {
                    for candidate in self.year_range.clone().rev() {
                        if mode.year_selectable(candidate, today) {
                            ui.selectable_value(&mut year, candidate, candidate.to_string());
                        }
                    }
                });
            combo_open |= year_box.inner.is_some();
            if year != self.picker.year() {
                self.picker.set_year(year);
            }

            let mut month = self.picker.month();
            let month_box = ComboBox::from_id_salt("date_input_month")
                .width(104.0)
                .selected_text(month_name(month))
                .show_ui(ui, |ui| {
                    for candidate in 1..=12 {
                        if mode.month_selectable(self.picker.year(), candidate, today) {
                            ui.selectable_value(&mut month, candidate, month_name(candidate));
                        }
                    }
                });
            combo_open |= month_box.inner.is_some();
            if month != self.picker.month() {
                self.picker.set_month(month);
            }
        });

        let grid = self.picker.grid(self.weekend);
        Grid::new("date_input_days")
            .min_col_width(cell_size.x)
            .spacing(vec2(2.0, 2.0))
            .show(ui, |ui| {
                for name in ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"] {
                    ui.label(name);
                }
                ui.end_row();

                for week in grid.weeks() {
                    for cell in week {
                        let Some(date) = cell.date else {
                            ui.label("");
                            continue;
                        };

                        let fill = if cell.selected {
                            ui.visuals().selection.bg_fill
                        } else if cell.weekend {
                            if ui.visuals().dark_mode {
                                Color32::DARK_RED
                            } else {
                                Color32::LIGHT_RED
                            }
                        } else {
                            ui.visuals().extreme_bg_color
                        };
                        let text_color = ui.visuals().widgets.inactive.text_color();

                        let response = ui.add_enabled(
                            !cell.disabled,
                            Button::new(RichText::new(date.day().to_string()).color(text_color))
                                .fill(fill)
                                .min_size(cell_size),
                        );

                        if cell.today {
                            // Encircle the reference day
                            let stroke = ui.visuals().widgets.inactive.fg_stroke;
                            ui.painter()
                                .circle_stroke(response.rect.center(), 8.0, stroke);
                        }

                        if response.clicked() && self.picker.select(date) {
                            action = PopupAction::Committed;
                        }
                    }
                    ui.end_row();
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                self.picker.clear();
                action = PopupAction::Cleared;
            }
            if ui.button("Today").clicked() {
                self.picker.jump_to_today();
                action = PopupAction::Committed;
            }
            if ui.button("Close").clicked() {
                action = PopupAction::Dismissed;
            }
        });

        PopupOutcome { action, combo_open }
    }
}
