//! Multi-column date and time pickers.

use egui::{Response, RichText, Ui};
use wheelpick_core::datetime::month_label;
use wheelpick_core::{DateWheels, TimeWheels};

use crate::scheduler::EguiScheduler;
use crate::style::WheelStyle;
use crate::theme;
use crate::wheel::WheelView;

/// Draw a section label (small, muted text).
fn section_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(10.0).color(theme::TEXT_MUTED));
}

fn column(ui: &mut Ui, title: &str, add: impl FnOnce(&mut Ui) -> Response) -> Response {
    ui.vertical(|ui| {
        section_label(ui, title);
        add(ui)
    })
    .inner
}

/// Show day, month and year wheels side by side.
///
/// Returns true if any column's selection changed this frame. The day list
/// is re-synced after drawing so a month or year change takes effect on the
/// next frame.
pub fn show_date_wheels(
    ui: &mut Ui,
    wheels: &mut DateWheels<EguiScheduler>,
    style: &dyn WheelStyle,
) -> bool {
    let changed = ui
        .horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = crate::sizing::COLUMN_GAP;
            let day = column(ui, "Day", |ui| {
                WheelView::new(&mut wheels.day, style, "day")
                    .width(44.0)
                    .label(|d| format!("{:02}", d))
                    .show(ui)
            });
            let month = column(ui, "Month", |ui| {
                WheelView::new(&mut wheels.month, style, "month")
                    .width(56.0)
                    .label(|m| month_label(*m).to_string())
                    .show(ui)
            });
            let year = column(ui, "Year", |ui| {
                WheelView::new(&mut wheels.year, style, "year")
                    .width(64.0)
                    .show(ui)
            });
            day.changed() || month.changed() || year.changed()
        })
        .inner;

    if wheels.sync_days() {
        ui.ctx().request_repaint();
    }
    changed
}

/// Show hour, minute and AM/PM wheels side by side.
///
/// Returns true if any column's selection changed this frame.
pub fn show_time_wheels(
    ui: &mut Ui,
    wheels: &mut TimeWheels<EguiScheduler>,
    style: &dyn WheelStyle,
) -> bool {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = crate::sizing::COLUMN_GAP;
        let hour = column(ui, "Hour", |ui| {
            WheelView::new(&mut wheels.hour, style, "hour").width(44.0).show(ui)
        });
        let minute = column(ui, "Min", |ui| {
            WheelView::new(&mut wheels.minute, style, "minute")
                .width(44.0)
                .label(|m| format!("{:02}", m))
                .show(ui)
        });
        let meridiem = column(ui, "", |ui| {
            WheelView::new(&mut wheels.meridiem, style, "meridiem")
                .width(48.0)
                .show(ui)
        });
        hour.changed() || minute.changed() || meridiem.changed()
    })
    .inner
}
