//! egui adapter for a [`WheelPicker`].

use egui::{Id, Pos2, Rect, Response, Sense, Ui, vec2};
use kurbo::{Point, Vec2 as KVec2};
use std::fmt::Display;
use wheelpick_core::{Axis, PointerEvent, PointerRouter, WheelPicker};

use crate::scheduler::EguiScheduler;
use crate::style::{RowPaint, WheelStyle};

/// Rows painted beyond the visible ones so they slide in smoothly.
const OVERDRAW_ROWS: usize = 1;

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x as f64, pos.y as f64)
}

/// A vertical wheel drawn into an egui [`Ui`].
///
/// Feeds egui pointer input and frame ticks into the picker, then paints
/// its current visual state. The response is marked changed whenever the
/// selection changed this frame.
pub struct WheelView<'a, T> {
    picker: &'a mut WheelPicker<T, EguiScheduler>,
    style: &'a dyn WheelStyle,
    width: f32,
    id_salt: Id,
    label: Option<Box<dyn Fn(&T) -> String + 'a>>,
}

impl<'a, T: Display> WheelView<'a, T> {
    pub fn new(
        picker: &'a mut WheelPicker<T, EguiScheduler>,
        style: &'a dyn WheelStyle,
        id_salt: impl std::hash::Hash,
    ) -> Self {
        Self {
            picker,
            style,
            width: 64.0,
            id_salt: Id::new(id_salt),
            label: None,
        }
    }
}

impl<'a, T> WheelView<'a, T> {
    /// Set the column width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Format rows with a custom label instead of `Display`.
    pub fn label(mut self, label: impl Fn(&T) -> String + 'a) -> Self {
        self.label = Some(Box::new(label));
        self
    }

    /// Show the wheel.
    pub fn show(self, ui: &mut Ui) -> Response
    where
        T: Display,
    {
        let label: Box<dyn Fn(&T) -> String + 'a> = match self.label {
            Some(label) => label,
            None => Box::new(|item: &T| item.to_string()),
        };
        show_wheel(self.picker, self.style, self.width, self.id_salt, ui, &*label)
    }
}

fn show_wheel<T>(
    picker: &mut WheelPicker<T, EguiScheduler>,
    style: &dyn WheelStyle,
    width: f32,
    id_salt: Id,
    ui: &mut Ui,
    label: &dyn Fn(&T) -> String,
) -> Response {
    let item_height = picker.item_height() as f32;
    let rows = picker.config().visible_rows;
    let size = vec2(width, item_height * rows as f32);
    let (rect, mut response) = ui.allocate_exact_size(size, Sense::click_and_drag());

    let now = ui.input(|i| i.time) * 1000.0;
    let before = picker.selected_index();

    if let Some(tick) = picker.scheduler_mut().take_pending() {
        picker.on_frame(tick, now);
    }

    let id = ui.id().with(id_salt);
    let mut router = ui
        .data(|d| d.get_temp::<PointerRouter>(id))
        .unwrap_or_else(|| PointerRouter::new(Axis::Vertical, 0.0));
    router.band_center = rect.center().y as f64;

    for event in pointer_events(ui, &response, now) {
        router.handle(picker, event);
    }
    ui.data_mut(|d| d.insert_temp(id, router));

    if picker.selected_index() != before {
        log::debug!(
            "Wheel {:?} selection {} -> {}",
            id_salt,
            before,
            picker.selected_index()
        );
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        paint(ui, picker, style, rect, label);
    }

    response
}

/// Translate this frame's egui interaction into pointer events.
fn pointer_events(ui: &Ui, response: &Response, now: f64) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    let latest = response.interact_pointer_pos().map(to_point);

    // Press as soon as the button goes down, so a held finger catches a
    // spinning wheel before egui decides between click and drag.
    if response.is_pointer_button_down_on() && ui.input(|i| i.pointer.any_pressed()) {
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .map(to_point)
            .or(latest);
        if let Some(position) = origin {
            events.push(PointerEvent::Down { position, time: now });
        }
    }
    if response.dragged() {
        if let Some(position) = latest {
            events.push(PointerEvent::Move { position, time: now });
        }
    }
    if response.drag_stopped() || response.clicked() {
        let position = latest
            .or_else(|| ui.input(|i| i.pointer.latest_pos()).map(to_point))
            .unwrap_or_default();
        events.push(PointerEvent::Up { position, time: now });
    }
    if response.hovered() {
        let delta = ui.input(|i| i.raw_scroll_delta);
        if delta.y != 0.0 {
            events.push(PointerEvent::Scroll {
                delta: KVec2::new(delta.x as f64, delta.y as f64),
            });
        }
    }

    events
}

fn paint<T>(
    ui: &Ui,
    picker: &WheelPicker<T, EguiScheduler>,
    style: &dyn WheelStyle,
    rect: Rect,
    label: &dyn Fn(&T) -> String,
) {
    let painter = ui.painter_at(rect);
    let item_height = picker.item_height() as f32;
    let band = Rect::from_center_size(rect.center(), vec2(rect.width(), item_height));
    style.paint_background(&painter, rect, band);

    let offset = picker.offset() as f32;
    let center = picker.visual_index();
    let reach = picker.config().visible_rows / 2 + OVERDRAW_ROWS;
    let first = center.saturating_sub(reach);
    let last = (center + reach).min(picker.len() - 1);

    for (index, item) in picker.items().iter().enumerate().take(last + 1).skip(first) {
        let y = rect.center().y + offset + index as f32 * item_height;
        let text = label(item);
        style.paint_row(
            &painter,
            RowPaint {
                label: &text,
                center: Pos2::new(rect.center().x, y),
                weight: picker.smooth_weight(index),
                in_band: index == center,
            },
        );
    }
}
