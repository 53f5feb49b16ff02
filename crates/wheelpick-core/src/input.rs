//! Pointer event routing for mouse/touch input.
//!
//! Hosts translate their native events into [`PointerEvent`]s and feed
//! them through a [`PointerRouter`], which projects positions onto the
//! wheel axis and tells taps apart from drags.

use crate::picker::WheelPicker;
use crate::scheduler::FrameScheduler;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Tap detection constants.
const TAP_MAX_DISTANCE: f64 = 8.0;
const TAP_MAX_TIME_MS: f64 = 300.0;

/// Direction the wheel scrolls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Coordinate of a point along this axis.
    pub fn along(self, point: Point) -> f64 {
        match self {
            Axis::Vertical => point.y,
            Axis::Horizontal => point.x,
        }
    }

    /// Component of a vector along this axis.
    pub fn along_vec(self, delta: Vec2) -> f64 {
        match self {
            Axis::Vertical => delta.y,
            Axis::Horizontal => delta.x,
        }
    }
}

/// Pointer event type for unified mouse/touch handling.
///
/// Times are in milliseconds on the same clock as frame ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, time: f64 },
    Move { position: Point, time: f64 },
    Up { position: Point, time: f64 },
    /// The host lost the pointer (touch cancel, focus loss).
    Cancel,
    /// Wheel/trackpad travel in pixels.
    Scroll { delta: Vec2 },
}

#[derive(Debug, Clone, Copy)]
struct Press {
    position: Point,
    time: f64,
    travel: f64,
}

/// Routes pointer events into a picker.
#[derive(Debug, Clone)]
pub struct PointerRouter {
    /// Axis the wheel moves along.
    pub axis: Axis,
    /// Coordinate of the selection band center along `axis`.
    pub band_center: f64,
    press: Option<Press>,
}

impl PointerRouter {
    /// Create a router for a wheel whose selection band is centered at
    /// `band_center`.
    pub fn new(axis: Axis, band_center: f64) -> Self {
        Self {
            axis,
            band_center,
            press: None,
        }
    }

    /// Check if a press is in progress.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Feed one event to the picker.
    pub fn handle<T, S: FrameScheduler>(
        &mut self,
        picker: &mut WheelPicker<T, S>,
        event: PointerEvent,
    ) {
        match event {
            PointerEvent::Down { position, time } => {
                self.press = Some(Press {
                    position,
                    time,
                    travel: 0.0,
                });
                picker.on_pointer_down(self.axis.along(position), time);
            }
            PointerEvent::Move { position, time } => {
                if let Some(press) = self.press.as_mut() {
                    let distance = press.position.distance(position);
                    press.travel = press.travel.max(distance);
                    picker.on_pointer_move(self.axis.along(position), time);
                }
            }
            PointerEvent::Up { position, time } => {
                let Some(press) = self.press.take() else {
                    return;
                };
                let travel = press.travel.max(press.position.distance(position));
                let is_tap = travel < TAP_MAX_DISTANCE && time - press.time < TAP_MAX_TIME_MS;
                if is_tap {
                    let row = picker.row_at(self.axis.along(press.position), self.band_center);
                    log::debug!("Tap on row {}", row);
                    picker.tap_index(row);
                } else {
                    picker.on_pointer_up(time);
                }
            }
            PointerEvent::Cancel => {
                self.press = None;
                picker.on_pointer_cancel();
            }
            PointerEvent::Scroll { delta } => {
                if self.press.is_none() {
                    picker.on_scroll(self.axis.along_vec(delta));
                }
            }
        }
    }
}
