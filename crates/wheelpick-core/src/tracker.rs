//! Drag tracking: pointer samples in, live offset and release velocity out.

use crate::config::PickerConfig;
use crate::mapping::OffsetBounds;

/// State of a drag, alive only while the pointer is down.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    /// Pointer coordinate (along the wheel axis) at pointer-down.
    pub start_position: f64,
    /// Wheel offset at pointer-down.
    pub start_offset: f64,
    /// Most recent pointer coordinate.
    pub last_position: f64,
    /// Timestamp of the most recent sample, in milliseconds.
    pub last_time: f64,
    /// Smoothed velocity in px/s.
    pub velocity: f64,
    /// Current live offset.
    pub offset: f64,
}

/// Offset and velocity handed to the settle resolver on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub offset: f64,
    pub velocity: f64,
}

impl GestureState {
    /// Begin tracking at `position`, with the wheel currently at `offset`.
    pub fn start(position: f64, offset: f64, now: f64) -> Self {
        Self {
            start_position: position,
            start_offset: offset,
            last_position: position,
            last_time: now,
            velocity: 0.0,
            offset,
        }
    }

    /// Feed a pointer sample and return the new live offset.
    ///
    /// Samples with a non-increasing timestamp move the wheel but leave the
    /// velocity untouched.
    pub fn update(
        &mut self,
        position: f64,
        now: f64,
        bounds: &OffsetBounds,
        config: &PickerConfig,
    ) -> f64 {
        let raw = self.start_offset + (position - self.start_position);
        self.offset = if config.rubber_band > 0.0 {
            bounds.rubber_band(raw, config.rubber_band)
        } else {
            raw
        };

        let dt = now - self.last_time;
        if dt > 0.0 {
            let instant = (position - self.last_position) / dt * 1000.0;
            let alpha = config.velocity_smoothing;
            self.velocity = alpha * instant + (1.0 - alpha) * self.velocity;
            self.last_position = position;
            self.last_time = now;
        }

        self.offset
    }

    /// Finish the drag.
    ///
    /// If the pointer rested longer than `velocity_idle_ms` before release
    /// the velocity is discarded.
    pub fn release(&self, now: f64, config: &PickerConfig) -> Release {
        let idle = now - self.last_time;
        let velocity = if idle > config.velocity_idle_ms || !self.velocity.is_finite() {
            0.0
        } else {
            self.velocity
        };
        Release {
            offset: self.offset,
            velocity,
        }
    }
}
