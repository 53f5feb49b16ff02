//! Momentum projection, snap-to-row and the eased settle animation.

use crate::config::PickerConfig;
use crate::mapping::{OffsetBounds, index_from_offset, offset_from_index};
use crate::tracker::Release;

/// Where a released wheel comes to rest, and how long it takes to get there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlePlan {
    pub target_index: usize,
    pub target_offset: f64,
    pub duration_ms: f64,
}

/// Resolve a release into a resting row.
///
/// The momentum target is clamped to the list before rounding, so any
/// velocity lands on a valid row.
pub fn resolve(
    release: Release,
    len: usize,
    item_height: f64,
    config: &PickerConfig,
) -> SettlePlan {
    let bounds = OffsetBounds::new(len, item_height);
    let projected = release.offset + release.velocity * config.momentum_coefficient;
    let target = if projected.is_finite() {
        bounds.clamp(projected)
    } else {
        bounds.clamp(release.offset)
    };
    let target_index = index_from_offset(target, item_height, len);

    SettlePlan {
        target_index,
        target_offset: offset_from_index(target_index, item_height),
        duration_ms: settle_duration(release.velocity, config),
    }
}

/// Settle duration for a release speed.
///
/// Faster flicks settle a little slower; the result always lies within
/// `[min_duration_ms, max_duration_ms]`.
pub fn settle_duration(velocity: f64, config: &PickerConfig) -> f64 {
    let speed = if velocity.is_finite() {
        velocity.abs().min(config.velocity_cap)
    } else {
        config.velocity_cap
    };
    (config.base_duration_ms + speed * config.velocity_duration_factor)
        .clamp(config.min_duration_ms, config.max_duration_ms)
}

/// Ease-out curve `1 - (1 - t)^p`, with `t` clamped to `[0, 1]`.
pub fn ease_out(progress: f64, power: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powf(power)
}

/// A running settle animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub start_offset: f64,
    pub target_offset: f64,
    pub target_index: usize,
    /// Set by the first frame after the animation is scheduled.
    pub start_time: Option<f64>,
    pub duration_ms: f64,
    /// Whether completion reports the new index to the owner.
    pub notify: bool,
}

/// One sampled frame of an [`Animation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub offset: f64,
    pub progress: f64,
}

impl Frame {
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

impl Animation {
    /// Animate from `start_offset` toward the row in `plan`.
    pub fn new(start_offset: f64, plan: SettlePlan, notify: bool) -> Self {
        Self {
            start_offset,
            target_offset: plan.target_offset,
            target_index: plan.target_index,
            start_time: None,
            duration_ms: plan.duration_ms,
            notify,
        }
    }

    /// Sample the animation at `now`.
    ///
    /// The first sample pins the start time. A zero duration completes
    /// immediately.
    pub fn sample(&mut self, now: f64, ease_power: f64) -> Frame {
        let start = *self.start_time.get_or_insert(now);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now - start) / self.duration_ms).clamp(0.0, 1.0)
        };

        let offset = if progress >= 1.0 {
            self.target_offset
        } else {
            let eased = ease_out(progress, ease_power);
            self.start_offset + (self.target_offset - self.start_offset) * eased
        };

        Frame { offset, progress }
    }

    /// Distance the animation covers.
    pub fn distance(&self) -> f64 {
        (self.target_offset - self.start_offset).abs()
    }
}
