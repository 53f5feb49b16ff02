//! Index/offset conversion and per-row visual weighting.
//!
//! Offsets follow the wheel convention: row `i` is centered when the list
//! is translated by `-i * item_height`, so offsets are zero or negative at
//! rest.

use crate::config::PickerConfig;
use serde::{Deserialize, Serialize};

/// Offset at which row `index` sits in the selection band.
pub fn offset_from_index(index: usize, item_height: f64) -> f64 {
    -(index as f64) * item_height
}

/// Row nearest to `offset`, always within `[0, len - 1]`.
///
/// `len == 0` is treated as a single row.
pub fn index_from_offset(offset: f64, item_height: f64, len: usize) -> usize {
    let last = len.saturating_sub(1);
    let raw = (-offset / item_height).round();
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= last as f64 {
        last
    } else {
        raw as usize
    }
}

/// Allowed resting offsets for a list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetBounds {
    /// Offset of the last row (most negative).
    pub min: f64,
    /// Offset of the first row, always 0.
    pub max: f64,
}

impl OffsetBounds {
    /// Bounds for `len` rows of `item_height`.
    pub fn new(len: usize, item_height: f64) -> Self {
        Self {
            min: offset_from_index(len.saturating_sub(1), item_height),
            max: 0.0,
        }
    }

    /// Clamp an offset into the bounds.
    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(self.min, self.max)
    }

    /// Check if an offset lies within the bounds.
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.min && offset <= self.max
    }

    /// Apply overscroll resistance to a raw drag offset.
    ///
    /// `resistance == 0` pins the offset to the nearest bound,
    /// `resistance == 1` passes it through unchanged.
    pub fn rubber_band(&self, offset: f64, resistance: f64) -> f64 {
        if offset > self.max {
            self.max + (offset - self.max) * resistance
        } else if offset < self.min {
            self.min + (offset - self.min) * resistance
        } else {
            offset
        }
    }
}

/// Opacity and scale of a row at some distance from the selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualWeight {
    pub opacity: f32,
    pub scale: f32,
}

impl VisualWeight {
    /// Weight of the selected row.
    pub const FULL: Self = Self {
        opacity: 1.0,
        scale: 1.0,
    };
}

/// Weight of a row `distance` whole rows away from the selection.
pub fn visual_weight(distance: usize, config: &PickerConfig) -> VisualWeight {
    visual_weight_at(distance as f64, config)
}

/// Weight at a fractional distance, for rendering while the wheel moves.
pub fn visual_weight_at(distance: f64, config: &PickerConfig) -> VisualWeight {
    let d = distance.abs() as f32;
    VisualWeight {
        opacity: falloff(d, config.opacity_step, config.opacity_floor),
        scale: falloff(d, config.scale_step, config.scale_floor),
    }
}

fn falloff(distance: f32, step: f32, floor: f32) -> f32 {
    (1.0 - distance * step).max(floor).clamp(0.0, 1.0)
}
