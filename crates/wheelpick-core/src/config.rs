//! Tunable picker parameters.
//!
//! Every field has a default, so a JSON file only needs to name the values
//! it overrides:
//!
//! ```json
//! { "momentum_coefficient": 0.3, "ease_power": 2.0 }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Physics and visual tuning for a [`WheelPicker`](crate::WheelPicker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Seconds of travel projected from the release velocity.
    pub momentum_coefficient: f64,
    /// Exponent of the ease-out curve `1 - (1 - t)^p`.
    pub ease_power: f64,
    /// Settle duration before the velocity term is added.
    pub base_duration_ms: f64,
    /// Extra milliseconds per px/s of release speed.
    pub velocity_duration_factor: f64,
    /// Release speed above which the duration stops growing.
    pub velocity_cap: f64,
    /// Lower bound on any settle animation.
    pub min_duration_ms: f64,
    /// Upper bound on any settle animation.
    pub max_duration_ms: f64,
    /// Opacity never drops below this.
    pub opacity_floor: f32,
    /// Opacity lost per row of distance from the selection.
    pub opacity_step: f32,
    /// Scale never drops below this.
    pub scale_floor: f32,
    /// Scale lost per row of distance from the selection.
    pub scale_step: f32,
    /// Weight of the newest velocity sample in the exponential blend.
    pub velocity_smoothing: f64,
    /// A release after the pointer has rested this long carries no momentum.
    pub velocity_idle_ms: f64,
    /// Share of drag travel kept past either end. 0 disables overscroll
    /// resistance and tracks the pointer 1:1.
    pub rubber_band: f64,
    /// Rows visible in the viewport, selection row included.
    pub visible_rows: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            momentum_coefficient: 0.25,
            ease_power: 3.0,
            base_duration_ms: 200.0,
            velocity_duration_factor: 0.1,
            velocity_cap: 3000.0,
            min_duration_ms: 150.0,
            max_duration_ms: 500.0,
            opacity_floor: 0.3,
            opacity_step: 0.25,
            scale_floor: 0.85,
            scale_step: 0.05,
            velocity_smoothing: 0.8,
            velocity_idle_ms: 100.0,
            rubber_band: 0.0,
            visible_rows: 5,
        }
    }
}

impl PickerConfig {
    /// Tighter preset used by the small inline pickers (hour/minute rows).
    pub fn compact() -> Self {
        Self {
            momentum_coefficient: 0.2,
            ease_power: 2.0,
            base_duration_ms: 150.0,
            velocity_duration_factor: 0.05,
            opacity_step: 0.3,
            scale_floor: 0.8,
            scale_step: 0.1,
            visible_rows: 3,
            ..Default::default()
        }
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("momentum_coefficient", self.momentum_coefficient, 0.0, 1.0)?;
        check_range("ease_power", self.ease_power, 2.0, 3.0)?;
        check_non_negative("base_duration_ms", self.base_duration_ms)?;
        check_non_negative("velocity_duration_factor", self.velocity_duration_factor)?;
        check_non_negative("velocity_cap", self.velocity_cap)?;
        check_non_negative("min_duration_ms", self.min_duration_ms)?;
        check_non_negative("max_duration_ms", self.max_duration_ms)?;
        if self.max_duration_ms < self.min_duration_ms {
            return Err(ConfigError::OutOfRange {
                field: "max_duration_ms",
                value: self.max_duration_ms,
                reason: "must not be less than min_duration_ms",
            });
        }
        check_range("opacity_floor", self.opacity_floor as f64, 0.0, 1.0)?;
        check_range("opacity_step", self.opacity_step as f64, 0.0, 1.0)?;
        check_range("scale_floor", self.scale_floor as f64, 0.0, 1.0)?;
        check_range("scale_step", self.scale_step as f64, 0.0, 1.0)?;
        if self.velocity_smoothing <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "velocity_smoothing",
                value: self.velocity_smoothing,
                reason: "must be greater than 0",
            });
        }
        check_range("velocity_smoothing", self.velocity_smoothing, 0.0, 1.0)?;
        check_non_negative("velocity_idle_ms", self.velocity_idle_ms)?;
        check_range("rubber_band", self.rubber_band, 0.0, 1.0)?;
        if self.visible_rows == 0 {
            return Err(ConfigError::OutOfRange {
                field: "visible_rows",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Parse a JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            reason: "outside allowed range",
        });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            reason: "must be a non-negative finite number",
        });
    }
    Ok(())
}
