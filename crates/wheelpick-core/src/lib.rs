//! WheelPick Core Library
//!
//! Platform-agnostic engine for touch/drag wheel pickers: drag tracking,
//! momentum, snap-to-row and eased settle animation, driven by an external
//! frame scheduler.

pub mod config;
pub mod datetime;
pub mod error;
pub mod input;
pub mod mapping;
pub mod picker;
pub mod scheduler;
pub mod settle;
pub mod tracker;

pub use config::PickerConfig;
pub use datetime::{DateField, DateWheels, Meridiem, TimeField, TimeWheels};
pub use error::{ConfigError, PickerError, PickerResult};
pub use input::{Axis, PointerEvent, PointerRouter};
pub use mapping::{OffsetBounds, VisualWeight, index_from_offset, offset_from_index, visual_weight};
pub use picker::{PickerPhase, VisualState, WheelPicker};
pub use scheduler::{FrameScheduler, ManualScheduler, TickId};
pub use settle::{SettlePlan, ease_out};
