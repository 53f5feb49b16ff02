//! egui widgets for wheel pickers.
//!
//! - **Wheel**: [`WheelView`], a single scrollable column bound to a
//!   [`wheelpick_core::WheelPicker`]
//! - **Columns**: date and time pickers built from several wheels
//! - **Style**: presentation strategies for rows and the selection band
//! - **Scheduler**: frame ticks driven by egui repaints

pub mod columns;
pub mod scheduler;
pub mod style;
pub mod wheel;

pub use columns::{show_date_wheels, show_time_wheels};
pub use scheduler::EguiScheduler;
pub use style::{BandStyle, PlainStyle, RowPaint, WheelStyle, weighted_color};
pub use wheel::WheelView;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Default row height
    pub const ROW_HEIGHT: f32 = 36.0;
    /// Compact row height for inline pickers
    pub const ROW_HEIGHT_COMPACT: f32 = 28.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Gap between wheel columns
    pub const COLUMN_GAP: f32 = 4.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Selected background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(235, 245, 255);
}
