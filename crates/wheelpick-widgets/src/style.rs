//! Visual styles for wheel pickers.
//!
//! The engine decides where rows are and how strongly each is weighted;
//! a style decides what that looks like.

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Stroke};
use wheelpick_core::VisualWeight;

use crate::{sizing, theme};

/// One row to paint.
#[derive(Debug, Clone, Copy)]
pub struct RowPaint<'a> {
    pub label: &'a str,
    /// Center of the row in screen space.
    pub center: Pos2,
    pub weight: VisualWeight,
    /// Whether this row is nearest the selection band.
    pub in_band: bool,
}

/// Presentation strategy for a wheel.
pub trait WheelStyle {
    /// Paint behind the rows. `band` is the selection band.
    fn paint_background(&self, painter: &Painter, rect: Rect, band: Rect);

    /// Paint a single row.
    fn paint_row(&self, painter: &Painter, row: RowPaint<'_>);
}

/// Text-only rows fading with distance.
#[derive(Clone, Debug)]
pub struct PlainStyle {
    pub font_size: f32,
    pub text: Color32,
}

impl Default for PlainStyle {
    fn default() -> Self {
        Self {
            font_size: 18.0,
            text: theme::TEXT,
        }
    }
}

impl WheelStyle for PlainStyle {
    fn paint_background(&self, _painter: &Painter, _rect: Rect, _band: Rect) {}

    fn paint_row(&self, painter: &Painter, row: RowPaint<'_>) {
        paint_label(painter, row, self.font_size, self.text);
    }
}

/// Native-looking wheel: highlighted band with separators, accent text in
/// the band.
#[derive(Clone, Debug)]
pub struct BandStyle {
    pub font_size: f32,
    pub text: Color32,
    pub selected_text: Color32,
    pub band_fill: Color32,
    pub separator: Stroke,
    pub corner_radius: u8,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            text: theme::TEXT_MUTED,
            selected_text: theme::ACCENT,
            band_fill: theme::SELECTED_BG,
            separator: Stroke::new(1.0, theme::BORDER),
            corner_radius: sizing::CORNER_RADIUS,
        }
    }
}

impl BandStyle {
    /// Smaller band for inline hour/minute pickers.
    pub fn compact() -> Self {
        Self {
            font_size: 16.0,
            corner_radius: 0,
            ..Default::default()
        }
    }
}

impl WheelStyle for BandStyle {
    fn paint_background(&self, painter: &Painter, _rect: Rect, band: Rect) {
        painter.rect_filled(band, CornerRadius::same(self.corner_radius), self.band_fill);
        painter.line_segment([band.left_top(), band.right_top()], self.separator);
        painter.line_segment([band.left_bottom(), band.right_bottom()], self.separator);
    }

    fn paint_row(&self, painter: &Painter, row: RowPaint<'_>) {
        let color = if row.in_band {
            self.selected_text
        } else {
            self.text
        };
        paint_label(painter, row, self.font_size, color);
    }
}

/// Scale and fade a row's label by its weight.
pub fn weighted_color(color: Color32, weight: VisualWeight) -> Color32 {
    color.gamma_multiply(weight.opacity.clamp(0.0, 1.0))
}

fn paint_label(painter: &Painter, row: RowPaint<'_>, font_size: f32, color: Color32) {
    painter.text(
        row.center,
        Align2::CENTER_CENTER,
        row.label,
        FontId::proportional(font_size * row.weight.scale),
        weighted_color(color, row.weight),
    );
}
