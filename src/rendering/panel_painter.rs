//! Low-level painting for grid panels and the grid overlay.
//!
//! Colors come from the active egui visuals; the widget has no theme of its own.

use eframe::egui;
use egui::{Color32, Stroke};
use crate::domain::GridMetrics;
use crate::rendering::grid_layout::grid_lines;

/// Corner radius of panel frames.
pub const PANEL_ROUNDING: f32 = 4.0;
/// Opacity multiplier for the panel being dragged.
pub const PREVIEW_OPACITY: f32 = 0.8;

/// Paints the decorative grid lines. Call before any panel so the lines stay
/// beneath them.
pub fn paint_grid_overlay(painter: &egui::Painter, metrics: &GridMetrics, height: f32, visuals: &egui::Visuals) {
    let stroke = Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color.gamma_multiply(0.4));
    for segment in grid_lines(metrics, height) {
        painter.line_segment(segment, stroke);
    }
}

/// Paints a panel's background and border.
pub fn paint_panel_frame(painter: &egui::Painter, rect: egui::Rect, visuals: &egui::Visuals, hovered: bool) {
    let stroke = if hovered {
        visuals.widgets.hovered.bg_stroke
    } else {
        visuals.window_stroke()
    };
    painter.rect_filled(rect, PANEL_ROUNDING, visuals.window_fill());
    painter.rect_stroke(rect, PANEL_ROUNDING, stroke, egui::StrokeKind::Inside);
}

/// Paints the dragged panel: drop shadow, translucent fill and a highlighted
/// border.
pub fn paint_preview_frame(painter: &egui::Painter, rect: egui::Rect, visuals: &egui::Visuals) {
    painter.rect_filled(
        rect.translate(egui::vec2(4.0, 6.0)).expand(2.0),
        PANEL_ROUNDING + 2.0,
        Color32::from_black_alpha(60),
    );
    painter.rect_filled(rect, PANEL_ROUNDING, visuals.window_fill().gamma_multiply(PREVIEW_OPACITY));
    painter.rect_stroke(rect, PANEL_ROUNDING, visuals.selection.stroke, egui::StrokeKind::Inside);
}

/// Paints the dashed outline marking the dragged panel's committed slot.
pub fn paint_placeholder(painter: &egui::Painter, rect: egui::Rect, visuals: &egui::Visuals) {
    let rect = rect.shrink(1.0);
    painter.rect_filled(rect, PANEL_ROUNDING, visuals.faint_bg_color);

    let outline = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    let stroke = Stroke::new(1.5, visuals.widgets.noninteractive.fg_stroke.color.gamma_multiply(0.6));
    painter.extend(egui::Shape::dashed_line(&outline, stroke, 6.0, 4.0));
}

/// Paints the default resize grip: three diagonal strokes.
pub fn paint_default_handle(painter: &egui::Painter, rect: egui::Rect, visuals: &egui::Visuals, hot: bool) {
    let color = if hot {
        visuals.selection.stroke.color
    } else {
        visuals.widgets.noninteractive.fg_stroke.color.gamma_multiply(0.6)
    };
    let stroke = Stroke::new(1.0, color);
    let side = rect.width().min(rect.height());

    for step in 1..=3 {
        let offset = side * step as f32 / 4.0;
        painter.line_segment(
            [
                egui::pos2(rect.right() - offset, rect.bottom()),
                egui::pos2(rect.right(), rect.bottom() - offset),
            ],
            stroke,
        );
    }
}
