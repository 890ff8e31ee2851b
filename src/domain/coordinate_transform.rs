//! Coordinate transform between screen pixels and grid units.
//!
//! This module provides pure functions for:
//! - Snapping pixel offsets and extents to grid units (round to nearest)
//! - Converting grid units back to pixels or container percentages
//! - Measuring the effective cell geometry of a laid-out container
//!
//! Every function is total: degenerate inputs (zero cell size, NaN) collapse
//! to the lower bound of the output range instead of failing.

use crate::config::{GridConfig, GridMode};
use crate::layout::{GridPos, GridSize};

/// Rounds `pixels / cell` to the nearest whole unit, or `None` when the
/// quotient is not a finite number.
fn nearest_units(pixels: f32, cell: f32) -> Option<f32> {
    let units = (pixels / cell).round();
    units.is_finite().then_some(units)
}

/// Converts a horizontal pixel offset into a column index in `[0, columns-1]`.
///
/// # Arguments
/// * `pixel_x` - Offset from the container's left edge
/// * `cell_width` - Effective cell width in pixels
/// * `columns` - Grid width in columns
pub fn pixel_to_grid_x(pixel_x: f32, cell_width: f32, columns: u32) -> u32 {
    let last_column = columns.saturating_sub(1);
    match nearest_units(pixel_x, cell_width) {
        Some(units) if units > 0.0 => (units as u32).min(last_column),
        _ => 0,
    }
}

/// Converts a vertical pixel offset into a row index `>= 0`. Rows are
/// unbounded below because the container grows to fit its content.
pub fn pixel_to_grid_y(pixel_y: f32, cell_height: f32) -> u32 {
    match nearest_units(pixel_y, cell_height) {
        Some(units) if units > 0.0 => units as u32,
        _ => 0,
    }
}

/// Converts a pixel width into a column span `>= 1`.
pub fn pixel_to_grid_w(pixel_w: f32, cell_width: f32) -> u32 {
    match nearest_units(pixel_w, cell_width) {
        Some(units) if units > 1.0 => units as u32,
        _ => 1,
    }
}

/// Converts a pixel height into a row span `>= 1`.
pub fn pixel_to_grid_h(pixel_h: f32, cell_height: f32) -> u32 {
    match nearest_units(pixel_h, cell_height) {
        Some(units) if units > 1.0 => units as u32,
        _ => 1,
    }
}

/// Converts grid units to pixels for a given cell size.
pub fn grid_to_pixels(units: u32, cell: f32) -> f32 {
    units as f32 * cell
}

/// Converts grid columns to a percentage of the container width.
pub fn grid_to_percent(units: u32, columns: u32) -> f32 {
    if columns == 0 {
        return 0.0;
    }
    units as f32 / columns as f32 * 100.0
}

/// Returns the cell width to use for conversions.
///
/// Fixed mode always uses `cell_width`. Fluid mode divides the measured
/// container width between the columns, falling back to `cell_width` when
/// there are no columns to divide by.
pub fn effective_cell_width(mode: GridMode, cell_width: f32, container_width: f32, columns: u32) -> f32 {
    match mode {
        GridMode::Fixed => cell_width,
        GridMode::Fluid if columns > 0 => container_width / columns as f32,
        GridMode::Fluid => cell_width,
    }
}

/// Cell geometry of a measured container, valid for one pointer tick or one
/// frame. Re-measure instead of caching: the container can reflow at any time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub mode: GridMode,
    /// Container rectangle in screen coordinates
    pub container: egui::Rect,
    pub cell_width: f32,
    pub cell_height: f32,
    pub columns: u32,
}

impl GridMetrics {
    /// Measures the grid inside `container`.
    ///
    /// Returns `None` when the container has not been laid out (missing or
    /// zero-width rectangle); callers skip the tick in that case.
    pub fn measure(config: &GridConfig, store_columns: u32, container: Option<egui::Rect>) -> Option<Self> {
        let container = container?;
        let width = container.width();
        if !width.is_finite() || width <= 0.0 || !container.min.is_finite() {
            return None;
        }

        let columns = config.effective_columns(store_columns);
        Some(Self {
            mode: config.mode,
            container,
            cell_width: effective_cell_width(config.mode, config.cell_width, width, columns),
            cell_height: config.cell_height,
            columns,
        })
    }

    /// Pointer position relative to the container's top-left corner.
    pub fn to_local(&self, pos: egui::Pos2) -> egui::Vec2 {
        pos - self.container.min
    }

    /// Snaps a container-local pixel offset to a grid position.
    pub fn snap_position(&self, local: egui::Vec2) -> GridPos {
        GridPos {
            x: pixel_to_grid_x(local.x, self.cell_width, self.columns),
            y: pixel_to_grid_y(local.y, self.cell_height),
        }
    }

    /// Snaps a pixel extent to a grid size.
    pub fn snap_size(&self, extent: egui::Vec2) -> GridSize {
        GridSize {
            w: pixel_to_grid_w(extent.x, self.cell_width),
            h: pixel_to_grid_h(extent.y, self.cell_height),
        }
    }

    /// Screen position of a grid position's top-left corner.
    pub fn cell_origin(&self, pos: GridPos) -> egui::Pos2 {
        let (left, _) = self.horizontal_span(pos.x, 0);
        egui::pos2(left, self.container.top() + grid_to_pixels(pos.y, self.cell_height))
    }

    /// Screen rectangle covered by an area of the grid.
    pub fn grid_rect(&self, pos: GridPos, size: GridSize) -> egui::Rect {
        let (left, width) = self.horizontal_span(pos.x, size.w);
        egui::Rect::from_min_size(
            egui::pos2(left, self.container.top() + grid_to_pixels(pos.y, self.cell_height)),
            egui::vec2(width, grid_to_pixels(size.h, self.cell_height)),
        )
    }

    /// Left edge and width of a column span. Fluid layouts go through
    /// percentages of the container width so they track reflow exactly.
    fn horizontal_span(&self, x: u32, w: u32) -> (f32, f32) {
        match self.mode {
            GridMode::Fluid if self.columns > 0 => {
                let width = self.container.width();
                (
                    self.container.left() + grid_to_percent(x, self.columns) / 100.0 * width,
                    grid_to_percent(w, self.columns) / 100.0 * width,
                )
            }
            _ => (
                self.container.left() + grid_to_pixels(x, self.cell_width),
                grid_to_pixels(w, self.cell_width),
            ),
        }
    }
}
