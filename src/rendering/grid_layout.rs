//! Frame layout for the grid widget.
//!
//! Pure functions mapping (snapshot, gesture, configuration) to rectangles.
//! Painting and hit testing both consume the same plan, so what the user sees
//! is exactly what they can press.

use crate::config::{GridConfig, GridMode};
use crate::domain::GridMetrics;
use crate::layout::{GridItem, GridPos, LayoutState};
use crate::state::GestureState;

/// Side length of the square resize handle in the panel's bottom-right corner.
pub const HANDLE_SIZE: f32 = 14.0;

/// How a panel is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRole {
    /// At its committed position.
    Resting,
    /// Dashed outline left at the committed position of the dragged panel.
    Placeholder,
    /// The dragged panel at its preview position, raised above the others.
    Preview,
}

/// One panel's rectangle and role for this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPlacement {
    pub item: GridItem,
    pub rect: egui::Rect,
    pub role: PanelRole,
}

impl PanelPlacement {
    /// Placeholders are decoration only and never receive presses.
    pub fn is_interactive(&self) -> bool {
        self.role != PanelRole::Placeholder
    }
}

/// Size to allocate for the container.
///
/// Width is `columns * cell_width` in fixed mode; in fluid mode it is the
/// configured container width or everything available. Height covers the
/// lowest committed item, or 0 when there are none.
pub fn container_size(config: &GridConfig, snapshot: &LayoutState, available_width: f32) -> egui::Vec2 {
    let columns = config.effective_columns(snapshot.columns);
    let fixed_width = columns as f32 * config.cell_width;

    let width = match config.mode {
        GridMode::Fixed => fixed_width,
        GridMode::Fluid => match config.container_width {
            Some(width) => width,
            None if available_width.is_finite() => available_width,
            None => fixed_width,
        },
    };

    egui::vec2(width.max(0.0), snapshot.content_rows() as f32 * config.cell_height)
}

/// Lays out every panel for this frame in paint order.
///
/// Panels keep the snapshot's order. The dragged panel contributes a
/// placeholder in its own slot and a preview painted after everything else.
pub fn plan_panels(snapshot: &LayoutState, gesture: &GestureState, metrics: &GridMetrics) -> Vec<PanelPlacement> {
    let mut placements = Vec::with_capacity(snapshot.items.len() + 1);
    let mut preview = None;

    for item in &snapshot.items {
        let rect = metrics.grid_rect(item.pos(), item.size());
        match gesture {
            GestureState::Dragging { item_id, preview: pos, .. } if *item_id == item.id => {
                placements.push(PanelPlacement {
                    item: item.clone(),
                    rect,
                    role: PanelRole::Placeholder,
                });
                preview = Some(PanelPlacement {
                    item: item.clone(),
                    rect: metrics.grid_rect(*pos, item.size()),
                    role: PanelRole::Preview,
                });
            }
            _ => placements.push(PanelPlacement {
                item: item.clone(),
                rect,
                role: PanelRole::Resting,
            }),
        }
    }

    placements.extend(preview);
    placements
}

/// Square resize handle inside the bottom-right corner of a panel.
pub fn handle_rect(panel: egui::Rect) -> egui::Rect {
    let side = HANDLE_SIZE.min(panel.width()).min(panel.height()).max(0.0);
    egui::Rect::from_min_max(panel.max - egui::vec2(side, side), panel.max)
}

/// Line segments of the decorative grid: one per column boundary and one per
/// row boundary across the container height.
pub fn grid_lines(metrics: &GridMetrics, height: f32) -> Vec<[egui::Pos2; 2]> {
    let container = metrics.container;
    let bottom = container.top() + height;
    let mut lines = Vec::new();

    for column in 0..=metrics.columns {
        let x = metrics.cell_origin(GridPos { x: column, y: 0 }).x;
        lines.push([egui::pos2(x, container.top()), egui::pos2(x, bottom)]);
    }

    if metrics.cell_height > 0.0 {
        let rows = (height / metrics.cell_height).floor() as u32;
        for row in 0..=rows {
            let y = container.top() + row as f32 * metrics.cell_height;
            lines.push([egui::pos2(container.left(), y), egui::pos2(container.right(), y)]);
        }
    }

    lines
}

/// Cursor to show for the current hover target, if any.
///
/// Hovering a draggable panel shows an open hand; the panel being dragged
/// shows a closed one.
pub fn panel_cursor(
    config: &GridConfig,
    gesture: &GestureState,
    hovered_id: Option<&str>,
    over_handle: bool,
) -> Option<egui::CursorIcon> {
    if gesture.resizing_id().is_some() || (over_handle && config.resizable && gesture.dragging_id().is_none()) {
        return Some(egui::CursorIcon::ResizeNwSe);
    }
    if gesture.dragging_id().is_some() {
        return Some(egui::CursorIcon::Grabbing);
    }
    match hovered_id {
        Some(_) if config.draggable => Some(egui::CursorIcon::Grab),
        _ => None,
    }
}
