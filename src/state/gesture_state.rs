//! Gesture state of the grid widget.
//!
//! Drag and resize are variants of one enum, so at most one gesture can be in
//! flight. The state never leaves the widget and is never seen by the store.

use crate::layout::{GridPos, GridSize, ItemId};

/// Current pointer gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Moving a panel. Only the preview changes until the pointer is released.
    Dragging {
        item_id: ItemId,
        /// Uncommitted grid position shown while dragging
        preview: GridPos,
        /// Pointer offset from the panel's top-left corner at pointer-down
        grab_offset: egui::Vec2,
    },
    /// Resizing a panel. Every tick commits to the store directly.
    Resizing {
        item_id: ItemId,
        /// Pointer position at pointer-down
        anchor: egui::Pos2,
        /// Size when the gesture started (the live size comes from the store)
        initial_size: GridSize,
    },
}

impl GestureState {
    /// Returns true if a drag or resize is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, GestureState::Idle)
    }

    /// Id of the panel being dragged, if any.
    pub fn dragging_id(&self) -> Option<&str> {
        match self {
            GestureState::Dragging { item_id, .. } => Some(item_id),
            _ => None,
        }
    }

    /// Id of the panel being resized, if any.
    pub fn resizing_id(&self) -> Option<&str> {
        match self {
            GestureState::Resizing { item_id, .. } => Some(item_id),
            _ => None,
        }
    }

    /// Preview position of the dragged panel, if any.
    pub fn drag_preview(&self) -> Option<GridPos> {
        match self {
            GestureState::Dragging { preview, .. } => Some(*preview),
            _ => None,
        }
    }

    /// Short human-readable description for status displays.
    pub fn describe(&self) -> String {
        match self {
            GestureState::Idle => "Idle".to_string(),
            GestureState::Dragging { item_id, preview, .. } => {
                format!("Dragging {} to ({}, {})", item_id, preview.x, preview.y)
            }
            GestureState::Resizing { item_id, .. } => format!("Resizing {}", item_id),
        }
    }
}
