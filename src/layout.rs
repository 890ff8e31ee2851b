//! Committed layout data read from a layout store.
//!
//! Everything here is plain data: the store owns and produces it, the grid
//! widget only reads it. Geometry is expressed in grid units.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Identifier of a panel, unique within one snapshot.
pub type ItemId = String;

/// A position on the grid, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

/// A size on the grid, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub w: u32,
    pub h: u32,
}

/// Committed geometry of one panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    pub id: ItemId,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl GridItem {
    pub fn new(id: impl Into<ItemId>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }

    pub fn pos(&self) -> GridPos {
        GridPos { x: self.x, y: self.y }
    }

    pub fn size(&self) -> GridSize {
        GridSize { w: self.w, h: self.h }
    }

    /// Row just below the bottom edge of this item.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }
}

/// A snapshot of the store: items in render (z) order plus the grid width.
///
/// Stores are free to hand out a new value on every read, so nothing in this
/// crate compares snapshots by identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    pub columns: u32,
    #[serde(default)]
    pub items: Vec<GridItem>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            columns: 12,
            items: Vec::new(),
        }
    }
}

impl LayoutState {
    pub fn new(columns: u32, items: Vec<GridItem>) -> Self {
        Self { columns, items }
    }

    /// Looks up an item by id.
    pub fn find(&self, id: &str) -> Option<&GridItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of rows occupied: `max(y + h)` over all items, 0 when empty.
    pub fn content_rows(&self) -> u32 {
        self.items.iter().map(GridItem::bottom).max().unwrap_or(0)
    }

    /// Checks the structural rules a loaded layout must satisfy.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::ZeroColumns);
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if item.id.is_empty() {
                return Err(LayoutError::EmptyId);
            }
            if item.w == 0 || item.h == 0 {
                return Err(LayoutError::EmptySize { id: item.id.clone() });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(LayoutError::DuplicateId(item.id.clone()));
            }
        }
        Ok(())
    }
}

/// Rejected layout structure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout must have at least one column")]
    ZeroColumns,
    #[error("panel id must not be empty")]
    EmptyId,
    #[error("panel '{id}' has zero width or height")]
    EmptySize { id: ItemId },
    #[error("panel id '{0}' appears more than once")]
    DuplicateId(ItemId),
}

/// A change request sent to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutAction {
    /// Move an item's top-left corner.
    Move { id: ItemId, x: u32, y: u32 },
    /// Change an item's size, keeping its top-left corner.
    Resize { id: ItemId, w: u32, h: u32 },
}

impl LayoutAction {
    pub fn item_id(&self) -> &str {
        match self {
            LayoutAction::Move { id, .. } | LayoutAction::Resize { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_rows() {
        let empty = LayoutState::new(4, vec![]);
        assert_eq!(empty.content_rows(), 0);

        let state = LayoutState::new(
            4,
            vec![GridItem::new("a", 0, 0, 1, 2), GridItem::new("b", 1, 3, 1, 1)],
        );
        assert_eq!(state.content_rows(), 4);
    }

    #[test]
    fn test_validate_rejects_bad_layouts() {
        assert_eq!(LayoutState::new(0, vec![]).validate(), Err(LayoutError::ZeroColumns));

        let dup = LayoutState::new(
            4,
            vec![GridItem::new("a", 0, 0, 1, 1), GridItem::new("a", 1, 0, 1, 1)],
        );
        assert_eq!(dup.validate(), Err(LayoutError::DuplicateId("a".into())));

        let flat = LayoutState::new(4, vec![GridItem::new("a", 0, 0, 0, 1)]);
        assert_eq!(flat.validate(), Err(LayoutError::EmptySize { id: "a".into() }));

        let unnamed = LayoutState::new(4, vec![GridItem::new("", 0, 0, 1, 1)]);
        assert_eq!(unnamed.validate(), Err(LayoutError::EmptyId));
    }

    #[test]
    fn test_action_wire_shape() {
        let action = LayoutAction::Move { id: "a".into(), x: 4, y: 3 };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json, serde_json::json!({"type": "move", "id": "a", "x": 4, "y": 3}));

        let resize: LayoutAction =
            serde_json::from_str(r#"{"type":"resize","id":"b","w":3,"h":2}"#).unwrap();
        assert_eq!(resize, LayoutAction::Resize { id: "b".into(), w: 3, h: 2 });
        assert_eq!(resize.item_id(), "b");
    }
}
