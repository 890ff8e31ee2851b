//! Built-in layout used when no layout file is given.

use crate::layout::{GridItem, LayoutState};

/// Columns of the demo layout.
pub const DEMO_COLUMNS: u32 = 12;

/// Returns a small dashboard-like layout.
pub fn demo_layout() -> LayoutState {
    LayoutState::new(
        DEMO_COLUMNS,
        vec![
            GridItem::new("overview", 0, 0, 6, 2),
            GridItem::new("latency", 6, 0, 3, 2),
            GridItem::new("errors", 9, 0, 3, 1),
            GridItem::new("throughput", 9, 1, 3, 1),
            GridItem::new("hosts", 0, 2, 4, 3),
            GridItem::new("alerts", 4, 2, 8, 1),
            GridItem::new("notes", 4, 3, 5, 2),
        ],
    )
}
