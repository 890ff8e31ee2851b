//! Drag and resize state machine.
//!
//! Transitions:
//! - `Idle -> Dragging` on a primary press on a panel body (drag enabled)
//! - `Dragging -> Dragging` on every move: recompute the local preview only
//! - `Dragging -> Idle` on release: one `move` commit with the last preview
//! - `Idle -> Resizing` on a primary press on a resize handle (resize enabled)
//! - `Resizing -> Resizing` on every move: commit a `resize` immediately
//! - `Resizing -> Idle` on release: nothing left to commit
//!
//! Drag keeps a preview to avoid store churn and commits once. Resize reads
//! the item's live geometry from the latest snapshot on every tick and commits
//! continuously, so the store stays the only owner of the item's size.

use crate::config::GridConfig;
use crate::domain::GridMetrics;
use crate::layout::{GridPos, LayoutAction, LayoutState};
use crate::state::GestureState;
use crate::traits::LayoutStore;
use crate::ui::input::pointer_capture::{PointerCapture, PointerHub};

/// Inputs read fresh on every pointer tick.
#[derive(Debug, Clone, Copy)]
pub struct GridContext<'a> {
    /// Latest committed snapshot
    pub snapshot: &'a LayoutState,
    pub config: &'a GridConfig,
    /// Live container bounds; `None` when not laid out yet
    pub container: Option<egui::Rect>,
}

impl GridContext<'_> {
    fn metrics(&self) -> Option<GridMetrics> {
        GridMetrics::measure(self.config, self.snapshot.columns, self.container)
    }
}

/// Owns the gesture state and the window-wide pointer capture.
#[derive(Debug)]
pub struct GestureController {
    state: GestureState,
    hub: PointerHub,
    capture: Option<PointerCapture>,
}

impl GestureController {
    pub fn new(hub: PointerHub) -> Self {
        Self {
            state: GestureState::Idle,
            hub,
            capture: None,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Returns true while window-wide move/release events should be fed in.
    pub fn is_listening(&self) -> bool {
        self.capture.is_some()
    }

    /// Handles a press on a panel body. Returns true if a drag started.
    pub fn begin_drag(
        &mut self,
        item_id: &str,
        button: egui::PointerButton,
        pos: egui::Pos2,
        grid: GridContext<'_>,
    ) -> bool {
        if self.state.is_active() || button != egui::PointerButton::Primary || !grid.config.draggable {
            return false;
        }
        let Some(item) = grid.snapshot.find(item_id) else {
            return false;
        };
        let Some(metrics) = grid.metrics() else {
            return false;
        };

        let grab_offset = pos - metrics.cell_origin(item.pos());
        tracing::debug!(id = item_id, x = item.x, y = item.y, "drag started");

        self.state = GestureState::Dragging {
            item_id: item.id.clone(),
            preview: item.pos(),
            grab_offset,
        };
        self.capture = Some(self.hub.capture());
        true
    }

    /// Handles a press on a resize handle. Returns true if a resize started.
    pub fn begin_resize(
        &mut self,
        item_id: &str,
        button: egui::PointerButton,
        pos: egui::Pos2,
        grid: GridContext<'_>,
    ) -> bool {
        if self.state.is_active() || button != egui::PointerButton::Primary || !grid.config.resizable {
            return false;
        }
        let Some(item) = grid.snapshot.find(item_id) else {
            return false;
        };

        tracing::debug!(id = item_id, w = item.w, h = item.h, "resize started");

        self.state = GestureState::Resizing {
            item_id: item.id.clone(),
            anchor: pos,
            initial_size: item.size(),
        };
        self.capture = Some(self.hub.capture());
        true
    }

    /// Handles one pointer move while a gesture is active.
    pub fn pointer_moved(&mut self, pos: egui::Pos2, grid: GridContext<'_>, store: &dyn LayoutStore) {
        match &mut self.state {
            GestureState::Idle => {}
            GestureState::Dragging {
                item_id,
                preview,
                grab_offset,
            } => {
                let Some(metrics) = grid.metrics() else {
                    tracing::trace!("container not measured, drag tick skipped");
                    return;
                };
                let Some(item) = grid.snapshot.find(item_id) else {
                    tracing::trace!(id = %item_id, "dragged panel left the snapshot, drag tick skipped");
                    return;
                };
                *preview = drag_target(&metrics, pos, *grab_offset, item.w);
                tracing::trace!(id = %item_id, x = preview.x, y = preview.y, "drag preview");
            }
            GestureState::Resizing { item_id, .. } => {
                if let Some(action) = resize_action(item_id, pos, grid) {
                    tracing::trace!(?action, "resize tick");
                    store.dispatch(action);
                }
            }
        }
    }

    /// Handles the primary release that ends the gesture.
    ///
    /// A drag commits its last preview, even if it equals the start position.
    /// A resize has nothing left to commit.
    pub fn pointer_released(&mut self, store: &dyn LayoutStore) {
        let finished = std::mem::take(&mut self.state);
        self.capture = None;

        match finished {
            GestureState::Idle => {}
            GestureState::Dragging { item_id, preview, .. } => {
                tracing::debug!(id = %item_id, x = preview.x, y = preview.y, "drag committed");
                store.dispatch(LayoutAction::Move {
                    id: item_id,
                    x: preview.x,
                    y: preview.y,
                });
            }
            GestureState::Resizing { item_id, initial_size, .. } => {
                tracing::debug!(id = %item_id, from_w = initial_size.w, from_h = initial_size.h, "resize finished");
            }
        }
    }

    /// Drops any gesture in flight without committing, and detaches listeners.
    pub fn teardown(&mut self) {
        if let Some(id) = self.state.dragging_id() {
            tracing::debug!(id, "drag abandoned without commit");
        }
        self.state = GestureState::Idle;
        self.capture = None;
    }
}

/// Snaps the dragged panel's top-left corner under the pointer.
///
/// x is kept in `[0, columns - w]` (and within `[0, columns - 1]`), so a drop
/// never pushes the panel past the right edge.
fn drag_target(metrics: &GridMetrics, pos: egui::Pos2, grab_offset: egui::Vec2, width: u32) -> GridPos {
    let snapped = metrics.snap_position(metrics.to_local(pos) - grab_offset);
    GridPos {
        x: snapped.x.min(metrics.columns.saturating_sub(width)),
        y: snapped.y,
    }
}

/// Computes the resize commit for one tick, or `None` if the tick is skipped.
fn resize_action(item_id: &str, pos: egui::Pos2, grid: GridContext<'_>) -> Option<LayoutAction> {
    let item = grid.snapshot.find(item_id)?;
    let metrics = grid.metrics()?;
    // No width >= 1 fits when the item already starts past the last column.
    if item.x >= metrics.columns {
        return None;
    }

    let extent = pos - metrics.cell_origin(item.pos());
    let extent = egui::vec2(extent.x.max(metrics.cell_width), extent.y.max(metrics.cell_height));
    let size = metrics.snap_size(extent);

    Some(LayoutAction::Resize {
        id: item.id.clone(),
        w: size.w.min(metrics.columns - item.x),
        h: size.h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridMode;
    use crate::layout::GridItem;
    use crate::memory_store::MemoryStore;

    const PRIMARY: egui::PointerButton = egui::PointerButton::Primary;

    fn container() -> Option<egui::Rect> {
        Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 400.0)))
    }

    fn setup(items: Vec<GridItem>) -> (MemoryStore, GridConfig, PointerHub, GestureController) {
        let store = MemoryStore::new(LayoutState::new(4, items));
        let hub = PointerHub::new();
        let controller = GestureController::new(hub.clone());
        (store, GridConfig::default(), hub, controller)
    }

    #[test]
    fn test_drag_previews_then_commits_once() {
        let (store, config, hub, mut controller) = setup(vec![GridItem::new("a", 0, 0, 1, 1)]);
        let snapshot = store.get_state();
        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };

        assert!(controller.begin_drag("a", PRIMARY, egui::pos2(50.0, 50.0), grid));
        assert_eq!(hub.active_captures(), 1);

        controller.pointer_moved(egui::pos2(160.0, 260.0), grid, &store);
        assert_eq!(controller.state().drag_preview(), Some(GridPos { x: 1, y: 2 }));
        controller.pointer_moved(egui::pos2(260.0, 150.0), grid, &store);
        assert_eq!(store.dispatch_count(), 0);

        controller.pointer_released(&store);
        assert_eq!(store.dispatched(), vec![LayoutAction::Move { id: "a".into(), x: 2, y: 1 }]);
        assert_eq!(controller.state(), &GestureState::Idle);
        assert_eq!(hub.active_captures(), 0);
    }

    #[test]
    fn test_click_without_move_still_commits() {
        let (store, config, _hub, mut controller) = setup(vec![GridItem::new("a", 1, 1, 1, 1)]);
        let snapshot = store.get_state();
        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };

        controller.begin_drag("a", PRIMARY, egui::pos2(120.0, 120.0), grid);
        controller.pointer_released(&store);
        assert_eq!(store.dispatched(), vec![LayoutAction::Move { id: "a".into(), x: 1, y: 1 }]);
    }

    #[test]
    fn test_disabled_or_secondary_press_does_not_start() {
        let (store, mut config, hub, mut controller) = setup(vec![GridItem::new("a", 0, 0, 1, 1)]);
        let snapshot = store.get_state();

        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };
        assert!(!controller.begin_drag("a", egui::PointerButton::Secondary, egui::pos2(10.0, 10.0), grid));
        assert!(!controller.begin_drag("missing", PRIMARY, egui::pos2(10.0, 10.0), grid));

        config.draggable = false;
        config.resizable = false;
        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };
        assert!(!controller.begin_drag("a", PRIMARY, egui::pos2(10.0, 10.0), grid));
        assert!(!controller.begin_resize("a", PRIMARY, egui::pos2(95.0, 95.0), grid));
        assert!(!controller.is_listening());
        assert_eq!(hub.active_captures(), 0);
    }

    #[test]
    fn test_second_press_during_gesture_is_ignored() {
        let (store, config, hub, mut controller) =
            setup(vec![GridItem::new("a", 0, 0, 1, 1), GridItem::new("b", 2, 0, 1, 1)]);
        let snapshot = store.get_state();
        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };

        assert!(controller.begin_drag("a", PRIMARY, egui::pos2(10.0, 10.0), grid));
        assert!(!controller.begin_resize("b", PRIMARY, egui::pos2(295.0, 95.0), grid));
        assert_eq!(controller.state().dragging_id(), Some("a"));
        assert_eq!(hub.active_captures(), 1);
    }

    #[test]
    fn test_drag_keeps_panel_inside_columns() {
        let (store, config, _hub, mut controller) = setup(vec![GridItem::new("wide", 0, 0, 3, 1)]);
        let snapshot = store.get_state();
        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };

        controller.begin_drag("wide", PRIMARY, egui::pos2(10.0, 10.0), grid);
        controller.pointer_moved(egui::pos2(390.0, 10.0), grid, &store);
        assert_eq!(controller.state().drag_preview(), Some(GridPos { x: 1, y: 0 }));
    }

    #[test]
    fn test_drag_tick_skipped_without_container() {
        let (store, config, _hub, mut controller) = setup(vec![GridItem::new("a", 1, 1, 1, 1)]);
        let snapshot = store.get_state();
        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };
        controller.begin_drag("a", PRIMARY, egui::pos2(110.0, 110.0), grid);

        let unmeasured = GridContext { container: None, ..grid };
        controller.pointer_moved(egui::pos2(390.0, 390.0), unmeasured, &store);
        assert_eq!(controller.state().drag_preview(), Some(GridPos { x: 1, y: 1 }));
    }

    #[test]
    fn test_drag_tick_skipped_when_panel_removed() {
        let (store, config, _hub, mut controller) = setup(vec![GridItem::new("a", 1, 1, 1, 1)]);
        let snapshot = store.get_state();
        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };
        controller.begin_drag("a", PRIMARY, egui::pos2(110.0, 110.0), grid);

        let empty = LayoutState::new(4, vec![]);
        controller.pointer_moved(egui::pos2(390.0, 390.0), GridContext { snapshot: &empty, ..grid }, &store);
        assert_eq!(controller.state().drag_preview(), Some(GridPos { x: 1, y: 1 }));
        assert_eq!(store.dispatch_count(), 0);
    }

    #[test]
    fn test_fluid_cells_follow_container_width_mid_gesture() {
        let (store, mut config, _hub, mut controller) =
            setup(vec![GridItem::new("a", 0, 0, 1, 1), GridItem::new("b", 0, 1, 1, 1)]);
        config.mode = GridMode::Fluid;
        let snapshot = store.get_state();
        let narrow = GridContext {
            snapshot: &snapshot,
            config: &config,
            container: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 400.0))),
        };
        let wide = GridContext {
            container: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 400.0))),
            ..narrow
        };

        // 100pt cells, then 200pt cells after the container widens
        assert!(controller.begin_drag("a", PRIMARY, egui::pos2(50.0, 50.0), narrow));
        controller.pointer_moved(egui::pos2(250.0, 50.0), narrow, &store);
        assert_eq!(controller.state().drag_preview(), Some(GridPos { x: 2, y: 0 }));
        controller.pointer_moved(egui::pos2(250.0, 50.0), wide, &store);
        assert_eq!(controller.state().drag_preview(), Some(GridPos { x: 1, y: 0 }));
        controller.teardown();

        assert!(controller.begin_resize("b", PRIMARY, egui::pos2(95.0, 195.0), narrow));
        controller.pointer_moved(egui::pos2(300.0, 200.0), narrow, &store);
        controller.pointer_moved(egui::pos2(300.0, 200.0), wide, &store);
        assert_eq!(
            store.dispatched(),
            vec![
                LayoutAction::Resize { id: "b".into(), w: 3, h: 1 },
                LayoutAction::Resize { id: "b".into(), w: 2, h: 1 },
            ]
        );
    }

    #[test]
    fn test_resize_commits_every_tick() {
        let (store, config, _hub, mut controller) = setup(vec![GridItem::new("a", 1, 0, 1, 1)]);
        let snapshot = store.get_state();
        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };

        assert!(controller.begin_resize("a", PRIMARY, egui::pos2(195.0, 95.0), grid));
        controller.pointer_moved(egui::pos2(320.0, 180.0), grid, &store);
        controller.pointer_moved(egui::pos2(900.0, 10.0), grid, &store);
        controller.pointer_released(&store);

        assert_eq!(
            store.dispatched(),
            vec![
                LayoutAction::Resize { id: "a".into(), w: 2, h: 2 },
                // Width clamped to columns - x, height floored at one cell
                LayoutAction::Resize { id: "a".into(), w: 3, h: 1 },
            ]
        );
    }

    #[test]
    fn test_resize_uses_live_position_from_snapshot() {
        let (store, config, _hub, mut controller) = setup(vec![GridItem::new("a", 0, 0, 1, 1)]);
        let snapshot = store.get_state();
        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };
        controller.begin_resize("a", PRIMARY, egui::pos2(95.0, 95.0), grid);

        // The store moved the item to column 2 mid-gesture.
        store.dispatch(LayoutAction::Move { id: "a".into(), x: 2, y: 0 });
        let moved = store.get_state();
        let grid = GridContext { snapshot: &moved, ..grid };
        controller.pointer_moved(egui::pos2(400.0, 100.0), grid, &store);

        assert_eq!(
            store.dispatched().last(),
            Some(&LayoutAction::Resize { id: "a".into(), w: 2, h: 1 })
        );
    }

    #[test]
    fn test_resize_of_removed_item_is_skipped() {
        let (store, config, _hub, mut controller) = setup(vec![GridItem::new("a", 0, 0, 1, 1)]);
        let snapshot = store.get_state();
        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };
        controller.begin_resize("a", PRIMARY, egui::pos2(95.0, 95.0), grid);

        let empty = LayoutState::new(4, vec![]);
        controller.pointer_moved(egui::pos2(300.0, 300.0), GridContext { snapshot: &empty, ..grid }, &store);
        assert_eq!(store.dispatch_count(), 0);
    }

    #[test]
    fn test_teardown_mid_drag_commits_nothing() {
        let (store, config, hub, mut controller) = setup(vec![GridItem::new("a", 0, 0, 1, 1)]);
        let snapshot = store.get_state();
        let grid = GridContext { snapshot: &snapshot, config: &config, container: container() };

        controller.begin_drag("a", PRIMARY, egui::pos2(10.0, 10.0), grid);
        controller.pointer_moved(egui::pos2(310.0, 310.0), grid, &store);
        controller.teardown();

        assert_eq!(store.dispatch_count(), 0);
        assert_eq!(hub.active_captures(), 0);
        assert!(!controller.is_listening());
    }
}
