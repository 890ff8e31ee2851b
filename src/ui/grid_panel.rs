//! The grid widget.
//!
//! Each frame the widget:
//! 1. Resynchronizes its snapshot with the store it is shown for
//! 2. Allocates the container and feeds this frame's pointer events, in order,
//!    to the gesture controller (window-wide while a gesture holds a capture)
//! 3. Paints the grid overlay, the panels and the drag preview from the
//!    latest snapshot

use eframe::egui;
use crate::config::GridConfig;
use crate::domain::GridMetrics;
use crate::layout::{GridItem, LayoutState};
use crate::rendering::grid_layout::{container_size, handle_rect, panel_cursor, plan_panels, PanelPlacement, PanelRole};
use crate::rendering::panel_painter;
use crate::state::{GestureState, StateSync};
use crate::traits::StoreHandle;
use crate::ui::input::pointer_events::{collect_pointer_events, hit_test};
use crate::ui::input::{GestureController, GridContext, PointerEvent, PointerHub, PointerTarget};

/// Inner margin between a panel's frame and its content.
const PANEL_PADDING: f32 = 6.0;

/// Supplies what goes inside each panel.
///
/// Any `FnMut(&mut egui::Ui, &GridItem)` closure implements this trait.
pub trait PanelContent {
    /// Draws the content of one panel.
    fn panel_ui(&mut self, ui: &mut egui::Ui, item: &GridItem);

    /// Draws a custom resize handle into `rect`. Returns false to fall back to
    /// the default grip.
    fn resize_handle_ui(&mut self, _painter: &egui::Painter, _rect: egui::Rect, _item: &GridItem) -> bool {
        false
    }
}

impl<F> PanelContent for F
where
    F: FnMut(&mut egui::Ui, &GridItem),
{
    fn panel_ui(&mut self, ui: &mut egui::Ui, item: &GridItem) {
        self(ui, item)
    }
}

/// What [`GridPanel::show`] produced this frame.
pub struct GridPanelResponse {
    /// Response of the whole container
    pub response: egui::Response,
    /// Container rectangle in screen coordinates
    pub container: egui::Rect,
}

/// Persistent state of one grid widget: store sync and gesture controller.
pub struct GridPanel {
    sync: StateSync,
    controller: GestureController,
    hub: PointerHub,
}

impl GridPanel {
    /// Creates a widget bound to `store`.
    pub fn new(store: &StoreHandle) -> Self {
        let hub = PointerHub::new();
        Self {
            sync: StateSync::new(store),
            controller: GestureController::new(hub.clone()),
            hub,
        }
    }

    /// Current gesture.
    pub fn gesture(&self) -> &GestureState {
        self.controller.state()
    }

    /// Latest snapshot of the tracked store.
    pub fn snapshot(&self) -> LayoutState {
        self.sync.snapshot()
    }

    /// Registry of window-wide pointer listeners held by this widget.
    pub fn pointer_hub(&self) -> &PointerHub {
        &self.hub
    }

    /// Abandons any gesture in flight. A drag in progress is not committed.
    pub fn teardown(&mut self) {
        self.controller.teardown();
    }

    /// Shows the grid for `store`.
    ///
    /// Passing a different store than last frame resynchronizes immediately.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        store: &StoreHandle,
        config: &GridConfig,
        content: &mut impl PanelContent,
    ) -> GridPanelResponse {
        let snapshot = self.sync.sync(store);
        let size = container_size(config, &snapshot, ui.available_width());
        // Claim presses inside the grid so the host starts no drag of its own.
        let (container, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        self.handle_pointer_events(ui, store, config, container);

        let snapshot = self.sync.snapshot();
        if let Some(metrics) = GridMetrics::measure(config, snapshot.columns, Some(container)) {
            self.paint(ui, &snapshot, config, &metrics, content);
        }

        GridPanelResponse { response, container }
    }

    fn handle_pointer_events(
        &mut self,
        ui: &egui::Ui,
        store: &StoreHandle,
        config: &GridConfig,
        container: egui::Rect,
    ) {
        let events = ui.input(|i| collect_pointer_events(&i.events));

        for event in events {
            // Every tick reads the latest snapshot: a resize commit from the
            // previous tick has already been synced back.
            let snapshot = self.sync.snapshot();
            let grid = GridContext {
                snapshot: &snapshot,
                config,
                container: Some(container),
            };

            match event {
                PointerEvent::Pressed { pos, button } => {
                    if self.controller.is_listening() || !accepts_pointer(ui, container, pos) {
                        continue;
                    }
                    let Some(metrics) = GridMetrics::measure(config, snapshot.columns, Some(container)) else {
                        continue;
                    };
                    let plan = plan_panels(&snapshot, self.controller.state(), &metrics);
                    match hit_test(&plan, pos, config.resizable) {
                        Some(PointerTarget::Handle(id)) => {
                            self.controller.begin_resize(&id, button, pos, grid);
                        }
                        Some(PointerTarget::Body(id)) => {
                            self.controller.begin_drag(&id, button, pos, grid);
                        }
                        None => {}
                    }
                }
                PointerEvent::Moved { pos } if self.controller.is_listening() => {
                    self.controller.pointer_moved(pos, grid, &**store);
                }
                PointerEvent::Released {
                    button: egui::PointerButton::Primary,
                    ..
                } if self.controller.is_listening() => {
                    self.controller.pointer_released(&**store);
                }
                _ => {}
            }
        }
    }

    fn paint(
        &self,
        ui: &mut egui::Ui,
        snapshot: &LayoutState,
        config: &GridConfig,
        metrics: &GridMetrics,
        content: &mut impl PanelContent,
    ) {
        let visuals = ui.visuals().clone();
        let gesture = self.controller.state();

        if config.show_grid {
            let height = snapshot.content_rows() as f32 * config.cell_height;
            panel_painter::paint_grid_overlay(ui.painter(), metrics, height, &visuals);
        }

        let plan = plan_panels(snapshot, gesture, metrics);

        // Hover feedback only while idle; during a gesture the cursor follows it.
        let hover = if self.controller.is_listening() {
            None
        } else {
            ui.input(|i| i.pointer.hover_pos())
                .filter(|pos| accepts_pointer(ui, metrics.container, *pos))
                .and_then(|pos| hit_test(&plan, pos, config.resizable))
        };
        let (hovered_id, over_handle) = match &hover {
            Some(PointerTarget::Body(id)) => (Some(id.as_str()), false),
            Some(PointerTarget::Handle(id)) => (Some(id.as_str()), true),
            None => (None, false),
        };

        for placement in &plan {
            match placement.role {
                PanelRole::Placeholder => {
                    panel_painter::paint_placeholder(ui.painter(), placement.rect, &visuals);
                }
                PanelRole::Resting => {
                    let hovered = hovered_id == Some(placement.item.id.as_str());
                    panel_painter::paint_panel_frame(ui.painter(), placement.rect, &visuals, hovered);
                    let layer = ui.layer_id();
                    let clip = placement.rect.intersect(ui.clip_rect());
                    show_panel_content(ui, placement, layer, clip, 1.0, content);
                    if config.resizable {
                        let hot = gesture.resizing_id() == Some(placement.item.id.as_str())
                            || (hovered && over_handle);
                        paint_handle(ui.painter(), placement, &visuals, hot, content);
                    }
                }
                PanelRole::Preview => {
                    let layer = egui::LayerId::new(egui::Order::Foreground, ui.id().with("grid_drag_preview"));
                    let painter = ui.ctx().layer_painter(layer);
                    panel_painter::paint_preview_frame(&painter, placement.rect, &visuals);
                    show_panel_content(ui, placement, layer, placement.rect, panel_painter::PREVIEW_OPACITY, content);
                    if config.resizable {
                        paint_handle(&painter, placement, &visuals, false, content);
                    }
                }
            }
        }

        if let Some(icon) = panel_cursor(config, gesture, hovered_id, over_handle) {
            ui.ctx().set_cursor_icon(icon);
        }
    }
}

impl Drop for GridPanel {
    fn drop(&mut self) {
        self.controller.teardown();
    }
}

/// Returns true if `pos` is over the visible part of the container and not
/// covered by another layer such as a popup or window.
///
/// Inside a scroll area most of the container can lie outside the clip rect,
/// under whatever is drawn there.
fn accepts_pointer(ui: &egui::Ui, container: egui::Rect, pos: egui::Pos2) -> bool {
    if !container.intersect(ui.clip_rect()).contains(pos) {
        return false;
    }
    ui.ctx()
        .layer_id_at(pos)
        .map_or(true, |layer| layer == ui.layer_id())
}

fn show_panel_content(
    ui: &mut egui::Ui,
    placement: &PanelPlacement,
    layer: egui::LayerId,
    clip: egui::Rect,
    opacity: f32,
    content: &mut impl PanelContent,
) {
    let inner = placement.rect.shrink(PANEL_PADDING);
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .id_salt(("grid_panel_item", placement.item.id.as_str()))
            .max_rect(inner)
            .layer_id(layer)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(clip.intersect(inner.expand(PANEL_PADDING)));
    child.multiply_opacity(opacity);
    content.panel_ui(&mut child, &placement.item);
}

fn paint_handle(
    painter: &egui::Painter,
    placement: &PanelPlacement,
    visuals: &egui::Visuals,
    hot: bool,
    content: &mut impl PanelContent,
) {
    let rect = handle_rect(placement.rect);
    if !content.resize_handle_ui(painter, rect, &placement.item) {
        panel_painter::paint_default_handle(painter, rect, visuals, hot);
    }
}
