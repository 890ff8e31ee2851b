//! Panel orchestration and layout management.
//!
//! Coordinates the header, status bar and the central grid, and translates
//! their interactions for the application coordinator.

use crate::app::AppState;
use crate::layout::GridItem;
use crate::ui::{header, status_bar};
use crate::utils::format_geometry;
use eframe::egui;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a layout file
    OpenFileRequested(std::path::PathBuf),
    /// User requested to save the layout
    SaveFileRequested(std::path::PathBuf),
    /// User requested the demo layout
    ResetDemoRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => PanelInteraction::OpenFileRequested(path),
                    header::HeaderInteraction::SaveFileRequested(path) => PanelInteraction::SaveFileRequested(path),
                    header::HeaderInteraction::ResetDemoRequested => PanelInteraction::ResetDemoRequested,
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let grid_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(grid_frame).show(ctx, |ui| {
            let store = state.store_handle();
            let config = state.config.clone();

            egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                let mut content = |ui: &mut egui::Ui, item: &GridItem| {
                    ui.strong(&item.id);
                    ui.weak(format_geometry(item));
                };
                state.grid.show(ui, &store, &config, &mut content);
            });
        });

        interaction
    }
}
