//! Header panel UI rendering
//!
//! Handles the top bar with layout file controls and the grid options.

use eframe::egui;
use egui::Color32;
use std::path::PathBuf;
use crate::app::AppState;
use crate::config::GridMode;
use crate::traits::LayoutStore;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a layout file to open
    OpenFileRequested(PathBuf),
    /// User picked where to save the current layout
    SaveFileRequested(PathBuf),
    /// User asked for the built-in demo layout
    ResetDemoRequested,
}

fn layout_dialog() -> rfd::FileDialog {
    let mut dialog = rfd::FileDialog::new().add_filter("Grid Layouts", &["json"]);
    if let Ok(cwd) = std::env::current_dir() {
        dialog = dialog.set_directory(cwd);
    }
    dialog
}

/// Renders the application header with file controls and grid options.
///
/// Option changes are written straight into `state.config`; file actions are
/// returned for the coordinator to carry out.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Layout").clicked() {
            if let Some(path) = layout_dialog().pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("💾 Save Layout").clicked() {
            if let Some(path) = layout_dialog().set_file_name("layout.json").save_file() {
                interaction = Some(HeaderInteraction::SaveFileRequested(path));
            }
        }

        if ui.button("↺ Demo").clicked() {
            interaction = Some(HeaderInteraction::ResetDemoRequested);
        }

        ui.separator();

        let config = &mut state.config;
        ui.checkbox(&mut config.draggable, "Draggable");
        ui.checkbox(&mut config.resizable, "Resizable");
        ui.checkbox(&mut config.show_grid, "Grid lines");
    });

    let store_columns = state.store.get_state().columns;

    ui.horizontal(|ui| {
        let config = &mut state.config;

        ui.label("Mode:");
        egui::ComboBox::from_id_salt("grid_mode")
            .selected_text(config.mode.label())
            .show_ui(ui, |ui| {
                for mode in [GridMode::Fixed, GridMode::Fluid] {
                    ui.selectable_value(&mut config.mode, mode, mode.label());
                }
            });

        ui.separator();

        ui.label("Cell:");
        ui.add(egui::DragValue::new(&mut config.cell_width).range(8.0..=400.0).suffix(" w"));
        ui.add(egui::DragValue::new(&mut config.cell_height).range(8.0..=400.0).suffix(" h"));

        ui.separator();

        // Column override: unchecked means "use the store's count"
        let mut override_columns = config.columns.is_some();
        if ui.checkbox(&mut override_columns, "Columns:").changed() {
            config.columns = override_columns.then_some(store_columns);
        }
        if let Some(columns) = config.columns.as_mut() {
            ui.add(egui::DragValue::new(columns).range(1..=48));
        }

        if config.mode == GridMode::Fluid {
            ui.separator();

            let mut pin_width = config.container_width.is_some();
            if ui.checkbox(&mut pin_width, "Width:").changed() {
                config.container_width = pin_width.then_some(800.0);
            }
            if let Some(width) = config.container_width.as_mut() {
                ui.add(egui::DragValue::new(width).range(100.0..=4000.0));
            }
        }
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
