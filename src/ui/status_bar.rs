//! Status bar UI rendering
//!
//! Handles the bottom status bar describing the layout and the gesture in
//! progress.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::format_count;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let snapshot = state.grid.snapshot();
    let columns = state.config.effective_columns(snapshot.columns);

    ui.horizontal(|ui| {
        let source = match &state.layout_path {
            Some(path) => path.display().to_string(),
            None => "Demo layout".to_string(),
        };
        ui.label(RichText::new(source).strong());
        ui.label(RichText::new("|").strong());

        ui.label(RichText::new(format!(
            "{} | {} | {} mode",
            format_count(snapshot.items.len(), "panel"),
            format_count(columns as usize, "column"),
            state.config.mode.label()
        )).strong());
        ui.label(RichText::new("|").strong());

        let gesture = state.grid.gesture();
        let text = RichText::new(gesture.describe()).strong();
        if gesture.is_active() {
            ui.label(text.color(egui::Color32::YELLOW));
        } else {
            ui.label(text);
        }

        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format_count(state.store.dispatch_count(), "commit")).strong());
    });
}
