//! Grid Panel Demo
//!
//! An interactive dashboard editor built on the grid widget:
//! - Drag panels by their body, resize them from the bottom-right handle
//! - Fixed or fluid cell widths, optional grid lines and column override
//! - Open and save layouts as JSON files
//! - Widget options persist between sessions
//!
//! Pass a layout file as the first argument to open it on startup. Logging is
//! controlled through `RUST_LOG`.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

use gridpanel::app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use gridpanel::ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes logging and launches the demo.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gridpanel=info,wgpu=warn,naga=warn")),
        )
        .init();

    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 800.0])
            .with_title("Grid Panel Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Grid Panel Demo",
        options,
        Box::new(move |cc| Ok(Box::new(GridPanelDemoApp::new(cc, initial_file)))),
    )
}

/// The demo application: state plus a layout file queued from the command line.
struct GridPanelDemoApp {
    state: AppState,
    pending_file_load: Option<PathBuf>,
}

impl GridPanelDemoApp {
    /// Creates the app with widget options loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let config = SettingsCoordinator::load_grid_config(cc.storage);
        tracing::debug!("Starting with {:?}", config);

        Self {
            state: AppState::with_config(config),
            pending_file_load: initial_file,
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_layout(&mut self.state, path);
            }
            PanelInteraction::SaveFileRequested(path) => {
                ApplicationCoordinator::save_layout(&mut self.state, path);
            }
            PanelInteraction::ResetDemoRequested => {
                ApplicationCoordinator::reset_to_demo(&mut self.state);
            }
        }
    }
}

impl eframe::App for GridPanelDemoApp {
    /// Called when the app is being shut down - ensures options are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_grid_config(storage, &self.state.config);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_layout(&mut self.state, path);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
