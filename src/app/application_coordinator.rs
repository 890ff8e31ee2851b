//! Application-level coordination and workflow management.
//!
//! Handles layout file operations and error reporting for the demo.

use crate::app::AppState;
use crate::io::{demo_layout, load_layout, save_layout};
use crate::traits::LayoutStore;
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Loads a layout file into a fresh store.
    ///
    /// On failure the current store is kept and the error is shown instead.
    pub fn open_layout(state: &mut AppState, path: PathBuf) {
        match load_layout(&path) {
            Ok(layout) => state.replace_store(layout, Some(path)),
            Err(e) => {
                tracing::warn!("{:#}", e);
                state.error_message = Some(format!("Error loading layout: {:#}", e));
            }
        }
    }

    /// Saves the store's current layout.
    pub fn save_layout(state: &mut AppState, path: PathBuf) {
        match save_layout(&path, &state.store.get_state()) {
            Ok(()) => {
                state.layout_path = Some(path);
                state.error_message = None;
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                state.error_message = Some(format!("Error saving layout: {:#}", e));
            }
        }
    }

    /// Replaces the store with the built-in demo layout.
    pub fn reset_to_demo(state: &mut AppState) {
        state.replace_store(demo_layout(), None);
    }
}
