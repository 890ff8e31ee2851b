//! UI rendering subsystem
//!
//! - Grid panel (the drag/resize grid widget and its content trait)
//! - Input handling (pointer capture, event extraction, gesture controller)
//! - Header panel (layout file controls, grid options)
//! - Status bar (panel count, mode, current gesture, commit count)
//! - Panel manager (demo application layout)

pub mod grid_panel;
pub mod input;
pub mod header;
pub mod status_bar;
pub mod panel_manager;

pub use grid_panel::{GridPanel, GridPanelResponse, PanelContent};
