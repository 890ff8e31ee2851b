//! Rendering subsystem for the grid widget
//!
//! - Grid layout (container size, panel placements, handle and grid-line geometry)
//! - Panel painter (panel frames, drag preview, placeholder, grid overlay)

pub mod grid_layout;
pub mod panel_painter;
