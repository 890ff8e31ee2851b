//! Grid widget configuration.

use serde::{Deserialize, Serialize};

/// How cell widths are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GridMode {
    /// Cells are exactly `cell_width` points wide; the container is
    /// `columns * cell_width` wide.
    #[default]
    Fixed,
    /// Cells share the measured container width; positions are laid out as
    /// percentages of it.
    Fluid,
}

impl GridMode {
    pub fn label(self) -> &'static str {
        match self {
            GridMode::Fixed => "Fixed",
            GridMode::Fluid => "Fluid",
        }
    }
}

/// Caller-facing options of the grid widget.
///
/// Content and resize handle visuals are supplied in code through
/// [`crate::ui::PanelContent`], not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub mode: GridMode,
    /// Cell width in points (fixed mode, and fluid fallback when there are no columns)
    pub cell_width: f32,
    /// Cell height in points, used by both modes
    pub cell_height: f32,
    /// Explicit container width for fluid mode; `None` takes all available width
    pub container_width: Option<f32>,
    /// Overrides the store's column count for display
    pub columns: Option<u32>,
    pub draggable: bool,
    pub resizable: bool,
    pub show_grid: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            mode: GridMode::Fixed,
            cell_width: 100.0,
            cell_height: 100.0,
            container_width: None,
            columns: None,
            draggable: true,
            resizable: true,
            show_grid: false,
        }
    }
}

impl GridConfig {
    /// Column count to lay out with: the override if set, else the store's.
    pub fn effective_columns(&self, store_columns: u32) -> u32 {
        self.columns.unwrap_or(store_columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GridConfig = serde_json::from_str(r#"{"show_grid": true, "mode": "Fluid"}"#).unwrap();
        assert!(config.show_grid);
        assert_eq!(config.mode, GridMode::Fluid);
        assert!(config.draggable);
        assert!(config.resizable);
        assert_eq!(config.cell_width, 100.0);
    }

    #[test]
    fn test_effective_columns() {
        let mut config = GridConfig::default();
        assert_eq!(config.effective_columns(12), 12);
        config.columns = Some(6);
        assert_eq!(config.effective_columns(12), 6);
    }
}
