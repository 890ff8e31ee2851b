//! Centralized application state for the grid demo.

use crate::config::GridConfig;
use crate::io::demo_layout;
use crate::layout::LayoutState;
use crate::memory_store::MemoryStore;
use crate::traits::StoreHandle;
use crate::ui::GridPanel;
use std::path::PathBuf;
use std::rc::Rc;

/// Main application state.
///
/// The store is the single owner of committed layout; `grid` only keeps a
/// synchronized snapshot of it plus the gesture in progress.
pub struct AppState {
    /// Store holding the committed layout
    pub store: Rc<MemoryStore>,

    /// Grid widget state (store sync and gestures)
    pub grid: GridPanel,

    /// Widget configuration, persisted between sessions
    pub config: GridConfig,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// File the current layout was loaded from or saved to
    pub layout_path: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a state showing the demo layout with default options.
    pub fn new() -> Self {
        Self::with_config(GridConfig::default())
    }

    /// Creates a state showing the demo layout with the given options.
    pub fn with_config(config: GridConfig) -> Self {
        let store = Rc::new(MemoryStore::new(demo_layout()));
        let handle: StoreHandle = store.clone();

        Self {
            grid: GridPanel::new(&handle),
            store,
            config,
            error_message: None,
            layout_path: None,
        }
    }

    /// Returns the store as a trait-object handle for the grid widget.
    pub fn store_handle(&self) -> StoreHandle {
        self.store.clone()
    }

    /// Swaps in a new store holding `layout`.
    ///
    /// The grid widget notices the new store identity on its next frame and
    /// resubscribes.
    pub fn replace_store(&mut self, layout: LayoutState, path: Option<PathBuf>) {
        self.store = Rc::new(MemoryStore::new(layout));
        self.layout_path = path;
        self.error_message = None;
    }
}
