pub mod traits;
pub mod layout;
pub mod config;
pub mod memory_store;
pub mod domain;
pub mod state;
pub mod rendering;
pub mod ui;
pub mod io;
pub mod app;
pub mod utils;

// Export store seam
pub use traits::{LayoutStore, Listener, StoreHandle, Subscription, same_store};

// Export layout data
pub use layout::{GridItem, GridPos, GridSize, ItemId, LayoutAction, LayoutError, LayoutState};

// Export configuration
pub use config::{GridConfig, GridMode};

// Export reference store
pub use memory_store::MemoryStore;

// Export core components
pub use domain::GridMetrics;
pub use state::{GestureState, StateSync};
pub use ui::input::{GestureController, GridContext, PointerHub};
pub use ui::{GridPanel, GridPanelResponse, PanelContent};
