//! I/O modules for layout files and the built-in demo layout.

pub mod layout_file;
pub mod demo_layout;

// Re-export commonly used functions
pub use layout_file::{load_layout, save_layout};
pub use demo_layout::demo_layout;
