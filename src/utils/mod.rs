//! Utility modules for the grid demo.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_count, format_geometry};
