//! Domain logic for the grid widget.
//!
//! - Coordinate transform (pixel <-> grid unit conversions, cell metrics)

pub mod coordinate_transform;

pub use coordinate_transform::GridMetrics;
