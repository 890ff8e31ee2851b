//! State management modules for the grid widget.
//!
//! This module contains state-only logic (no UI concerns):
//! - State sync (cached store snapshot, kept current through a subscription)
//! - Gesture state (idle, dragging with a local preview, resizing)

mod state_sync;
mod gesture_state;

pub use state_sync::StateSync;
pub use gesture_state::GestureState;
