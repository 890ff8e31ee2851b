//! Input handling subsystem for the grid widget.
//!
//! This module contains all pointer handling logic:
//! - Pointer capture (window-wide listening, scoped to one gesture)
//! - Pointer events (translation from egui input, hit testing)
//! - Gesture controller (drag and resize state machine)

pub mod pointer_capture;
pub mod pointer_events;
pub mod gesture_controller;

pub use pointer_capture::{PointerCapture, PointerHub};
pub use pointer_events::{PointerEvent, PointerTarget};
pub use gesture_controller::{GestureController, GridContext};
