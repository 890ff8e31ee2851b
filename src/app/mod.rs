//! Application-level modules for the grid demo.
//!
//! This module contains the demo's centralized state and the coordinators that
//! act on it.

mod app_state;
mod application_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::SettingsCoordinator;
