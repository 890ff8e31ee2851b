//! Settings persistence for the grid demo.
//!
//! Values are stored as JSON strings in eframe's persistent storage. A value
//! that is missing falls back silently; one that fails to parse falls back with
//! a warning.

use serde::{Deserialize, Serialize};
use crate::config::GridConfig;

/// Storage key for the grid widget options.
pub const GRID_CONFIG_KEY: &str = "grid_config";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the grid options, falling back to the defaults.
    pub fn load_grid_config(storage: Option<&dyn eframe::Storage>) -> GridConfig {
        Self::load_setting_or(storage, GRID_CONFIG_KEY, GridConfig::default())
    }

    /// Saves the grid options.
    pub fn save_grid_config(storage: &mut dyn eframe::Storage, config: &GridConfig) {
        Self::save_setting(storage, GRID_CONFIG_KEY, config);
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface, if persistence is enabled
    /// * `key` - The storage key for this setting
    /// * `default` - Returned when the key is missing or its value is invalid
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring stored setting '{}': {}", key, e);
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => tracing::warn!("Failed to serialize setting '{}': {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridMode;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_grid_config_round_trip() {
        let mut storage = MockStorage::new();
        let config = GridConfig {
            mode: GridMode::Fluid,
            cell_height: 80.0,
            columns: Some(6),
            show_grid: true,
            ..GridConfig::default()
        };

        SettingsCoordinator::save_grid_config(&mut storage, &config);
        assert_eq!(SettingsCoordinator::load_grid_config(Some(&storage)), config);
    }

    #[test]
    fn test_missing_storage_uses_defaults() {
        assert_eq!(SettingsCoordinator::load_grid_config(None), GridConfig::default());

        let storage = MockStorage::new();
        assert_eq!(SettingsCoordinator::load_grid_config(Some(&storage)), GridConfig::default());
    }

    #[test]
    fn test_corrupt_value_falls_back() {
        let mut storage = MockStorage::new();
        storage.set_string(GRID_CONFIG_KEY, "{not json".to_string());

        assert_eq!(SettingsCoordinator::load_grid_config(Some(&storage)), GridConfig::default());
        let result: Option<GridConfig> = SettingsCoordinator::try_load_setting(Some(&storage), GRID_CONFIG_KEY);
        assert!(result.is_none());
    }

    #[test]
    fn test_older_config_keeps_new_defaults() {
        let mut storage = MockStorage::new();
        storage.set_string(GRID_CONFIG_KEY, r#"{"cell_width": 64.0}"#.to_string());

        let config = SettingsCoordinator::load_grid_config(Some(&storage));
        assert_eq!(config.cell_width, 64.0);
        assert!(config.draggable);
        assert!(config.resizable);
    }
}
