//! Configuration types.
//!
//! - `CatalogConfig`: Where the card catalog resource lives
//! - `ScreenConfig`: Debug screen behaviour (catalog plus FPS window)
//!
//! Both derive serde so a host can keep them in its own settings file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default name of the bundled card catalog resource.
pub const DEFAULT_CATALOG_RESOURCE: &str = "cards.json";

/// Card catalog location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Resource name, resolved by an `AssetSource`.
    pub resource: String,

    /// Root directory for `DirAssets`.
    pub assets_dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            resource: DEFAULT_CATALOG_RESOURCE.to_string(),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl CatalogConfig {
    /// Use a different resource name.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    /// Use a different assets directory.
    #[must_use]
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }
}

/// Debug screen configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub catalog: CatalogConfig,

    /// Load the catalog as soon as the screen is entered.
    /// Otherwise the list stays empty until the reload button is pressed.
    pub load_on_enter: bool,

    /// Length of the FPS sampling window in seconds.
    pub fps_window_secs: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            load_on_enter: false,
            fps_window_secs: 1.0,
        }
    }
}

impl ScreenConfig {
    #[must_use]
    pub fn with_catalog(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn load_on_enter(mut self) -> Self {
        self.load_on_enter = true;
        self
    }

    #[must_use]
    pub fn with_fps_window(mut self, secs: f32) -> Self {
        self.fps_window_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_config_default() {
        let config = CatalogConfig::default();
        assert_eq!(config.resource, "cards.json");
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_screen_config_builder() {
        let config = ScreenConfig::default()
            .with_catalog(CatalogConfig::default().with_resource("debug_cards.json"))
            .load_on_enter()
            .with_fps_window(0.5);

        assert_eq!(config.catalog.resource, "debug_cards.json");
        assert!(config.load_on_enter);
        assert_eq!(config.fps_window_secs, 0.5);
    }

    #[test]
    fn test_screen_config_serialization() {
        let config = ScreenConfig::default().load_on_enter();

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ScreenConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
