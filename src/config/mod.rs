//! Map configuration
//!
//! Defaults ship with the binary in `geodeck_defaults.toml` and are parsed
//! once on first use. A user file given with `--config` is merged over
//! them key by key, so it only needs to name the values it changes.

use std::collections::HashMap;
use std::fs;

use lazy_static::lazy_static;
use log::{debug, warn};
use serde::Deserialize;

use crate::errors::{GeoDeckError, GeoDeckResult};

lazy_static! {
    // Parse the embedded defaults at startup
    static ref DEFAULT_CONFIG: toml::Value = {
        let content = include_str!("../../geodeck_defaults.toml");
        toml::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in defaults: {}", e);
            toml::Value::Table(toml::map::Map::new())
        })
    };
}

/// Size of the surface the initial view is fitted to
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceConfig {
    pub width: f64,
    pub height: f64,
}

/// View state limits
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom used when the data extent is degenerate; `None` makes that an error
    #[serde(default)]
    pub fallback_zoom: Option<f64>,
}

/// Layer settings not exposed on the command line
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerDefaults {
    pub elevation_range: [f64; 2],
}

/// Settings for the generated HTML page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    pub title: String,
    pub deck_url: String,
}

/// Complete configuration for a map run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
    pub surface: SurfaceConfig,
    pub view: ViewConfig,
    pub layer: LayerDefaults,
    pub page: PageConfig,
}

impl MapConfig {
    /// The built-in configuration
    pub fn defaults() -> GeoDeckResult<Self> {
        Self::from_value(DEFAULT_CONFIG.clone())
    }

    /// Load the configuration, merging `path` over the defaults if given
    ///
    /// # Returns
    /// The merged configuration, `InputFileError` if the file cannot be
    /// read, or `ConfigurationError` if it is not valid
    pub fn load(path: Option<&str>) -> GeoDeckResult<Self> {
        match path {
            Some(path) => {
                debug!("Loading configuration overrides from {}", path);
                let content = fs::read_to_string(path)
                    .map_err(|e| GeoDeckError::input_file(path, e))?;
                Self::from_overrides(&content)
            }
            None => Self::defaults(),
        }
    }

    /// Merge a TOML document over the defaults
    pub fn from_overrides(content: &str) -> GeoDeckResult<Self> {
        let overrides: toml::Value = toml::from_str(content)?;
        let mut merged = DEFAULT_CONFIG.clone();
        merge_values(&mut merged, overrides);
        Self::from_value(merged)
    }

    fn from_value(value: toml::Value) -> GeoDeckResult<Self> {
        let config: MapConfig = value.try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> GeoDeckResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.surface.width) || !positive(self.surface.height) {
            return Err(GeoDeckError::ConfigurationError(format!(
                "surface size must be positive, got {}x{}",
                self.surface.width, self.surface.height
            )));
        }
        if !(self.view.min_zoom <= self.view.max_zoom) {
            return Err(GeoDeckError::ConfigurationError(format!(
                "min_zoom ({}) must not exceed max_zoom ({})",
                self.view.min_zoom, self.view.max_zoom
            )));
        }
        if let Some(zoom) = self.view.fallback_zoom {
            if !zoom.is_finite() {
                return Err(GeoDeckError::ConfigurationError(format!(
                    "fallback_zoom must be finite, got {}", zoom
                )));
            }
        }
        let [low, high] = self.layer.elevation_range;
        if !(low <= high) {
            return Err(GeoDeckError::ConfigurationError(format!(
                "elevation_range must be ascending, got [{}, {}]", low, high
            )));
        }
        if self.page.deck_url.trim().is_empty() {
            return Err(GeoDeckError::ConfigurationError("deck_url must not be empty".to_string()));
        }
        Ok(())
    }

    /// Flattened `section.key` view of the settings, for logging
    pub fn describe(&self) -> HashMap<&'static str, String> {
        let mut out = HashMap::new();
        out.insert("surface.width", self.surface.width.to_string());
        out.insert("surface.height", self.surface.height.to_string());
        out.insert("view.min_zoom", self.view.min_zoom.to_string());
        out.insert("view.max_zoom", self.view.max_zoom.to_string());
        out.insert(
            "view.fallback_zoom",
            self.view.fallback_zoom.map_or_else(|| "none".to_string(), |z| z.to_string()),
        );
        out.insert(
            "layer.elevation_range",
            format!("{:?}", self.layer.elevation_range),
        );
        out.insert("page.title", self.page.title.clone());
        out.insert("page.deck_url", self.page.deck_url.clone());
        out
    }
}

/// Recursively overlay `overrides` onto `base`; tables merge, everything else replaces
fn merge_values(base: &mut toml::Value, overrides: toml::Value) {
    match (base, overrides) {
        (toml::Value::Table(base_table), toml::Value::Table(override_table)) => {
            for (key, value) in override_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let config = MapConfig::defaults().unwrap();
        assert_eq!(config.surface.width, 500.0);
        assert_eq!(config.surface.height, 500.0);
        assert_eq!(config.view.min_zoom, 13.0);
        assert_eq!(config.view.max_zoom, 20.0);
        assert_eq!(config.view.fallback_zoom, None);
        assert_eq!(config.layer.elevation_range, [0.0, 3000.0]);
        assert!(config.page.deck_url.contains("deck.gl"));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = MapConfig::from_overrides("[surface]\nwidth = 1024.0\n[view]\nfallback_zoom = 15.0\n").unwrap();
        assert_eq!(config.surface.width, 1024.0);
        assert_eq!(config.surface.height, 500.0);
        assert_eq!(config.view.fallback_zoom, Some(15.0));
        assert_eq!(config.view.max_zoom, 20.0);
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let zero_surface = MapConfig::from_overrides("[surface]\nheight = 0.0\n");
        assert!(matches!(zero_surface, Err(GeoDeckError::ConfigurationError(_))));

        let inverted = MapConfig::from_overrides("[view]\nmin_zoom = 21.0\n");
        assert!(matches!(inverted, Err(GeoDeckError::ConfigurationError(_))));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = MapConfig::from_overrides("[view]\nzoom = 3.0\n");
        assert!(matches!(result, Err(GeoDeckError::ConfigurationError(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = MapConfig::from_overrides("[surface\nwidth = 1");
        assert!(matches!(result, Err(GeoDeckError::ConfigurationError(_))));
    }

    #[test]
    fn test_describe_lists_fallback() {
        let config = MapConfig::defaults().unwrap();
        assert_eq!(config.describe()["view.fallback_zoom"], "none");
    }
}
