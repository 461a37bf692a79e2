//! # Configuration
//!
//! Sunpanel configuration is managed by [`clapfig`], which handles layered
//! loading from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `SUNPANEL__PRETTY_JSON`, `SUNPANEL__LOG_FILTER`, etc.
//! 2. **Data dir config**: `.sunpanel/sunpanel.toml`
//! 3. **User config**: OS-appropriate config directory (via `directories`),
//!    or `$SUNPANEL_CONFIG_DIR` when set.
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `pretty_json` | `true` | Indent collection documents on write |
//! | `log_filter` | `warn` | Tracing filter used when `RUST_LOG` is unset |
//! | `default_collection` | `services` | Collection `list` shows when none is named |

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SunpanelError};
use crate::model::Collection;

/// Configuration for sunpanel, stored in `sunpanel.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SunpanelConfig {
    /// Write collection documents as indented JSON.
    #[config(default = true)]
    pub pretty_json: bool,

    /// Tracing filter directive, e.g. "warn" or "sunpanelapp=debug".
    #[config(default = "warn")]
    pub log_filter: String,

    /// Collection used when a command is given none.
    #[config(default = "services")]
    pub default_collection: String,
}

impl Default for SunpanelConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            log_filter: "warn".to_string(),
            default_collection: "services".to_string(),
        }
    }
}

impl SunpanelConfig {
    pub fn default_collection(&self) -> Result<Collection> {
        self.default_collection
            .parse()
            .map_err(|e: String| SunpanelError::Api(format!("default_collection: {}", e)))
    }

    /// `(key, value)` pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pretty_json", self.pretty_json.to_string()),
            ("log_filter", self.log_filter.clone()),
            ("default_collection", self.default_collection.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SunpanelConfig::default();
        assert!(config.pretty_json);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.default_collection().unwrap(), Collection::Services);
    }

    #[test]
    fn test_parses_toml() {
        let config: SunpanelConfig = toml::from_str(
            r#"
            pretty_json = false
            log_filter = "debug"
            default_collection = "nav_items"
            "#,
        )
        .unwrap();
        assert!(!config.pretty_json);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.default_collection().unwrap(), Collection::NavItems);
    }

    #[test]
    fn test_unknown_default_collection() {
        let config = SunpanelConfig {
            default_collection: "widgets".to_string(),
            ..Default::default()
        };
        let err = config.default_collection().unwrap_err();
        assert!(err.to_string().contains("Unknown collection 'widgets'"));
    }

    #[test]
    fn test_entries_cover_every_key() {
        let keys: Vec<&str> = SunpanelConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["pretty_json", "log_filter", "default_collection"]);
    }
}
