// SPDX-License-Identifier: MPL-2.0
//! This module loads the application's configuration from a `settings.toml`
//! file. The file is written by hand; the application never rewrites it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Source location, thumbnails, fetching, refresh and animation
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let _source = config.gallery.source.as_deref();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::infrastructure::source::SourceLayout;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery source and presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Base URL or directory holding the manifest and images directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Manifest file name relative to the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_name: Option<String>,

    /// Images directory relative to the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_dir: Option<String>,

    /// Longest edge of card thumbnails, in pixels.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<u32>,

    /// Staggered fade-in of cards after a load.
    #[serde(
        default = "default_entrance_animation",
        skip_serializing_if = "Option::is_none"
    )]
    pub entrance_animation: Option<bool>,

    /// Reload the manifest every N seconds. Disabled when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_refresh_secs: Option<u64>,

    /// Image requests allowed in flight at once.
    #[serde(
        default = "default_max_concurrent_fetches",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_concurrent_fetches: Option<usize>,

    /// Decoded images kept across refreshes.
    #[serde(
        default = "default_cache_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_capacity: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            source: None,
            manifest_name: None,
            images_dir: None,
            thumbnail_size: default_thumbnail_size(),
            entrance_animation: default_entrance_animation(),
            auto_refresh_secs: None,
            max_concurrent_fetches: default_max_concurrent_fetches(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl GalleryConfig {
    /// Source string, defaulting to the current directory.
    #[must_use]
    pub fn source_or_default(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    #[must_use]
    pub fn layout(&self) -> SourceLayout {
        SourceLayout {
            manifest_name: self
                .manifest_name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MANIFEST_NAME.to_string()),
            images_dir: self
                .images_dir
                .clone()
                .filter(|dir| !dir.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGES_DIR.to_string()),
        }
    }

    #[must_use]
    pub fn thumbnail_size(&self) -> u32 {
        self.thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    #[must_use]
    pub fn entrance_animation(&self) -> bool {
        self.entrance_animation.unwrap_or(true)
    }

    /// Refresh interval, clamped to the accepted range. `None` disables it.
    #[must_use]
    pub fn auto_refresh(&self) -> Option<Duration> {
        self.auto_refresh_secs
            .filter(|secs| *secs > 0)
            .map(|secs| Duration::from_secs(secs.clamp(MIN_AUTO_REFRESH_SECS, MAX_AUTO_REFRESH_SECS)))
    }

    #[must_use]
    pub fn max_concurrent_fetches(&self) -> usize {
        self.max_concurrent_fetches
            .unwrap_or(DEFAULT_MAX_CONCURRENT_FETCHES)
            .clamp(MIN_CONCURRENT_FETCHES, MAX_CONCURRENT_FETCHES)
    }

    #[must_use]
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
            .unwrap_or(DEFAULT_CACHE_CAPACITY)
            .clamp(MIN_CACHE_CAPACITY, MAX_CACHE_CAPACITY)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_thumbnail_size() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn default_entrance_animation() -> Option<bool> {
    Some(true)
}

fn default_max_concurrent_fetches() -> Option<usize> {
    Some(DEFAULT_MAX_CONCURRENT_FETCHES)
}

fn default_cache_capacity() -> Option<usize> {
    Some(DEFAULT_CACHE_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn serialized_config_loads_back_unchanged() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                source: Some("https://example.com/gallery/".to_string()),
                thumbnail_size: Some(256),
                entrance_animation: Some(false),
                auto_refresh_secs: Some(30),
                ..GalleryConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        fs::create_dir_all(config_path.parent().expect("nested path"))
            .expect("failed to create config dir");
        let content = toml::to_string_pretty(&config).expect("failed to serialize config");
        fs::write(&config_path, content).expect("failed to write config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_file_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery]\nthumbnail_size = \"big\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.source_or_default(), ".");
        assert_eq!(config.gallery.thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
        assert!(config.gallery.entrance_animation());
        assert_eq!(config.gallery.auto_refresh(), None);
        assert_eq!(
            config.gallery.max_concurrent_fetches(),
            DEFAULT_MAX_CONCURRENT_FETCHES
        );
        assert_eq!(config.gallery.layout(), SourceLayout::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let gallery = GalleryConfig {
            thumbnail_size: Some(10_000),
            auto_refresh_secs: Some(1),
            max_concurrent_fetches: Some(0),
            cache_capacity: Some(0),
            ..GalleryConfig::default()
        };

        assert_eq!(gallery.thumbnail_size(), MAX_THUMBNAIL_SIZE);
        assert_eq!(
            gallery.auto_refresh(),
            Some(Duration::from_secs(MIN_AUTO_REFRESH_SECS))
        );
        assert_eq!(gallery.max_concurrent_fetches(), MIN_CONCURRENT_FETCHES);
        assert_eq!(gallery.cache_capacity(), MIN_CACHE_CAPACITY);
    }

    #[test]
    fn zero_refresh_interval_disables_refresh() {
        let gallery = GalleryConfig {
            auto_refresh_secs: Some(0),
            ..GalleryConfig::default()
        };
        assert_eq!(gallery.auto_refresh(), None);
    }

    #[test]
    fn blank_layout_names_fall_back_to_defaults() {
        let gallery = GalleryConfig {
            manifest_name: Some("  ".to_string()),
            images_dir: Some("photos".to_string()),
            ..GalleryConfig::default()
        };
        let layout = gallery.layout();
        assert_eq!(layout.manifest_name, "images.json");
        assert_eq!(layout.images_dir, "photos");
    }

    #[test]
    fn sectioned_toml_is_parsed() {
        let content = r#"
            [general]
            language = "fr"
            theme_mode = "Dark"

            [gallery]
            source = "/srv/photos"
            auto_refresh_secs = 60
        "#;
        let config: Config = toml::from_str(content).expect("valid toml");

        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.gallery.source_or_default(), "/srv/photos");
        assert_eq!(config.gallery.auto_refresh(), Some(Duration::from_secs(60)));
        assert_eq!(config.gallery.thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
    }
}
