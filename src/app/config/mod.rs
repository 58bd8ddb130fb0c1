// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file the user edits by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Viewer breakpoint, swipe thresholds, desktop sizing
//! - `[host]` - Host page sorting, thumbnail size, remote image cache
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `SAMISKE_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! Out-of-range values are never rejected. They are clamped when turned into
//! runtime settings, so a hand-edited file cannot break the viewer.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gallery::{Breakpoint, HeightRatio, SwipeThreshold};
use crate::error::{Error, Result};
use crate::ui::gallery::{SwipeThresholds, ViewerOptions};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing settings file cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Enums
// =============================================================================

/// Order of images discovered in a directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "nb-NO").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Width below which the mobile layout is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_breakpoint: Option<f32>,

    /// Horizontal swipe distance that navigates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_swipe_threshold: Option<f32>,

    /// Downward swipe distance that closes the viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismiss_swipe_threshold: Option<f32>,

    /// Maximum desktop image height as a share of the window height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_max_height_ratio: Option<f32>,

    /// Whether the desktop layout shows a thumbnail strip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_thumbnails: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: Some(DEFAULT_MOBILE_BREAKPOINT),
            horizontal_swipe_threshold: Some(DEFAULT_HORIZONTAL_SWIPE_THRESHOLD),
            dismiss_swipe_threshold: Some(DEFAULT_DISMISS_SWIPE_THRESHOLD),
            desktop_max_height_ratio: Some(DEFAULT_DESKTOP_MAX_HEIGHT_RATIO),
            show_thumbnails: Some(true),
        }
    }
}

/// Host page settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostConfig {
    /// Image ordering when a directory is opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Thumbnail edge length on the host page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_size: Option<f32>,

    /// Number of downloaded images kept in memory. Raised at runtime when
    /// more thumbnails than this are on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_cache_entries: Option<usize>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::default()),
            thumbnail_size: Some(DEFAULT_THUMBNAIL_SIZE),
            remote_cache_entries: Some(DEFAULT_REMOTE_CACHE_ENTRIES),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Viewer settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Host page settings.
    #[serde(default)]
    pub host: HostConfig,
}

impl Config {
    /// Builds viewer options, clamping every value into its valid range.
    #[must_use]
    pub fn viewer_options(&self) -> ViewerOptions {
        let gallery = &self.gallery;
        ViewerOptions {
            breakpoint: Breakpoint::new(
                gallery
                    .mobile_breakpoint
                    .unwrap_or(DEFAULT_MOBILE_BREAKPOINT),
            ),
            swipe: SwipeThresholds {
                horizontal: SwipeThreshold::new(
                    gallery
                        .horizontal_swipe_threshold
                        .unwrap_or(DEFAULT_HORIZONTAL_SWIPE_THRESHOLD),
                ),
                dismiss: SwipeThreshold::new(
                    gallery
                        .dismiss_swipe_threshold
                        .unwrap_or(DEFAULT_DISMISS_SWIPE_THRESHOLD),
                ),
            },
            desktop_max_height: HeightRatio::new(
                gallery
                    .desktop_max_height_ratio
                    .unwrap_or(DEFAULT_DESKTOP_MAX_HEIGHT_RATIO),
            ),
            show_thumbnails: gallery.show_thumbnails.unwrap_or(true),
        }
    }

    /// Directory sort order.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.host.sort_order.unwrap_or_default()
    }

    /// Thumbnail edge length, clamped.
    #[must_use]
    pub fn thumbnail_size(&self) -> f32 {
        let size = self.host.thumbnail_size.unwrap_or(DEFAULT_THUMBNAIL_SIZE);
        if size.is_nan() {
            return DEFAULT_THUMBNAIL_SIZE;
        }
        size.clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    /// Remote cache capacity, clamped.
    #[must_use]
    pub fn remote_cache_entries(&self) -> usize {
        self.host
            .remote_cache_entries
            .unwrap_or(DEFAULT_REMOTE_CACHE_ENTRIES)
            .clamp(MIN_REMOTE_CACHE_ENTRIES, MAX_REMOTE_CACHE_ENTRIES)
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
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

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("nb-NO".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                mobile_breakpoint: Some(600.0),
                horizontal_swipe_threshold: Some(30.0),
                dismiss_swipe_threshold: Some(150.0),
                desktop_max_height_ratio: Some(0.7),
                show_thumbnails: Some(false),
            },
            host: HostConfig {
                sort_order: Some(SortOrder::ModifiedDate),
                thumbnail_size: Some(120.0),
                remote_cache_entries: Some(8),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gallery]\nmobile_breakpoint = 900.0\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.gallery.mobile_breakpoint, Some(900.0));
        assert_eq!(loaded.gallery.horizontal_swipe_threshold, None);
        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.host, HostConfig::default());

        let options = loaded.viewer_options();
        assert_abs_diff_eq!(options.breakpoint.value(), 900.0);
        assert_abs_diff_eq!(
            options.swipe.horizontal.value(),
            DEFAULT_HORIZONTAL_SWIPE_THRESHOLD
        );
    }

    #[test]
    fn default_viewer_options_match_documented_values() {
        let options = Config::default().viewer_options();
        assert_abs_diff_eq!(options.breakpoint.value(), 768.0);
        assert_abs_diff_eq!(options.swipe.horizontal.value(), 50.0);
        assert_abs_diff_eq!(options.swipe.dismiss.value(), 100.0);
        assert!(options.show_thumbnails);
        assert_eq!(options, ViewerOptions::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            gallery: GalleryConfig {
                mobile_breakpoint: Some(5.0),
                horizontal_swipe_threshold: Some(-10.0),
                dismiss_swipe_threshold: Some(10_000.0),
                desktop_max_height_ratio: Some(4.0),
                show_thumbnails: None,
            },
            host: HostConfig {
                sort_order: None,
                thumbnail_size: Some(1.0),
                remote_cache_entries: Some(0),
            },
            ..Config::default()
        };

        let options = config.viewer_options();
        assert_abs_diff_eq!(options.breakpoint.value(), 320.0);
        assert_abs_diff_eq!(options.swipe.horizontal.value(), SwipeThreshold::MIN);
        assert_abs_diff_eq!(options.swipe.dismiss.value(), SwipeThreshold::MAX);
        assert_abs_diff_eq!(options.desktop_max_height.value(), 1.0);
        assert!(options.show_thumbnails);
        assert_abs_diff_eq!(config.thumbnail_size(), MIN_THUMBNAIL_SIZE);
        assert_eq!(config.remote_cache_entries(), MIN_REMOTE_CACHE_ENTRIES);
        assert_eq!(config.sort_order(), SortOrder::Alphabetical);
    }

    #[test]
    fn sort_order_uses_kebab_case() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[host]\nsort_order = \"created-date\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.sort_order(), SortOrder::CreatedDate);
    }

    #[test]
    fn load_with_override_reads_settings_from_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        save_to_path(&config, &base_dir.join(CONFIG_FILE)).expect("failed to save");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\nbroken")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }
}
