// SPDX-License-Identifier: MPL-2.0
//! Overlay configuration, loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toasts]` - Queue capacity, anchor position and default lifetime
//! - `[modal]` - Default dialog size, close button and animation length
//!
//! Every field is optional; missing values fall back to the constants in
//! [`defaults`]. Out-of-range values are clamped where they are consumed.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `CASINO_OVERLAYS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use casino_overlays::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.toasts.max_toasts = Some(3);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::modal::ModalSize;
use crate::ui::notifications::AnchorPosition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced when the config file exists but cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastsConfig {
    #[serde(
        default = "default_max_toasts",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_toasts: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<AnchorPosition>,

    #[serde(
        default = "default_toast_ttl_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_ttl_ms: Option<u64>,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            max_toasts: default_max_toasts(),
            position: Some(AnchorPosition::default()),
            default_ttl_ms: default_toast_ttl_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_size: Option<ModalSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_close_button: Option<bool>,

    #[serde(
        default = "default_modal_animation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animation_ms: Option<u64>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            default_size: Some(ModalSize::default()),
            show_close_button: Some(true),
            animation_ms: default_modal_animation_ms(),
        }
    }
}

impl ModalConfig {
    #[must_use]
    pub fn size(&self) -> ModalSize {
        self.default_size.unwrap_or_default()
    }

    #[must_use]
    pub fn close_button(&self) -> bool {
        self.show_close_button.unwrap_or(true)
    }

    /// Dialog animation length, clamped to `0..=MAX_MODAL_ANIMATION_MS`.
    #[must_use]
    pub fn animation(&self) -> Duration {
        let ms = self
            .animation_ms
            .unwrap_or(DEFAULT_MODAL_ANIMATION_MS)
            .min(MAX_MODAL_ANIMATION_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastsConfig,

    #[serde(default)]
    pub modal: ModalConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_toasts() -> Option<usize> {
    Some(DEFAULT_MAX_TOASTS)
}

fn default_toast_ttl_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_TTL_MS)
}

fn default_modal_animation_ms() -> Option<u64> {
    Some(DEFAULT_MODAL_ANIMATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// the default config with [`LOAD_ERROR_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("falling back to default config: {err}");
            (Config::default(), Some(LOAD_ERROR_WARNING.to_string()))
        }
    }
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
