// SPDX-License-Identifier: MPL-2.0
//! This module handles the queue configuration, including loading and saving
//! it to a `toasts.toml` file.
//!
//! Every field is optional in the file: whatever is present is merged over
//! the built-in defaults from [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use toast_queue::config::{self, ToastConfig};
//! use toast_queue::notifications::Position;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_position = Position::BottomCenter;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::notifications::{Position, Variant};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "ToastQueue";

/// Per-position toast capacity.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–50 entries).
///
/// # Example
///
/// ```
/// use toast_queue::config::MaxToasts;
///
/// assert_eq!(MaxToasts::new(3).value(), 3);
///
/// // Values outside range are clamped
/// assert_eq!(MaxToasts::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct MaxToasts(usize);

impl MaxToasts {
    /// Creates a new capacity value, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_MAX_TOASTS, MAX_MAX_TOASTS))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxToasts {
    fn default() -> Self {
        Self(DEFAULT_MAX_TOASTS)
    }
}

impl From<usize> for MaxToasts {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<MaxToasts> for usize {
    fn from(value: MaxToasts) -> Self {
        value.0
    }
}

/// Distance of the toast stacks from the screen edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub x: u16,
    pub y: u16,
}

impl Default for Offset {
    fn default() -> Self {
        Self {
            x: DEFAULT_OFFSET_X,
            y: DEFAULT_OFFSET_Y,
        }
    }
}

/// Queue configuration, fixed for the lifetime of a manager.
///
/// The manager itself only reads the defaults and `max_toasts`; the pause
/// flags gate [`Manager::pause`](crate::notifications::Manager::pause) and
/// friends, and the layout fields are forwarded to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub default_duration_ms: u64,
    pub default_position: Position,
    pub default_variant: Variant,
    pub max_toasts: MaxToasts,
    pub pause_on_hover: bool,
    pub pause_on_focus_loss: bool,
    pub gap: u16,
    pub offset: Offset,
}

impl ToastConfig {
    /// Returns the default auto-dismiss duration.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
            default_position: Position::default(),
            default_variant: Variant::default(),
            max_toasts: MaxToasts::default(),
            pause_on_hover: DEFAULT_PAUSE_ON_HOVER,
            pause_on_focus_loss: DEFAULT_PAUSE_ON_FOCUS_LOSS,
            gap: DEFAULT_GAP,
            offset: Offset::default(),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Parses a TOML document, merging present fields over the defaults.
pub fn parse(content: &str) -> Result<ToastConfig> {
    Ok(toml::from_str(content)?)
}

pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a config file. Unparseable content falls back to the defaults.
pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    match parse(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!("Ignoring invalid toast config {}: {}", path.display(), err);
            Ok(ToastConfig::default())
        }
    }
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_documented_values() {
        let config = ToastConfig::default();
        assert_eq!(config.default_duration(), Duration::from_millis(4000));
        assert_eq!(config.default_position, Position::TopRight);
        assert_eq!(config.default_variant, Variant::Filled);
        assert_eq!(config.max_toasts.value(), 5);
        assert!(config.pause_on_hover);
        assert!(config.pause_on_focus_loss);
        assert_eq!(config.gap, 8);
        assert_eq!(config.offset, Offset { x: 16, y: 16 });
    }

    #[test]
    fn partial_document_merges_over_defaults() {
        let config = parse(
            r#"
            default_position = "bottom-left"
            max_toasts = 2
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.default_position, Position::BottomLeft);
        assert_eq!(config.max_toasts.value(), 2);
        assert_eq!(config.default_duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(config.default_variant, Variant::Filled);
    }

    #[test]
    fn max_toasts_is_clamped_when_parsed() {
        let config = parse("max_toasts = 0").expect("config should parse");
        assert_eq!(config.max_toasts.value(), MIN_MAX_TOASTS);

        let config = parse("max_toasts = 1000").expect("config should parse");
        assert_eq!(config.max_toasts.value(), MAX_MAX_TOASTS);
    }

    #[test]
    fn parse_rejects_unknown_position() {
        assert!(parse(r#"default_position = "middle""#).is_err());
    }

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = ToastConfig {
            default_duration_ms: 1500,
            default_position: Position::TopCenter,
            default_variant: Variant::Outlined,
            max_toasts: MaxToasts::new(3),
            pause_on_hover: false,
            ..ToastConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toasts.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, ToastConfig::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
