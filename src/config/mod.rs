// SPDX-License-Identifier: MPL-2.0
//! Posting configuration, optionally loaded from a `post.toml` file.
//!
//! # Examples
//!
//! ```
//! use iced_post::config::{self, PostConfig};
//! use iced_post::domain::Order;
//!
//! let config = config::from_toml_str(
//!     r#"
//!     serial = false
//!     dismiss_after_secs = 3.0
//!     order = "bottom_to_top"
//!     "#,
//! );
//! assert!(!config.serial);
//! assert_eq!(config.order, Order::BottomToTop);
//! assert_eq!(config.dismiss_after().map(|d| d.as_secs()), Some(3));
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::{Order, PostAnimation};
use crate::error::Result;
use crate::post::normalize_dismiss_secs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "post.toml";
const APP_NAME: &str = "IcedPost";

/// The small set of named options a `PostManager` is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostConfig {
    /// Present one item at a time, queueing the rest.
    pub serial: bool,
    /// Default auto-dismiss delay in seconds; `None`, zero or negative means never.
    pub dismiss_after_secs: Option<f64>,
    /// Default animation flags for requests built from this config.
    pub animation: PostAnimation,
    /// Stacking and pan-to-dismiss direction.
    pub order: Order,
    /// Register tap-to-remove on every item once it is shown.
    pub tap_to_remove: bool,
    /// Register pan-to-remove on every item once it is shown.
    pub pan_to_remove: bool,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            serial: DEFAULT_SERIAL_QUEUE,
            dismiss_after_secs: DEFAULT_DISMISS.map(|d| d.as_secs_f64()),
            animation: PostAnimation::default(),
            order: Order::default(),
            tap_to_remove: false,
            pan_to_remove: false,
        }
    }
}

impl PostConfig {
    /// The normalized default dismiss delay.
    #[must_use]
    pub fn dismiss_after(&self) -> Option<Duration> {
        normalize_dismiss_secs(self.dismiss_after_secs)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the user configuration, or the defaults when none exists.
pub fn load() -> Result<PostConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(PostConfig::default())
}

pub fn load_from_path(path: &Path) -> Result<PostConfig> {
    let content = fs::read_to_string(path)?;
    Ok(from_toml_str(&content))
}

/// Parses a configuration, falling back to defaults on malformed input.
#[must_use]
pub fn from_toml_str(content: &str) -> PostConfig {
    toml::from_str(content).unwrap_or_else(|err| {
        log::warn!("ignoring malformed post configuration: {err}");
        PostConfig::default()
    })
}

pub fn save_to_path(config: &PostConfig, path: &Path) -> Result<()> {
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
    fn save_and_load_round_trip_preserves_options() {
        let config = PostConfig {
            serial: false,
            dismiss_after_secs: Some(2.5),
            animation: PostAnimation::ON_REMOVE,
            order: Order::BottomToTop,
            tap_to_remove: true,
            pan_to_remove: true,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("post.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("post.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, PostConfig::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = from_toml_str("pan_to_remove = true");
        assert!(config.pan_to_remove);
        assert_eq!(config.serial, DEFAULT_SERIAL_QUEUE);
        assert_eq!(config.animation, PostAnimation::BOTH);
    }

    #[test]
    fn non_positive_dismiss_is_normalized_to_never() {
        let config = PostConfig {
            dismiss_after_secs: Some(-1.0),
            ..PostConfig::default()
        };
        assert_eq!(config.dismiss_after(), None);
    }

    #[test]
    fn default_config_is_serial_without_timer() {
        let config = PostConfig::default();
        assert!(config.serial);
        assert_eq!(config.dismiss_after(), None);
        assert_eq!(config.order, Order::TopToBottom);
    }
}
