// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo application's configuration, including
//! loading and saving user preferences to a `settings.toml` file.
//!
//! The widget itself is configured per-call; only the demo shell (theme,
//! default dismiss duration) is persisted here.

use crate::error::Result;
use crate::snackbar::Timer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSnackbar";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: "light", "dark", or "system".
    pub theme: Option<String>,
    /// Default dismiss duration: "short" or "long".
    #[serde(default)]
    pub default_timer: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Some("system".to_string()),
            default_timer: Some("short".to_string()),
        }
    }
}

impl Config {
    /// Resolves the configured default timer, falling back to [`Timer::Short`]
    /// on unknown values.
    #[must_use]
    pub fn default_timer(&self) -> Timer {
        match self.default_timer.as_deref() {
            Some("long") => Timer::Long,
            _ => Timer::Short,
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

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
