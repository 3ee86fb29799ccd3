// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::ThemeMode;
use iced_snackbar::config::{self, Config};
use iced_snackbar::snackbar::Timer;
use tempfile::tempdir;

#[test]
fn test_theme_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: dark theme
    let initial_config = Config {
        theme: Some("dark".to_string()),
        default_timer: Some("short".to_string()),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(ThemeMode::parse(loaded.theme.as_deref()), ThemeMode::Dark);

    // 2. Change config to light
    let light_config = Config {
        theme: Some("light".to_string()),
        default_timer: Some("long".to_string()),
    };
    config::save_to_path(&light_config, &temp_config_file_path)
        .expect("Failed to write light config file");

    let reloaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load light config from path");
    assert_eq!(ThemeMode::parse(reloaded.theme.as_deref()), ThemeMode::Light);
    assert_eq!(reloaded.default_timer(), Timer::Long);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let missing = dir.path().join("does_not_exist.toml");

    assert!(config::load_from_path(&missing).is_err());

    let defaults = Config::default();
    assert_eq!(ThemeMode::parse(defaults.theme.as_deref()), ThemeMode::System);
    assert_eq!(defaults.default_timer(), Timer::Short);
}
