//! Application settings: the selected theme, persisted as TOML.
//!
//! Loading is load-or-default: a missing or malformed config file never
//! surfaces as an error, it just resets to defaults and rewrites the file.

use crate::theme::ThemeVariant;
use directories::ProjectDirs;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    pub theme: ThemeVariant,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let figment = Figment::new().merge(Toml::file(config_path()));

        match figment.extract() {
            Ok(settings) => Ok(settings),
            Err(_) => {
                let default_settings = Settings::default();
                default_settings.save().unwrap_or_default();
                Ok(default_settings)
            }
        }
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        let toml_string =
            toml::to_string_pretty(self).expect("Failed to serialize settings to TOML");
        let path = config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml_string)
    }
}

/// Per-user config file location, falling back to the working directory
/// when the platform directories cannot be resolved.
pub fn config_path() -> PathBuf {
    match ProjectDirs::from("", "", "habitsys") {
        Some(dirs) => dirs.config_dir().join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_green() {
        assert_eq!(Settings::default().theme, ThemeVariant::Green);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings {
            theme: ThemeVariant::Purple,
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back.theme, ThemeVariant::Purple);
    }
}
