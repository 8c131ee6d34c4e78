use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ui::theme::DEFAULT_THEME;
use crate::view_mode::DEFAULT_COMPACT_WIDTH;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,
    #[serde(default = "default_animations")]
    pub animations: bool,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}
fn default_compact_width() -> u16 {
    DEFAULT_COMPACT_WIDTH
}
fn default_animations() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            compact_width: default_compact_width(),
            animations: default_animations(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("charsheet")
            .join("config.toml")
    }

    /// Clamp hand-edited values into workable ranges.
    pub fn validate(&mut self) {
        self.compact_width = self.compact_width.clamp(20, 500);
        if self.theme.is_empty() {
            self.theme = default_theme();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gets_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, DEFAULT_THEME);
        assert_eq!(config.compact_width, DEFAULT_COMPACT_WIDTH);
        assert!(config.animations);
    }

    #[test]
    fn partial_config_keeps_known_fields() {
        let config: Config = toml::from_str("theme = \"classic\"").unwrap();
        assert_eq!(config.theme, "classic");
        assert_eq!(config.compact_width, DEFAULT_COMPACT_WIDTH);
    }

    #[test]
    fn validate_clamps_width_and_theme() {
        let mut config = Config {
            theme: String::new(),
            compact_width: 5,
            animations: false,
        };
        config.validate();
        assert_eq!(config.compact_width, 20);
        assert_eq!(config.theme, DEFAULT_THEME);

        config.compact_width = 9999;
        config.validate();
        assert_eq!(config.compact_width, 500);
    }

    #[test]
    fn config_round_trips() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.compact_width, deserialized.compact_width);
        assert_eq!(config.animations, deserialized.animations);
    }
}
