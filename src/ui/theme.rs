use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

pub const DEFAULT_THEME: &str = "modern";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: String,
    pub background_light: String,
    pub border: String,
    pub text: String,
    pub text_highlight: String,
    pub accent: String,
    pub chart_primary: String,
    pub chart_secondary: String,
    pub chart_tertiary: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // User themes take precedence over the bundled set
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("charsheet")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: "#1a2433".to_string(),
            background_light: "#2a3443".to_string(),
            border: "#00ccdd".to_string(),
            text: "#ffffff".to_string(),
            text_highlight: "#88ddff".to_string(),
            accent: "#00ccdd".to_string(),
            chart_primary: "#00ccdd".to_string(),
            chart_secondary: "#88ddff".to_string(),
            chart_tertiary: "#ffffff".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn background(&self) -> Color { Self::parse_color(&self.background) }
    pub fn background_light(&self) -> Color { Self::parse_color(&self.background_light) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn text(&self) -> Color { Self::parse_color(&self.text) }
    pub fn text_highlight(&self) -> Color { Self::parse_color(&self.text_highlight) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn chart_primary(&self) -> Color { Self::parse_color(&self.chart_primary) }
    pub fn chart_secondary(&self) -> Color { Self::parse_color(&self.chart_secondary) }
    pub fn chart_tertiary(&self) -> Color { Self::parse_color(&self.chart_tertiary) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_themes_are_bundled() {
        let mut names = Theme::available_themes();
        names.sort();
        assert_eq!(names, vec!["classic", "modern", "vintage"]);
    }

    #[test]
    fn every_bundled_theme_parses() {
        for name in Theme::available_themes() {
            let theme = Theme::load(&name).unwrap_or_else(|| panic!("{name} failed to load"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn applying_a_selection_is_idempotent() {
        let first = Theme::load("classic").unwrap();
        let second = Theme::load("classic").unwrap();
        assert_eq!(first.colors.accent(), second.colors.accent());
        assert_eq!(first.colors.background(), second.colors.background());
        assert_eq!(first.colors.chart_primary(), second.colors.chart_primary());
    }

    #[test]
    fn parse_color_handles_hex_and_garbage() {
        assert_eq!(
            ThemeColors::parse_color("#ffd700"),
            Color::Rgb(0xff, 0xd7, 0x00)
        );
        assert_eq!(ThemeColors::parse_color("ffd700"), Color::Rgb(0xff, 0xd7, 0x00));
        assert_eq!(ThemeColors::parse_color("#zzz"), Color::White);
        assert_eq!(ThemeColors::parse_color(""), Color::White);
    }

    #[test]
    fn unknown_theme_is_none_and_default_falls_back() {
        assert!(Theme::load("no-such-theme").is_none());
        let theme = Theme::default();
        assert_eq!(theme.name, DEFAULT_THEME);
    }
}
