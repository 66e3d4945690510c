//! Configuration structures and parsing.

use serde::{Deserialize, Serialize};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scrollback: ScrollbackConfig,
    pub font: FontConfig,
}

/// Scrollback and viewport behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbackConfig {
    /// Maximum history lines to retain.
    pub max_lines: usize,
    /// Lines scrolled per wheel tick or keybinding step.
    pub scroll_lines: usize,
    /// Whether scrolling translates the selection in place instead of
    /// clearing it once it is partially off screen.
    pub keep_selection: bool,
}

impl Default for ScrollbackConfig {
    fn default() -> Self {
        Self {
            max_lines: 10_000,
            scroll_lines: 3,
            keep_selection: true,
        }
    }
}

/// Font shaping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// OpenType features to enable/disable during text shaping.
    ///
    /// Each string is a 4-character feature tag, optionally prefixed with
    /// `-` to disable. Examples: `"calt"`, `"liga"`, `"-dlig"`.
    pub features: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            features: vec!["calt".to_owned(), "liga".to_owned()],
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Serialize this configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.scrollback.max_lines, 10_000);
        assert_eq!(config.scrollback.scroll_lines, 3);
        assert!(config.scrollback.keep_selection);
        assert_eq!(config.font.features, vec!["calt", "liga"]);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.scrollback.max_lines, 10_000);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [scrollback]
            max_lines = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.scrollback.max_lines, 500);
        assert_eq!(config.scrollback.scroll_lines, 3);
        assert!(config.scrollback.keep_selection);
    }

    #[test]
    fn full_toml_round_trips() {
        let config = Config::from_toml(
            r#"
            [scrollback]
            max_lines = 2000
            scroll_lines = 5
            keep_selection = false

            [font]
            features = ["calt", "-dlig"]
            "#,
        )
        .unwrap();
        assert_eq!(config.scrollback.scroll_lines, 5);
        assert!(!config.scrollback.keep_selection);
        assert_eq!(config.font.features, vec!["calt", "-dlig"]);

        let reparsed = Config::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(reparsed.scrollback.max_lines, 2000);
        assert_eq!(reparsed.font.features, config.font.features);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml("[scrollback\nmax_lines = ").is_err());
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(Config::from_toml("[scrollback]\nmax_lines = \"lots\"").is_err());
    }
}
