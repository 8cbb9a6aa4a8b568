//! Configuration loading and management

mod io;
mod location;
mod server;

pub use server::ServerSettings;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How snippet files are laid out under the settings root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SnippetLayout {
    /// `<root>/snippets/<language>.json`
    #[default]
    PerLanguage,
    /// One file for every language, `<root>/<single_file_name>`
    SingleFile,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Use this directory instead of the platform's editor settings root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_root: Option<PathBuf>,

    /// Editor product folder under the platform data directory
    /// ("Code", "Code - Insiders", "VSCodium", ...)
    #[serde(default = "default_editor_dir")]
    pub editor_dir: String,

    #[serde(default)]
    pub layout: SnippetLayout,

    /// File name used with `layout = "single-file"`
    #[serde(default = "default_single_file_name")]
    pub single_file_name: String,

    /// Write tabs in the selected text as `\t` into snippet bodies
    #[serde(default)]
    pub escape_selection_tabs: bool,

    /// Language pre-selected when prompting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    /// Local HTTP endpoint for editor extensions
    #[serde(default)]
    pub server: ServerSettings,
}

fn default_editor_dir() -> String {
    "Code".to_string()
}

fn default_single_file_name() -> String {
    "snippets.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_root: None,
            editor_dir: default_editor_dir(),
            layout: SnippetLayout::default(),
            single_file_name: default_single_file_name(),
            escape_selection_tabs: false,
            default_language: None,
            server: ServerSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.editor_dir, "Code");
        assert_eq!(config.layout, SnippetLayout::PerLanguage);
        assert!(!config.escape_selection_tabs);
        assert_eq!(config.server.port, 9877);
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
editor_dir = "VSCodium"
layout = "single-file"
escape_selection_tabs = true

[server]
token = "s3cret"
"#,
        )
        .unwrap();
        assert_eq!(config.editor_dir, "VSCodium");
        assert_eq!(config.layout, SnippetLayout::SingleFile);
        assert!(config.escape_selection_tabs);
        assert_eq!(config.server.token, "s3cret");
        assert_eq!(config.server.port, 9877);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            settings_root: Some(PathBuf::from("/tmp/user")),
            default_language: Some("rust".to_string()),
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.settings_root, config.settings_root);
        assert_eq!(back.default_language.as_deref(), Some("rust"));
    }
}
