//! Snippets file location

use std::path::PathBuf;

use super::{Config, SnippetLayout};
use crate::platform::{settings_root, Environment, PlatformFamily};
use crate::snippet::SnippetError;

impl Config {
    /// Editor settings root: the configured override, else the platform default
    pub fn resolve_settings_root(
        &self,
        family: PlatformFamily,
        env: &dyn Environment,
    ) -> Result<PathBuf, SnippetError> {
        if let Some(root) = &self.settings_root {
            return Ok(root.clone());
        }
        settings_root(family, env, &self.editor_dir)
            .ok_or(SnippetError::SettingsRootUnavailable(family))
    }

    /// Path of the snippets file that `language` snippets are written to
    ///
    /// The language id only names a file; ids that could point elsewhere are
    /// rejected with [`SnippetError::InvalidLanguage`].
    pub fn snippets_file(
        &self,
        family: PlatformFamily,
        env: &dyn Environment,
        language: &str,
    ) -> Result<PathBuf, SnippetError> {
        if !is_plain_language_id(language) {
            return Err(SnippetError::InvalidLanguage(language.to_string()));
        }

        let root = self.resolve_settings_root(family, env)?;
        let sep = family.separator();
        let mut path = root.to_string_lossy().trim_end_matches(sep).to_string();

        match self.layout {
            SnippetLayout::PerLanguage => {
                path.push(sep);
                path.push_str("snippets");
                path.push(sep);
                path.push_str(language);
                path.push_str(".json");
            }
            SnippetLayout::SingleFile => {
                path.push(sep);
                path.push_str(&self.single_file_name);
            }
        }

        Ok(PathBuf::from(path))
    }
}

fn is_plain_language_id(language: &str) -> bool {
    !language.is_empty()
        && language != "."
        && language != ".."
        && !language.contains(['/', '\\', '\0'])
}
