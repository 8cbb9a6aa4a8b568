//! Paths command implementation

use anyhow::Result;
use std::path::Path;

use snipforge::config::{Config, SnippetLayout};
use snipforge::platform::{PlatformFamily, SystemEnvironment};

/// Print where config and snippet files are looked up
pub fn paths_command(config: &Config, config_path: Option<&Path>, language: Option<&str>) -> Result<()> {
    let family = PlatformFamily::current();
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    println!("Platform:       {}", family);
    println!("Separator:      {}", family.separator());
    println!("Config file:    {}", config_path.display());

    match config.resolve_settings_root(family, &SystemEnvironment) {
        Ok(root) => println!("Settings root:  {}", root.display()),
        Err(e) => {
            println!("Settings root:  unavailable ({})", e);
            return Ok(());
        }
    }

    let language = match (config.layout, language) {
        (SnippetLayout::SingleFile, lang) => lang.unwrap_or("any"),
        (SnippetLayout::PerLanguage, Some(lang)) => lang,
        (SnippetLayout::PerLanguage, None) => return Ok(()),
    };
    let file = config.snippets_file(family, &SystemEnvironment, language)?;
    println!("Snippets file:  {}", file.display());

    Ok(())
}
