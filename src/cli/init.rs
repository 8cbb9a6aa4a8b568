//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

use snipforge::config::Config;

/// Default configuration content for snipforge init
pub const DEFAULT_CONFIG: &str = r#"# snipforge configuration
#
# Snippets are written to the editor's user settings directory:
#   macOS:   ~/Library/Application Support/<editor_dir>/User
#   Linux:   ~/.config/<editor_dir>/User
#   Windows: %APPDATA%\<editor_dir>\User

# Editor product folder ("Code", "Code - Insiders", "VSCodium", ...)
editor_dir = "Code"

# Use this directory instead of the platform default
# settings_root = "/path/to/User"

# "per-language" writes <root>/snippets/<language>.json
# "single-file" writes <root>/<single_file_name>
layout = "per-language"
single_file_name = "snippets.json"

# Write tabs in the selected text as \t into snippet bodies
escape_selection_tabs = false

# Language pre-selected when prompting
# default_language = "rust"

# Local HTTP endpoint for editor extensions (snipforge serve)
[server]
port = 9877
# Optional: shared secret sent as `X-Snipforge-Token`
# Leave empty to disable auth
token = ""
"#;

/// Write the default config to `path` (or ~/.snipforge/config.toml)
pub fn init_command(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Created {}", path.display());
    println!("Created config at {}", path.display());
    Ok(())
}
