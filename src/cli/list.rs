//! List command implementation

use anyhow::Result;

use snipforge::config::Config;
use snipforge::host::read_existing;
use snipforge::platform::{PlatformFamily, SystemEnvironment};
use snipforge::{SnippetError, SnippetStore};

/// Show the snippets stored for `language`
pub async fn list_command(config: &Config, language: &str, json: bool) -> Result<()> {
    let path = config.snippets_file(PlatformFamily::current(), &SystemEnvironment, language)?;

    let Some(text) = read_existing(&path).await? else {
        println!("No snippets file at {}", path.display());
        return Ok(());
    };
    let store = SnippetStore::parse(&text).map_err(|source| SnippetError::MalformedFile {
        path: path.clone(),
        source,
    })?;

    if json {
        println!("{}", store.to_pretty_string()?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No snippets in {}", path.display());
        return Ok(());
    }

    println!("{} snippet(s) in {}:\n", store.len(), path.display());
    for name in store.names() {
        match store.get(name) {
            Some(entry) => {
                println!("  {} ({})", name, entry.prefix);
                if !entry.description.is_empty() {
                    println!("    {}", entry.description);
                }
            }
            None => {
                let prefix = store.prefix_of(name).unwrap_or("?");
                println!("  {} ({})", name, prefix);
            }
        }
    }

    Ok(())
}
