//! Strip command implementation

use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

use snipforge::jsonc::{strip_comments, StripOptions};

/// Read JSONC from `file` (or stdin) and print it without comments
pub async fn strip_command(file: Option<&Path>, preserve_whitespace: bool) -> Result<()> {
    let text = read_input(file).await?;
    let stripped = strip_comments(
        &text,
        StripOptions {
            preserve_whitespace,
        },
    );
    print!("{}", stripped);
    Ok(())
}

/// Contents of `file`, or everything on stdin when `None`
pub async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
