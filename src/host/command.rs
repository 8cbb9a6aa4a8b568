//! The create-snippet command

use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::store_file::{read_existing, write_snippets};
use super::{HostEditor, Notification, PromptField};
use crate::config::Config;
use crate::platform::{Environment, PlatformFamily};
use crate::snippet::{upsert, SnippetEntry, SnippetError, UpsertAction};

/// Everything the command needs besides the host
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    pub config: &'a Config,
    pub family: PlatformFamily,
    pub env: &'a dyn Environment,
}

/// A snippet that made it to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSnippet {
    pub name: String,
    pub prefix: String,
    pub language: String,
    pub path: PathBuf,
    pub action: UpsertAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Saved(SavedSnippet),
    /// The user withdrew a prompt; the file was not touched
    Cancelled(PromptField),
}

/// Create a snippet from the host's current selection.
///
/// Prompts run in order (language, name, shortcut, description) and the
/// first withdrawn prompt ends the command quietly. Any other failure is
/// shown to the user through the host and returned.
pub async fn create_snippet<H>(
    host: &mut H,
    ctx: CommandContext<'_>,
) -> Result<CommandOutcome, SnippetError>
where
    H: HostEditor + ?Sized,
{
    match run(host, ctx).await {
        Ok(saved) => {
            info!(
                "[snipforge:create] {:?} {} with snippet '{}'",
                saved.action,
                saved.path.display(),
                saved.name
            );
            host.notify(Notification::info(format!(
                "Created a new snippet. You can use it now by typing: {}",
                saved.prefix
            )))
            .await;
            Ok(CommandOutcome::Saved(saved))
        }
        Err(SnippetError::PromptCancelled(field)) => {
            debug!("[snipforge:create] {} prompt withdrawn, nothing saved", field);
            Ok(CommandOutcome::Cancelled(field))
        }
        Err(err) => {
            warn!("[snipforge:create] {}", err);
            if let Some(level) = err.notification_level() {
                host.notify(Notification {
                    level,
                    message: err.user_message(),
                })
                .await;
            }
            Err(err)
        }
    }
}

async fn run<H>(host: &mut H, ctx: CommandContext<'_>) -> Result<SavedSnippet, SnippetError>
where
    H: HostEditor + ?Sized,
{
    let selection = host
        .active_selection()
        .await
        .ok_or(SnippetError::NoActiveEditor)?;
    if selection.text.is_empty() {
        return Err(SnippetError::EmptySelection);
    }

    let languages = host.languages().await;
    let suggested = ctx
        .config
        .default_language
        .as_deref()
        .unwrap_or(&selection.language);
    let language = host
        .pick_language(&languages, suggested)
        .await
        .ok_or(SnippetError::PromptCancelled(PromptField::Language))?;

    let name = ask(host, PromptField::Name).await?;
    let shortcut = ask(host, PromptField::Shortcut).await?;
    let description = ask(host, PromptField::Description).await?;

    let entry = SnippetEntry::from_selection(
        shortcut,
        &selection.text,
        description,
        ctx.config.escape_selection_tabs,
    )?;
    let prefix = entry.prefix.clone();

    let path = ctx.config.snippets_file(ctx.family, ctx.env, &language)?;
    let existing = read_existing(&path).await?;
    let outcome = upsert(existing.as_deref(), &name, entry)
        .map_err(|e| SnippetError::from_upsert(e, &path))?;
    write_snippets(&path, &outcome.text).await?;

    Ok(SavedSnippet {
        name,
        prefix,
        language,
        path,
        action: outcome.action,
    })
}

async fn ask<H>(host: &mut H, field: PromptField) -> Result<String, SnippetError>
where
    H: HostEditor + ?Sized,
{
    host.prompt(field)
        .await
        .ok_or(SnippetError::PromptCancelled(field))
}
