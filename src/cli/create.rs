//! Create command implementation

use anyhow::{bail, Result};
use async_trait::async_trait;
use dialoguer::{Input, Select};
use std::path::{Path, PathBuf};

use snipforge::config::Config;
use snipforge::host::{
    create_snippet, CommandContext, CommandOutcome, HostEditor, Notification, NotificationLevel,
    PromptField, Selection,
};
use snipforge::platform::{PlatformFamily, SystemEnvironment};

use super::strip::read_input;

/// Language ids offered when no `--language` is given
const KNOWN_LANGUAGES: &[&str] = &[
    "c",
    "cpp",
    "csharp",
    "css",
    "go",
    "html",
    "java",
    "javascript",
    "javascriptreact",
    "json",
    "jsonc",
    "markdown",
    "php",
    "plaintext",
    "python",
    "ruby",
    "rust",
    "shellscript",
    "sql",
    "toml",
    "typescript",
    "typescriptreact",
    "yaml",
];

pub struct CreateArgs {
    pub file: Option<PathBuf>,
    pub language: Option<String>,
    pub name: Option<String>,
    pub shortcut: Option<String>,
    pub description: Option<String>,
}

/// Create a snippet from a file or stdin, prompting in the terminal
pub async fn create_command(config: &Config, args: CreateArgs) -> Result<()> {
    let text = read_input(args.file.as_deref()).await?;
    let selection_language = args
        .language
        .clone()
        .or_else(|| args.file.as_deref().and_then(language_for_path))
        .unwrap_or_else(|| "plaintext".to_string());

    let mut host = TerminalHost {
        selection: Some(Selection {
            text,
            language: selection_language,
        }),
        args,
    };
    let ctx = CommandContext {
        config,
        family: PlatformFamily::current(),
        env: &SystemEnvironment,
    };

    match create_snippet(&mut host, ctx).await {
        Ok(CommandOutcome::Saved(saved)) => {
            println!("  {}", saved.path.display());
            Ok(())
        }
        Ok(CommandOutcome::Cancelled(field)) => {
            println!("No {} given, nothing saved.", field.to_string().to_lowercase());
            Ok(())
        }
        // Already reported through notify()
        Err(_) => bail!("snippet was not saved"),
    }
}

/// Terminal stand-in for the editor
///
/// Answers given on the command line are used as-is; the rest are asked
/// interactively. A failed prompt (no terminal, input closed) counts as
/// withdrawn.
struct TerminalHost {
    selection: Option<Selection>,
    args: CreateArgs,
}

#[async_trait]
impl HostEditor for TerminalHost {
    async fn active_selection(&mut self) -> Option<Selection> {
        self.selection.take()
    }

    async fn languages(&mut self) -> Vec<String> {
        KNOWN_LANGUAGES.iter().map(|l| l.to_string()).collect()
    }

    async fn pick_language(&mut self, languages: &[String], suggested: &str) -> Option<String> {
        if let Some(language) = self.args.language.take() {
            return Some(language);
        }

        let mut items = languages.to_vec();
        if !items.iter().any(|l| l == suggested) {
            items.insert(0, suggested.to_string());
        }
        let default = items.iter().position(|l| l == suggested).unwrap_or(0);

        let picked = tokio::task::spawn_blocking(move || {
            Select::new()
                .with_prompt(PromptField::Language.prompt())
                .items(&items)
                .default(default)
                .interact_opt()
                .ok()
                .flatten()
                .map(|index| items[index].clone())
        })
        .await;
        picked.ok().flatten()
    }

    async fn prompt(&mut self, field: PromptField) -> Option<String> {
        let preset = match field {
            PromptField::Language => self.args.language.take(),
            PromptField::Name => self.args.name.take(),
            PromptField::Shortcut => self.args.shortcut.take(),
            PromptField::Description => self.args.description.take(),
        };
        if preset.is_some() {
            return preset;
        }

        let answer = tokio::task::spawn_blocking(move || {
            Input::<String>::new()
                .with_prompt(field.prompt())
                .allow_empty(true)
                .interact_text()
                .ok()
        })
        .await;
        answer.ok().flatten()
    }

    async fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info => println!("{}", notification.message),
            NotificationLevel::Warning => eprintln!("warning: {}", notification.message),
            NotificationLevel::Error => eprintln!("error: {}", notification.message),
        }
    }
}

/// Guess a language id from a file extension
fn language_for_path(path: &Path) -> Option<String> {
    let language = match path.extension()?.to_str()? {
        "rs" => "rust",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" => "typescript",
        "tsx" => "typescriptreact",
        "py" => "python",
        "go" => "go",
        "rb" => "ruby",
        "java" => "java",
        "c" | "h" => "c",
        "cc" | "cpp" | "hpp" => "cpp",
        "cs" => "csharp",
        "sh" | "bash" => "shellscript",
        "md" => "markdown",
        "json" => "json",
        "toml" => "toml",
        "yml" | "yaml" => "yaml",
        "html" => "html",
        "css" => "css",
        "sql" => "sql",
        "php" => "php",
        _ => return None,
    };
    Some(language.to_string())
}
