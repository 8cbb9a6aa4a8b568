//! Host editor integration
//!
//! The editor that owns the selection and the UI is a collaborator behind the
//! [`HostEditor`] trait. It hands over the selected text, answers prompts and
//! shows notifications; everything else happens in [`create_snippet`].
//!
//! Two hosts ship with the crate: the terminal host used by `snipforge create`
//! and the request-backed host used by the HTTP endpoint.

mod command;
mod store_file;

pub use command::{create_snippet, CommandContext, CommandOutcome, SavedSnippet};
pub use store_file::{read_existing, write_snippets};

use std::fmt;

use async_trait::async_trait;

/// Text selected in the active editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub text: String,
    /// Language id of the document the selection came from
    pub language: String,
}

/// Values asked from the user, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptField {
    Language,
    Name,
    Shortcut,
    Description,
}

impl PromptField {
    /// Text shown to the user when asking for this field
    pub fn prompt(self) -> &'static str {
        match self {
            PromptField::Language => "Select snippet language",
            PromptField::Name => "Enter snippet name",
            PromptField::Shortcut => "Enter snippet shortcut",
            PromptField::Description => "Enter snippet description",
        }
    }
}

impl fmt::Display for PromptField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PromptField::Language => "Language",
            PromptField::Name => "Name",
            PromptField::Shortcut => "Shortcut",
            PromptField::Description => "Description",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// Message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// The editor a snippet is created from
///
/// Every prompt may be withdrawn by the user, which is reported as `None`.
#[async_trait]
pub trait HostEditor: Send {
    /// Selection of the active editor, `None` when no editor is active
    async fn active_selection(&mut self) -> Option<Selection>;

    /// Language ids the editor knows about
    async fn languages(&mut self) -> Vec<String>;

    /// Let the user choose among `languages`, suggesting `suggested`
    async fn pick_language(&mut self, languages: &[String], suggested: &str) -> Option<String>;

    /// Ask for a free-text value
    async fn prompt(&mut self, field: PromptField) -> Option<String>;

    async fn notify(&mut self, notification: Notification);
}
