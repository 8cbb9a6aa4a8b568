//! Error types for snippet creation

use std::path::PathBuf;

use crate::host::{NotificationLevel, PromptField};
use crate::platform::PlatformFamily;

/// Failure of the pure store edit (no file system involved)
#[derive(Debug, thiserror::Error)]
pub enum UpsertError {
    #[error("Snippets file is not valid JSON after removing comments")]
    Malformed(#[source] serde_json::Error),

    #[error("Snippet with this name already exists: {0}")]
    NameCollision(String),

    #[error("Failed to serialize snippets")]
    Serialize(#[source] serde_json::Error),
}

/// Everything that can end a create-snippet invocation early
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    #[error("There is no text editor.")]
    NoActiveEditor,

    #[error("Cannot create snippet from empty string. Select some text first.")]
    EmptySelection,

    #[error("{0} was not provided")]
    PromptCancelled(PromptField),

    #[error("Invalid snippet: {0}")]
    InvalidEntry(String),

    #[error("Invalid language id: {0:?}")]
    InvalidLanguage(String),

    #[error("Could not resolve the editor settings directory on {0}")]
    SettingsRootUnavailable(PlatformFamily),

    #[error("Could not open file for writing: {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read file: {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snippets file: {}", .path.display())]
    MalformedFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Snippet with this name already exists: {0}")]
    NameCollision(String),

    #[error("Could not write to file: {}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize snippets")]
    Serialize(#[source] serde_json::Error),
}

impl SnippetError {
    /// Attach the snippets file path to a store edit failure
    pub fn from_upsert(err: UpsertError, path: impl Into<PathBuf>) -> Self {
        match err {
            UpsertError::Malformed(source) => SnippetError::MalformedFile {
                path: path.into(),
                source,
            },
            UpsertError::NameCollision(name) => SnippetError::NameCollision(name),
            UpsertError::Serialize(source) => SnippetError::Serialize(source),
        }
    }

    /// The user withdrew a prompt; nothing should be reported.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, SnippetError::PromptCancelled(_))
    }

    /// Message for the user: this error followed by its causes
    pub fn user_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        message
    }

    /// How the host should surface this error, `None` for a silent abort
    pub fn notification_level(&self) -> Option<NotificationLevel> {
        if self.is_cancellation() {
            return None;
        }
        match self {
            SnippetError::NoActiveEditor | SnippetError::EmptySelection => {
                Some(NotificationLevel::Warning)
            }
            _ => Some(NotificationLevel::Error),
        }
    }
}
