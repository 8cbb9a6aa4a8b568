//! Shared test utilities for create-command tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::TempDir;

use snipforge::config::Config;
use snipforge::host::{HostEditor, Notification, PromptField, Selection};

/// In-memory host editor answering prompts from a script
#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub selection: Option<Selection>,
    pub language: Option<String>,
    pub name: Option<String>,
    pub shortcut: Option<String>,
    pub description: Option<String>,
    /// Prompts in the order they were shown
    pub asked: Vec<PromptField>,
    pub notifications: Vec<Notification>,
}

impl ScriptedHost {
    /// Host with a selection and every prompt answered
    pub fn answering(
        text: &str,
        language: &str,
        name: &str,
        shortcut: &str,
        description: &str,
    ) -> Self {
        Self {
            selection: Some(Selection {
                text: text.to_string(),
                language: language.to_string(),
            }),
            language: Some(language.to_string()),
            name: Some(name.to_string()),
            shortcut: Some(shortcut.to_string()),
            description: Some(description.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl HostEditor for ScriptedHost {
    async fn active_selection(&mut self) -> Option<Selection> {
        self.selection.clone()
    }

    async fn languages(&mut self) -> Vec<String> {
        vec!["javascript".to_string(), "rust".to_string()]
    }

    async fn pick_language(&mut self, _languages: &[String], _suggested: &str) -> Option<String> {
        self.asked.push(PromptField::Language);
        self.language.clone()
    }

    async fn prompt(&mut self, field: PromptField) -> Option<String> {
        self.asked.push(field);
        match field {
            PromptField::Language => self.language.clone(),
            PromptField::Name => self.name.clone(),
            PromptField::Shortcut => self.shortcut.clone(),
            PromptField::Description => self.description.clone(),
        }
    }

    async fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

/// Temporary settings root and a config pointing at it
pub fn temp_settings() -> (TempDir, Config) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        settings_root: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    (dir, config)
}

/// `<root>/snippets/<language>.json`
pub fn snippets_path(root: &Path, language: &str) -> PathBuf {
    root.join("snippets").join(format!("{}.json", language))
}
