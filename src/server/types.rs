//! Type definitions for the HTTP server.

use async_trait::async_trait;
use serde::Deserialize;

use crate::host::{HostEditor, Notification, PromptField, Selection};

/// Snippet posted by an editor extension
///
/// Prompt answers the extension did not collect are left out; a missing one
/// rejects the request the same way a withdrawn prompt ends the command.
#[derive(Debug, Clone, Deserialize)]
pub struct SnippetRequest {
    pub language: String,
    pub selected_text: String,
    pub name: Option<String>,
    pub shortcut: Option<String>,
    pub description: Option<String>,
}

/// [`HostEditor`] answering from a [`SnippetRequest`]
#[derive(Debug)]
pub struct RequestHost {
    request: SnippetRequest,
    pub notifications: Vec<Notification>,
}

impl RequestHost {
    pub fn new(request: SnippetRequest) -> Self {
        Self {
            request,
            notifications: Vec::new(),
        }
    }
}

#[async_trait]
impl HostEditor for RequestHost {
    async fn active_selection(&mut self) -> Option<Selection> {
        Some(Selection {
            text: self.request.selected_text.clone(),
            language: self.request.language.clone(),
        })
    }

    async fn languages(&mut self) -> Vec<String> {
        vec![self.request.language.clone()]
    }

    async fn pick_language(&mut self, _languages: &[String], _suggested: &str) -> Option<String> {
        let language = self.request.language.trim();
        (!language.is_empty()).then(|| language.to_string())
    }

    async fn prompt(&mut self, field: PromptField) -> Option<String> {
        match field {
            PromptField::Language => self.pick_language(&[], "").await,
            PromptField::Name => self.request.name.take(),
            PromptField::Shortcut => self.request.shortcut.take(),
            PromptField::Description => self.request.description.take(),
        }
    }

    async fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
