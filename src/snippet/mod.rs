//! Snippet definitions and the snippets file they live in
//!
//! A snippets file is a JSON object keyed by snippet name:
//!
//! ```json
//! {
//! 	"greet": {
//! 		"prefix": "grt",
//! 		"body": ["console.log('hi')", "$0"],
//! 		"description": "Greeting"
//! 	}
//! }
//! ```
//!
//! Existing files may contain comments and entries in shapes this crate never
//! writes (string bodies, a `scope` key, ...). [`SnippetStore`] keeps those
//! entries as raw JSON values so they survive a rewrite untouched.

mod body;
mod editor;
mod error;

pub use body::{build_body, FINAL_TABSTOP};
pub use editor::{upsert, UpsertAction, UpsertOutcome};
pub use error::{SnippetError, UpsertError};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::jsonc;

/// A single snippet as written by this crate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetEntry {
    /// Shortcut that triggers the snippet
    pub prefix: String,
    /// Body lines
    pub body: Vec<String>,
    pub description: String,
}

impl SnippetEntry {
    /// Create an entry, rejecting an empty prefix or body
    pub fn new(
        prefix: impl Into<String>,
        body: Vec<String>,
        description: impl Into<String>,
    ) -> Result<Self, SnippetError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(SnippetError::InvalidEntry(
                "shortcut must not be empty".to_string(),
            ));
        }
        if body.is_empty() {
            return Err(SnippetError::InvalidEntry(
                "body must have at least one line".to_string(),
            ));
        }

        Ok(Self {
            prefix,
            body,
            description: description.into(),
        })
    }

    /// Create an entry whose body is built from selected editor text
    pub fn from_selection(
        prefix: impl Into<String>,
        selected_text: &str,
        description: impl Into<String>,
        escape_tabs: bool,
    ) -> Result<Self, SnippetError> {
        Self::new(prefix, build_body(selected_text, escape_tabs), description)
    }
}

/// Snippets keyed by name, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetStore {
    entries: Map<String, Value>,
}

impl SnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the raw contents of a snippets file.
    ///
    /// Comments are removed and tabs inside strings escaped before parsing.
    /// A file that is empty once comments are gone is an empty store.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let sanitized = jsonc::sanitize(raw.strip_prefix('\u{FEFF}').unwrap_or(raw));
        if sanitized.trim().is_empty() {
            return Ok(Self::new());
        }

        let entries: Map<String, Value> = serde_json::from_str(&sanitized)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Snippet names in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Typed view of an entry; `None` if missing or not shaped like [`SnippetEntry`]
    pub fn get(&self, name: &str) -> Option<SnippetEntry> {
        self.entries
            .get(name)
            .and_then(|value| SnippetEntry::deserialize(value).ok())
    }

    /// The `prefix` of an entry if it has a string one
    pub fn prefix_of(&self, name: &str) -> Option<&str> {
        self.entries.get(name)?.get("prefix")?.as_str()
    }

    /// Add a new entry at the end; an existing name is never overwritten.
    pub fn insert(&mut self, name: &str, entry: SnippetEntry) -> Result<(), UpsertError> {
        if self.contains(name) {
            return Err(UpsertError::NameCollision(name.to_string()));
        }
        let value = serde_json::to_value(entry).map_err(UpsertError::Serialize)?;
        self.entries.insert(name.to_string(), value);
        Ok(())
    }

    /// Serialize with one tab of indentation per level
    pub fn to_pretty_string(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.entries.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
