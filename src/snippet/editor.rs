//! Insert one snippet into the raw contents of a snippets file

use serde::Serialize;
use tracing::debug;

use super::{SnippetEntry, SnippetStore, UpsertError};

/// What happened to the snippets file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertAction {
    /// The file did not exist and holds only the new snippet
    Created,
    /// The snippet was added after the existing ones
    Appended,
}

/// New file contents and how they came about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub action: UpsertAction,
    /// Complete text to write back
    pub text: String,
}

/// Add `entry` under `name` to a snippets file.
///
/// `existing` is the raw file text, or `None` when the file does not exist.
/// Existing entries are kept as they are and in their original order. A name
/// that is already taken fails with [`UpsertError::NameCollision`] and
/// nothing is produced.
///
/// Comments in the existing file do not survive the rewrite.
pub fn upsert(
    existing: Option<&str>,
    name: &str,
    entry: SnippetEntry,
) -> Result<UpsertOutcome, UpsertError> {
    let (mut store, action) = match existing {
        None => (SnippetStore::new(), UpsertAction::Created),
        Some(raw) => {
            let store = SnippetStore::parse(raw).map_err(UpsertError::Malformed)?;
            debug!(
                "[snipforge:store] Loaded {} existing snippet(s)",
                store.len()
            );
            (store, UpsertAction::Appended)
        }
    };

    store.insert(name, entry)?;

    let text = store.to_pretty_string().map_err(UpsertError::Serialize)?;
    Ok(UpsertOutcome { action, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn greet() -> SnippetEntry {
        SnippetEntry::from_selection("grt", "console.log('hi')", "Greeting", false).unwrap()
    }

    #[test]
    fn test_absent_file_is_created() {
        let outcome = upsert(None, "greet", greet()).unwrap();
        assert_eq!(outcome.action, UpsertAction::Created);

        let value: serde_json::Value = serde_json::from_str(&outcome.text).unwrap();
        assert_eq!(
            value,
            json!({"greet": {"prefix": "grt", "body": ["console.log('hi')", "$0"], "description": "Greeting"}})
        );
    }

    #[test]
    fn test_existing_entries_are_preserved() {
        let existing = r#"{"a": {"prefix":"a","body":["x"],"description":"d"}}"#;
        let outcome = upsert(Some(existing), "b", greet()).unwrap();
        assert_eq!(outcome.action, UpsertAction::Appended);

        let value: serde_json::Value = serde_json::from_str(&outcome.text).unwrap();
        assert_eq!(value["a"], json!({"prefix":"a","body":["x"],"description":"d"}));
        assert_eq!(value["b"]["prefix"], "grt");

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_collision_fails() {
        let existing = r#"{"a": {"prefix":"a","body":["x"],"description":"d"}}"#;
        let err = upsert(Some(existing), "a", greet()).unwrap_err();
        assert!(matches!(err, UpsertError::NameCollision(ref n) if n == "a"));
    }

    #[test]
    fn test_commented_file_with_tabs_is_accepted() {
        let existing = "{\n\t// mine\n\t\"tabbed\": {\n\t\t\"prefix\": \"tb\",\n\t\t\"body\": [\"\tx\"],\n\t\t\"description\": \"\"\n\t}\n}";
        let outcome = upsert(Some(existing), "greet", greet()).unwrap();

        assert!(!outcome.text.contains("// mine"));
        assert!(outcome.text.contains("\"\\tx\""));
        let value: serde_json::Value = serde_json::from_str(&outcome.text).unwrap();
        assert_eq!(value["tabbed"]["body"][0], "\tx");
    }

    #[test]
    fn test_malformed_file_fails() {
        let err = upsert(Some("{\"a\": [1,}"), "b", greet()).unwrap_err();
        assert!(matches!(err, UpsertError::Malformed(_)));
    }

    #[test]
    fn test_foreign_entry_shapes_survive() {
        let existing = r#"{"legacy": {"prefix": "lg", "body": "single", "scope": "rust"}}"#;
        let outcome = upsert(Some(existing), "greet", greet()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&outcome.text).unwrap();
        assert_eq!(
            value["legacy"],
            json!({"prefix": "lg", "body": "single", "scope": "rust"})
        );
    }
}
