//! Request handlers for the snippet endpoint.

use serde_json::json;
use tracing::{error, info};

use super::types::{RequestHost, SnippetRequest};
use super::ServerState;
use crate::host::{create_snippet, CommandContext, CommandOutcome};
use crate::platform::SystemEnvironment;
use crate::snippet::{SnippetError, UpsertAction};

/// Handle POST /snippets, returning status code and JSON body
pub fn handle_create_snippet(state: &ServerState, body: &str) -> (u16, serde_json::Value) {
    let request: SnippetRequest = match serde_json::from_str(body) {
        Ok(req) => req,
        Err(e) => {
            error!("[snipforge:http] Invalid JSON: {}", e);
            return (
                400,
                json!({ "error": "invalid_json", "details": e.to_string() }),
            );
        }
    };

    info!(
        "[snipforge:http] Received snippet: language={}, name={:?}, text_len={}",
        request.language,
        request.name,
        request.selected_text.len()
    );

    let mut host = RequestHost::new(request);
    let ctx = CommandContext {
        config: &state.config,
        family: state.family,
        env: &SystemEnvironment,
    };
    let result = state.runtime.block_on(create_snippet(&mut host, ctx));

    match result {
        Ok(CommandOutcome::Saved(saved)) => {
            let status = match saved.action {
                UpsertAction::Created => 201,
                UpsertAction::Appended => 200,
            };
            (
                status,
                json!({
                    "status": "ok",
                    "action": saved.action,
                    "name": saved.name,
                    "prefix": saved.prefix,
                    "language": saved.language,
                    "path": saved.path.display().to_string(),
                }),
            )
        }
        Ok(CommandOutcome::Cancelled(field)) => (
            400,
            json!({ "error": "cancelled", "field": field.to_string().to_lowercase() }),
        ),
        Err(err) => error_response(&err),
    }
}

fn error_response(err: &SnippetError) -> (u16, serde_json::Value) {
    let (status, code) = match err {
        SnippetError::NoActiveEditor | SnippetError::EmptySelection => (400, "empty_selection"),
        SnippetError::PromptCancelled(_) => (400, "cancelled"),
        SnippetError::InvalidEntry(_) => (400, "invalid_snippet"),
        SnippetError::InvalidLanguage(_) => (400, "invalid_language"),
        SnippetError::NameCollision(_) => (409, "name_collision"),
        SnippetError::MalformedFile { .. } => (422, "malformed_file"),
        SnippetError::SettingsRootUnavailable(_) => (500, "settings_root_unavailable"),
        SnippetError::FileOpen { .. } => (500, "file_open"),
        SnippetError::FileRead { .. } => (500, "file_read"),
        SnippetError::FileWrite { .. } => (500, "file_write"),
        SnippetError::Serialize(_) => (500, "serialize"),
    };
    (status, json!({ "error": code, "details": err.user_message() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::platform::PlatformFamily;
    use tempfile::TempDir;

    fn state(root: &std::path::Path) -> (tokio::runtime::Runtime, ServerState) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let config = Config {
            settings_root: Some(root.to_path_buf()),
            ..Config::default()
        };
        let state = ServerState {
            config,
            family: PlatformFamily::current(),
            runtime: runtime.handle().clone(),
        };
        (runtime, state)
    }

    const GREET: &str = r#"{"language":"javascript","selected_text":"console.log('hi')","name":"greet","shortcut":"grt","description":"Greeting"}"#;

    #[test]
    fn test_create_then_collide() {
        let dir = TempDir::new().unwrap();
        let (_runtime, state) = state(dir.path());

        let (status, body) = handle_create_snippet(&state, GREET);
        assert_eq!(status, 201);
        assert_eq!(body["action"], "created");

        let file = dir.path().join("snippets").join("javascript.json");
        let before = std::fs::read_to_string(&file).unwrap();

        let (status, body) = handle_create_snippet(&state, GREET);
        assert_eq!(status, 409);
        assert_eq!(body["error"], "name_collision");
        assert_eq!(std::fs::read_to_string(&file).unwrap(), before);
    }

    #[test]
    fn test_missing_field_is_rejected_without_writing() {
        let dir = TempDir::new().unwrap();
        let (_runtime, state) = state(dir.path());

        let (status, body) = handle_create_snippet(
            &state,
            r#"{"language":"rust","selected_text":"x","name":"n","description":"d"}"#,
        );
        assert_eq!(status, 400);
        assert_eq!(body["error"], "cancelled");
        assert_eq!(body["field"], "shortcut");
        assert!(!dir.path().join("snippets").exists());
    }

    #[test]
    fn test_empty_selection() {
        let dir = TempDir::new().unwrap();
        let (_runtime, state) = state(dir.path());

        let (status, body) = handle_create_snippet(
            &state,
            r#"{"language":"rust","selected_text":"","name":"n","shortcut":"s","description":"d"}"#,
        );
        assert_eq!(status, 400);
        assert_eq!(body["error"], "empty_selection");
    }

    #[test]
    fn test_malformed_existing_file() {
        let dir = TempDir::new().unwrap();
        let snippets = dir.path().join("snippets");
        std::fs::create_dir_all(&snippets).unwrap();
        std::fs::write(snippets.join("javascript.json"), "{ not json").unwrap();
        let (_runtime, state) = state(dir.path());

        let (status, body) = handle_create_snippet(&state, GREET);
        assert_eq!(status, 422);
        assert_eq!(body["error"], "malformed_file");
    }

    #[test]
    fn test_language_cannot_leave_snippets_dir() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("User");
        let (_runtime, state) = state(&root);

        for language in ["../../escaped", "a/b", "..", "a\\b"] {
            let body = json!({
                "language": language,
                "selected_text": "x",
                "name": "n",
                "shortcut": "s",
                "description": "d",
            });
            let (status, body) = handle_create_snippet(&state, &body.to_string());
            assert_eq!(status, 400, "language {:?}", language);
            assert_eq!(body["error"], "invalid_language");
        }

        assert!(!dir.path().join("escaped.json").exists());
        assert!(!root.exists());
    }

    #[test]
    fn test_invalid_json_body() {
        let dir = TempDir::new().unwrap();
        let (_runtime, state) = state(dir.path());

        let (status, body) = handle_create_snippet(&state, "{");
        assert_eq!(status, 400);
        assert_eq!(body["error"], "invalid_json");
    }
}
