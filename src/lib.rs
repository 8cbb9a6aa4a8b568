//! snipforge - editor selections to user snippets
//!
//! snipforge takes text selected in an editor and stores it as a named user
//! snippet in the editor's per-language snippets file. Those files are JSONC
//! (comments allowed) and often hand-edited, so loading one goes through a
//! comment-stripping scanner before the JSON parser sees it, and existing
//! entries are written back exactly as they were found.
//!
//! ## Input Methods
//!
//! 1. **CLI**: `snipforge create` reads the selection from a file or stdin and
//!    prompts for the rest in the terminal.
//!
//! 2. **HTTP**: `snipforge serve` accepts snippets posted by editor extensions
//!    on a local port.

pub mod config;
pub mod host;
pub mod jsonc;
pub mod platform;
pub mod server;
pub mod snippet;

pub use snippet::{SnippetEntry, SnippetError, SnippetStore};
