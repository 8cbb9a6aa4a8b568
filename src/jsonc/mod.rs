//! JSON-with-comments handling
//!
//! Editors store user snippets as JSONC: JSON that may contain `//` line
//! comments and `/* */` block comments. Before such a file can be handed to
//! `serde_json` it goes through two passes:
//!
//! 1. [`strip_comments`] removes (or blanks out) comments outside string
//!    literals.
//! 2. [`escape_tabs_in_strings`] rewrites raw tab characters inside string
//!    literals to `\t`, since strict JSON rejects control characters there.
//!
//! [`sanitize`] runs both passes in the order the snippet editor needs.

mod sanitize;
mod strip;

pub use sanitize::{escape_tabs_in_strings, sanitize};
pub use strip::{strip_comments, StripOptions};
