//! Make JSONC text acceptable to a strict JSON parser

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::strip::{strip_comments, StripOptions};

/// A double-quoted literal: quote, any run of escapes or non-quote chars, quote.
static STRING_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)"(?:\\.|[^"\\])*""#).expect("string literal pattern is valid"));

/// Rewrite raw tab characters inside string literals to the `\t` escape.
///
/// Tabs outside string literals are indentation and are left alone.
pub fn escape_tabs_in_strings(text: &str) -> String {
    STRING_LITERAL
        .replace_all(text, |caps: &Captures<'_>| caps[0].replace('\t', "\\t"))
        .into_owned()
}

/// Delete comments, then escape tabs inside strings.
///
/// The result is what `serde_json` gets to see when an existing snippets
/// file is loaded.
pub fn sanitize(text: &str) -> String {
    escape_tabs_in_strings(&strip_comments(text, StripOptions::deleting()))
}
