//! Comment stripping for JSONC text
//!
//! Single left-to-right pass over the input. Text is copied in spans between
//! flush points; comment spans go through [`blank_span`] instead of being
//! copied verbatim.

/// Options for [`strip_comments`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripOptions {
    /// Replace comments with whitespace instead of deleting them.
    ///
    /// When set, the output has the same character count as the input and
    /// every line break stays where it was, so offsets computed against one
    /// text are valid on the other.
    pub preserve_whitespace: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            preserve_whitespace: true,
        }
    }
}

impl StripOptions {
    /// Options that delete comments outright
    pub fn deleting() -> Self {
        Self {
            preserve_whitespace: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString,
    InLineComment,
    InBlockComment,
}

impl ScanState {
    fn in_comment(self) -> bool {
        matches!(self, ScanState::InLineComment | ScanState::InBlockComment)
    }
}

/// Strip `//` and `/* */` comments that appear outside string literals.
///
/// Comment syntax inside strings (`"http://..."`, `"/* keep */"`) is left
/// alone. Unterminated comments run to the end of the input and are stripped
/// like terminated ones.
///
/// Line terminators that close a line comment are kept, so deleting a
/// comment never joins two lines. A `\r\n` terminator is kept whole in both
/// modes; only the comment text before it is removed.
pub fn strip_comments(text: &str, options: StripOptions) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut state = ScanState::Normal;
    // Start of the span not yet written to `out`
    let mut offset = 0;
    let mut i = 0;

    // All delimiters are ASCII, so every index we slice at is a char boundary.
    while i < bytes.len() {
        let current = bytes[i];
        let next = bytes.get(i + 1).copied();

        if !state.in_comment() && current == b'"' && !is_escaped_quote(bytes, i) {
            state = match state {
                ScanState::InString => ScanState::Normal,
                _ => ScanState::InString,
            };
            i += 1;
            continue;
        }

        match state {
            ScanState::InString => {}
            ScanState::Normal => match (current, next) {
                (b'/', Some(b'/')) => {
                    out.push_str(&text[offset..i]);
                    offset = i;
                    state = ScanState::InLineComment;
                    i += 1;
                }
                (b'/', Some(b'*')) => {
                    out.push_str(&text[offset..i]);
                    offset = i;
                    state = ScanState::InBlockComment;
                    i += 1;
                }
                _ => {}
            },
            ScanState::InLineComment => {
                let terminator_len = match (current, next) {
                    (b'\r', Some(b'\n')) => 2,
                    (b'\n', _) => 1,
                    _ => 0,
                };
                if terminator_len > 0 {
                    blank_span(&text[offset..i], options, &mut out);
                    out.push_str(&text[i..i + terminator_len]);
                    state = ScanState::Normal;
                    i += terminator_len;
                    offset = i;
                    continue;
                }
            }
            ScanState::InBlockComment => {
                if current == b'*' && next == Some(b'/') {
                    i += 2;
                    blank_span(&text[offset..i], options, &mut out);
                    state = ScanState::Normal;
                    offset = i;
                    continue;
                }
            }
        }

        i += 1;
    }

    let rest = &text[offset..];
    if state.in_comment() {
        blank_span(rest, options, &mut out);
    } else {
        out.push_str(rest);
    }

    out
}

/// A quote is escaped when preceded by a backslash that is not itself
/// preceded by a backslash.
fn is_escaped_quote(bytes: &[u8], index: usize) -> bool {
    if index == 0 || bytes[index - 1] != b'\\' {
        return false;
    }
    index < 2 || bytes[index - 2] != b'\\'
}

fn blank_span(span: &str, options: StripOptions, out: &mut String) {
    if !options.preserve_whitespace {
        return;
    }
    out.extend(
        span.chars()
            .map(|c| if c.is_whitespace() { c } else { ' ' }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(text: &str) -> String {
        strip_comments(text, StripOptions::default())
    }

    fn delete(text: &str) -> String {
        strip_comments(text, StripOptions::deleting())
    }

    #[test]
    fn test_text_without_comments_is_unchanged() {
        let text = "{\n\t\"a\": [1, 2, \"three\"],\n\t\"b\": {\"c\": null}\n}";
        assert_eq!(strip(text), text);
        assert_eq!(delete(text), text);
    }

    #[test]
    fn test_line_comment_is_blanked() {
        assert_eq!(strip("{\"a\":1}// note\n"), "{\"a\":1}       \n");
    }

    #[test]
    fn test_line_comment_is_deleted_but_newline_kept() {
        assert_eq!(delete("{\"a\":1}// note\n}"), "{\"a\":1}\n}");
    }

    #[test]
    fn test_crlf_terminates_line_comment() {
        assert_eq!(delete("1 // x\r\n2"), "1 \r\n2");
        assert_eq!(strip("1 // x\r\n2"), "1     \r\n2");
    }

    #[test]
    fn test_block_comment_is_blanked_with_line_breaks_kept() {
        let text = "{/* one\n two */\"a\": 1}";
        let stripped = strip(text);
        assert_eq!(stripped, "{      \n       \"a\": 1}");
        assert_eq!(stripped.chars().count(), text.chars().count());
    }

    #[test]
    fn test_block_comment_is_deleted() {
        assert_eq!(delete("[1, /* two, */ 3]"), "[1,  3]");
    }

    #[test]
    fn test_comment_markers_inside_strings_are_kept() {
        let text = r#"{"url": "http://example.com", "glob": "src/*.rs /* x */"}"#;
        assert_eq!(strip(text), text);
        assert_eq!(delete(text), text);
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        let text = r#"{"a": "say \"// hi\""} // trailing"#;
        assert_eq!(delete(text), r#"{"a": "say \"// hi\""} "#);
    }

    #[test]
    fn test_escaped_backslash_before_quote_ends_string() {
        let text = r#"["dir\\" // gone
]"#;
        assert_eq!(delete(text), "[\"dir\\\\\" \n]");
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        assert_eq!(strip("{} /* open\nforever"), "{}        \n       ");
        assert_eq!(delete("{} /* open\nforever"), "{} ");
    }

    #[test]
    fn test_unterminated_line_comment_at_end() {
        assert_eq!(strip("[1] // end"), "[1]       ");
        assert_eq!(delete("[1] // end"), "[1] ");
    }

    #[test]
    fn test_star_slash_right_after_opener_does_not_close() {
        assert_eq!(delete("a/*/b*/c"), "ac");
    }

    #[test]
    fn test_whitespace_mode_preserves_char_count_with_multibyte() {
        let text = "{\"ü\": 1 /* ünïcödé */}\n// ✓ done\n";
        let stripped = strip(text);
        assert_eq!(stripped.chars().count(), text.chars().count());
        let breaks = |s: &str| {
            s.chars()
                .enumerate()
                .filter(|(_, c)| *c == '\n')
                .map(|(i, _)| i)
                .collect::<Vec<_>>()
        };
        assert_eq!(breaks(&stripped), breaks(text));
    }

    #[test]
    fn test_stripped_text_parses_as_json() {
        let text = r#"{
	// The greeting snippet
	"greet": {
		"prefix": "grt", /* shortcut */
		"body": ["console.log('//not a comment')"]
	}
}"#;
        let value: serde_json::Value = serde_json::from_str(&strip(text)).unwrap();
        assert_eq!(value["greet"]["prefix"], "grt");
        assert_eq!(value["greet"]["body"][0], "console.log('//not a comment')");
    }
}
