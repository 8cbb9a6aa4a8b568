//! Snippet body construction from selected text

/// Tab stop where the cursor lands after the snippet is expanded
pub const FINAL_TABSTOP: &str = "$0";

/// Turn the selected text into body lines, ending with the final tab stop.
///
/// The selection is split on `\n`; a `\r` left at the end of a line by CRLF
/// text is dropped. With `escape_tabs`, raw tabs become the two-character
/// sequence `\t` before splitting.
pub fn build_body(selected_text: &str, escape_tabs: bool) -> Vec<String> {
    let text = if escape_tabs {
        selected_text.replace('\t', "\\t")
    } else {
        selected_text.to_string()
    };

    format!("{text}\n{FINAL_TABSTOP}")
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
