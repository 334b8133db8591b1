//! Lexical helpers shared by the tokenizer and the rewriter

/// Space, tab or carriage return (a `\r` only matters as part of `\r\n`)
pub(crate) fn is_horizontal_ws(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r')
}

/// Advance past horizontal whitespace starting at `pos`
pub(crate) fn skip_horizontal_ws(bytes: &[u8], pos: usize) -> usize {
    scan_while(bytes, pos, is_horizontal_ws)
}

/// Advance while `pred` holds, returning the first position where it does not
pub(crate) fn scan_while(bytes: &[u8], pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    let mut cursor = pos;
    while cursor < bytes.len() && pred(bytes[cursor]) {
        cursor += 1;
    }
    cursor
}

/// Skip the whitespace run at `pos` and return the position just after its
/// last newline
///
/// Returns `None` if non-whitespace text (or the end of input) comes before
/// any newline. Blank lines after a directive header are therefore part of
/// the header, while the indentation of the first content line is kept.
pub(crate) fn skip_to_next_line(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut cursor = pos;
    let mut after_newline = None;
    while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
        if bytes[cursor] == b'\n' {
            after_newline = Some(cursor + 1);
        }
        cursor += 1;
    }
    after_newline
}

/// End of the content that runs from `content_start` up to a marker line
/// whose directive begins at `marker`
///
/// The line break that separates the content from the marker belongs to the
/// marker, together with any blank lines in between. Trailing spaces on the
/// last content line are kept.
pub(crate) fn content_end(text: &str, content_start: usize, marker: usize) -> usize {
    let region = &text[content_start..marker];
    let trimmed = region.trim_end().len();
    match region[trimmed..].find('\n') {
        Some(newline) => {
            let mut end = content_start + trimmed + newline;
            if end > content_start + trimmed && text.as_bytes()[end - 1] == b'\r' {
                end -= 1;
            }
            end
        }
        None => content_start + trimmed,
    }
}

/// Parse a condition default literal (`true` / `false`, any case)
pub(crate) fn parse_bool(literal: &str) -> Option<bool> {
    if literal.eq_ignore_ascii_case("true") {
        Some(true)
    } else if literal.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Canonical wrapper emitted for every block on output
pub(crate) fn canonical_block(name: &str, body: &str) -> String {
    format!("// @block {}\n{}\n// @endblock", name, body)
}

/// Convert every `\r\n` to `\n`
pub(crate) fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Count newlines in text
pub(crate) fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
