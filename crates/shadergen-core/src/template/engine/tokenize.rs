//! Tokenization for the directive grammar
//!
//! Provides O(n) forward-only tokenization of directive markers. Pairing of
//! markers (`@if` with `@endif`, `@block` with `@endblock`) happens later, on
//! the token list, so the tokenizer never looks back past the last token.

use super::helpers::{
    count_newlines, is_horizontal_ws, parse_bool, scan_while, skip_horizontal_ws,
    skip_to_next_line,
};

const IF_KEYWORD: &str = "@if";
const ELSE_KEYWORD: &str = "@else";
const ENDIF_KEYWORD: &str = "@endif";
const BLOCK_KEYWORD: &str = "@block";
const ENDBLOCK_KEYWORD: &str = "@endblock";

/// Token classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// `@if Name[:default]` header, including its line break
    IfStart { name: String, default: Option<bool> },

    /// `@else` alone on its line, including its line break
    Else,

    /// `@endif` at the start of a line
    EndIf,

    /// `[// ]@block Name` header, including its line break
    BlockStart { name: String },

    /// `[// ]@endblock` at the start of a line
    BlockEnd,

    /// `<Name>` or `<Name=a|b|c>`
    Variable { name: String, values: Vec<String> },
}

/// A single directive marker with position
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Byte position where the marker starts (comment leader included)
    pub start: usize,
    /// Byte position just past the marker
    pub end: usize,
    /// Line number where the marker starts (for diagnostics)
    pub line: usize,
}

/// Tokenization state
///
/// `@else`, `@endif` and `@endblock` are only recognized at the start of a
/// line, so the scanner tracks whether anything but horizontal whitespace has
/// been seen since the last newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Only horizontal whitespace since the last newline
    LineStart,
    /// Other text seen on the current line
    InLine,
}

/// Iterator over directive tokens in a template string
///
/// # Performance
///
/// - **Forward-only**: Position never moves backward past the previous token
/// - **Bounded lookahead**: A failed match at `@` or `<` stops at the first
///   byte that cannot belong to the directive
pub(crate) struct TokenStream<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    state: ScanState,
    line: usize,
    /// End of the previous token; comment leaders are never taken from before it
    last_end: usize,
    /// Step count for runaway protection
    step_count: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            state: ScanState::LineStart,
            line: 1,
            last_end: 0,
            step_count: 0,
        }
    }

    #[inline]
    fn should_continue(&mut self, max_steps: usize) -> bool {
        self.step_count += 1;
        self.step_count <= max_steps && self.pos < self.bytes.len()
    }

    /// Record step for O(n) performance verification in tests
    #[cfg(test)]
    #[inline]
    fn record_test_step() {
        test_counter::inc();
    }

    /// Try every directive that can start with `@` at the current position
    fn match_at_sign(&self) -> Option<Token> {
        let rest = &self.text[self.pos..];

        if rest.starts_with(IF_KEYWORD) {
            return self.match_if_start();
        }
        if self.state == ScanState::LineStart {
            if rest.starts_with(ELSE_KEYWORD) {
                return self.match_else();
            }
            if rest.starts_with(ENDIF_KEYWORD) {
                return Some(self.token(TokenKind::EndIf, self.pos, self.pos + ENDIF_KEYWORD.len()));
            }
            if rest.starts_with(ENDBLOCK_KEYWORD) {
                return self.match_block_end();
            }
        }
        if rest.starts_with(BLOCK_KEYWORD) {
            return self.match_block_start();
        }
        None
    }

    /// `@if <ws> Name [<ws>] [: [<ws>] literal] <ws> newline`
    fn match_if_start(&self) -> Option<Token> {
        let after_keyword = self.pos + IF_KEYWORD.len();
        let name_start = skip_horizontal_ws(self.bytes, after_keyword);
        if name_start == after_keyword {
            return None;
        }

        let name_end = scan_while(self.bytes, name_start, |b| {
            b != b':' && !b.is_ascii_whitespace()
        });
        if name_end == name_start {
            return None;
        }

        let mut cursor = skip_horizontal_ws(self.bytes, name_end);
        let mut default = None;
        if self.bytes.get(cursor) == Some(&b':') {
            let literal_start = skip_horizontal_ws(self.bytes, cursor + 1);
            let literal_end = scan_while(self.bytes, literal_start, |b| !b.is_ascii_whitespace());
            if literal_end > literal_start {
                default = Some(parse_bool(&self.text[literal_start..literal_end])?);
            }
            cursor = literal_end;
        }

        let end = skip_to_next_line(self.bytes, cursor)?;
        let name = self.text[name_start..name_end].to_string();
        Some(self.token(TokenKind::IfStart { name, default }, self.pos, end))
    }

    /// `@else` followed by nothing but whitespace up to a newline
    fn match_else(&self) -> Option<Token> {
        let end = skip_to_next_line(self.bytes, self.pos + ELSE_KEYWORD.len())?;
        Some(self.token(TokenKind::Else, self.pos, end))
    }

    /// `[// ]@block <ws> Name <ws> newline`
    fn match_block_start(&self) -> Option<Token> {
        let after_keyword = self.pos + BLOCK_KEYWORD.len();
        let name_start = skip_horizontal_ws(self.bytes, after_keyword);
        if name_start == after_keyword {
            return None;
        }

        let name_end = scan_while(self.bytes, name_start, |b| !b.is_ascii_whitespace());
        if name_end == name_start {
            return None;
        }

        let end = skip_to_next_line(self.bytes, name_end)?;
        let name = self.text[name_start..name_end].to_string();
        Some(self.token(
            TokenKind::BlockStart { name },
            self.leader_start(self.pos),
            end,
        ))
    }

    /// `[:]//` comment leaders (any number) followed by `@endblock`
    ///
    /// Only called at the start of a line, on `/`, `:` or `@`.
    fn match_block_end(&self) -> Option<Token> {
        let mut cursor = self.pos;
        loop {
            let mut probe = cursor;
            if self.bytes.get(probe) == Some(&b':') {
                probe += 1;
            }
            if self.bytes[probe..].starts_with(b"//") {
                cursor = skip_horizontal_ws(self.bytes, probe + 2);
            } else {
                break;
            }
        }

        if self.text[cursor..].starts_with(ENDBLOCK_KEYWORD) {
            Some(self.token(
                TokenKind::BlockEnd,
                self.pos,
                cursor + ENDBLOCK_KEYWORD.len(),
            ))
        } else {
            None
        }
    }

    /// `<Name>` or `<Name = a | b>`, never spanning lines
    fn match_variable(&self) -> Option<Token> {
        let is_name_byte =
            |b: u8| !matches!(b, b'=' | b'<' | b'>') && !b.is_ascii_whitespace();
        let is_value_byte =
            |b: u8| !matches!(b, b'|' | b'<' | b'>') && !b.is_ascii_whitespace();

        let name_start = self.pos + 1;
        let name_end = scan_while(self.bytes, name_start, is_name_byte);
        if name_end == name_start {
            return None;
        }

        let mut cursor = skip_horizontal_ws(self.bytes, name_end);
        let mut values: Vec<String> = Vec::new();
        if self.bytes.get(cursor) == Some(&b'=') {
            loop {
                let value_start = skip_horizontal_ws(self.bytes, cursor + 1);
                let value_end = scan_while(self.bytes, value_start, is_value_byte);
                if value_end == value_start {
                    return None;
                }

                let value = &self.text[value_start..value_end];
                if !values.iter().any(|existing| existing == value) {
                    values.push(value.to_string());
                }

                cursor = skip_horizontal_ws(self.bytes, value_end);
                if self.bytes.get(cursor) != Some(&b'|') {
                    break;
                }
            }
        }

        if self.bytes.get(cursor) != Some(&b'>') {
            return None;
        }

        let name = self.text[name_start..name_end].to_string();
        Some(self.token(TokenKind::Variable { name, values }, self.pos, cursor + 1))
    }

    /// Walk back from `at` over `//` comment leaders on the same line
    fn leader_start(&self, at: usize) -> usize {
        let mut start = at;
        loop {
            let mut probe = start;
            while probe > self.last_end && is_horizontal_ws(self.bytes[probe - 1]) {
                probe -= 1;
            }
            if probe >= self.last_end + 2 && &self.bytes[probe - 2..probe] == b"//" {
                start = probe - 2;
            } else {
                return start;
            }
        }
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> Token {
        Token {
            kind,
            start,
            end,
            line: self.line,
        }
    }

    /// Move past a recognized token and update line tracking
    fn advance_past(&mut self, token: &Token) {
        self.line += count_newlines(&self.text[self.pos..token.end]);
        self.state = if self.bytes[token.end - 1] == b'\n' {
            ScanState::LineStart
        } else {
            ScanState::InLine
        };
        self.pos = token.end;
        self.last_end = token.end;
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        const MAX_STEPS_MULTIPLIER: usize = 3;
        let max_steps = self.bytes.len().saturating_mul(MAX_STEPS_MULTIPLIER);

        loop {
            if !self.should_continue(max_steps) {
                return None;
            }

            let byte = self.bytes[self.pos];
            #[cfg(test)]
            Self::record_test_step();

            let token = match byte {
                b'\n' => {
                    self.line += 1;
                    self.state = ScanState::LineStart;
                    self.pos += 1;
                    continue;
                }
                b if is_horizontal_ws(b) => {
                    self.pos += 1;
                    continue;
                }
                b'@' => self.match_at_sign(),
                b'<' => self.match_variable(),
                b'/' | b':' if self.state == ScanState::LineStart => self.match_block_end(),
                _ => None,
            };

            match token {
                Some(token) => {
                    self.advance_past(&token);
                    return Some(token);
                }
                None => {
                    self.state = ScanState::InLine;
                    self.pos += 1;
                }
            }
        }
    }
}
