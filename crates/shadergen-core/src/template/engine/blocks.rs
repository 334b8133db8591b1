//! Marker pairing on a token list (`@if` with `@endif`, `@block` with `@endblock`)

use super::tokenize::{Token, TokenKind};

/// Positions (token indices) of the markers closing a conditional
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ConditionalEnd {
    /// `@else` at the same nesting level, if any
    pub else_index: Option<usize>,
    /// Matching `@endif`
    pub end_index: usize,
}

/// Find the `@else` / `@endif` pairing with the `@if` at `open`
///
/// # Nesting
///
/// Every `@if` header between `open` and the result opens a nested level, and
/// each `@endif` closes the innermost one. A second `@else` at the same level
/// makes the conditional malformed.
///
/// Returns `None` when the conditional is malformed; the caller then treats
/// the header as literal text.
pub(crate) fn find_conditional_end(tokens: &[Token], open: usize) -> Option<ConditionalEnd> {
    let mut depth = 0;
    let mut else_index = None;

    for (index, token) in tokens.iter().enumerate().skip(open + 1) {
        match token.kind {
            TokenKind::IfStart { .. } => depth += 1,
            TokenKind::Else if depth == 0 => {
                if else_index.is_some() {
                    return None;
                }
                else_index = Some(index);
            }
            TokenKind::EndIf => {
                if depth == 0 {
                    return Some(ConditionalEnd {
                        else_index,
                        end_index: index,
                    });
                }
                depth -= 1;
            }
            _ => {
                // Blocks, variables and nested @else markers do not affect pairing
            }
        }
    }

    None
}

/// Find the nearest `@endblock` after the `@block` at `open`
///
/// Blocks do not nest: a `@block` header inside a body is part of the body.
pub(crate) fn find_block_end(tokens: &[Token], open: usize) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(open + 1)
        .find(|(_, token)| token.kind == TokenKind::BlockEnd)
        .map(|(index, _)| index)
}
