//! Template engine implementation

mod blocks;
mod helpers;
mod tokenize;

use crate::template::directives::{ResolvedValues, TemplateInfo};
use crate::template::error::{DirectiveKind, TemplateError};

use blocks::{find_block_end, find_conditional_end};
use helpers::{canonical_block, content_end, normalize_line_endings};
use tokenize::{Token, TokenKind, TokenStream};

/// Number of directive occurrences replaced by one conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub conditionals: usize,
    pub blocks: usize,
    pub variables: usize,
}

/// A well-formed conditional, with its branches as spans of the scanned text
struct Conditional<'a> {
    name: String,
    default: Option<bool>,
    start: usize,
    end: usize,
    line: usize,
    when_true: &'a str,
    when_false: &'a str,
}

/// A well-formed block occurrence
struct Block<'a> {
    name: String,
    body: &'a str,
    start: usize,
    end: usize,
    line: usize,
}

fn tokenize(text: &str) -> Vec<Token> {
    TokenStream::new(text).collect()
}

/// Top-level conditionals of `text`, in document order
///
/// Conditionals nested in a branch are not listed; they belong to the
/// branch text and are found by scanning that text.
fn conditionals(text: &str) -> Vec<Conditional<'_>> {
    let tokens = tokenize(text);
    let mut found = Vec::new();
    let mut index = 0;

    while index < tokens.len() {
        let open = &tokens[index];
        let TokenKind::IfStart { name, default } = &open.kind else {
            index += 1;
            continue;
        };
        let Some(closing) = find_conditional_end(&tokens, index) else {
            // Unmatched header stays literal; markers after it are still live
            index += 1;
            continue;
        };

        let end = &tokens[closing.end_index];
        let (when_true, when_false) = match closing.else_index {
            Some(else_index) => {
                let otherwise = &tokens[else_index];
                (
                    &text[open.end..content_end(text, open.end, otherwise.start)],
                    &text[otherwise.end..content_end(text, otherwise.end, end.start)],
                )
            }
            None => (&text[open.end..content_end(text, open.end, end.start)], ""),
        };

        found.push(Conditional {
            name: name.clone(),
            default: *default,
            start: open.start,
            end: end.end,
            line: open.line,
            when_true,
            when_false,
        });
        index = closing.end_index + 1;
    }

    found
}

/// Blocks of `text`, in document order
///
/// A block header inside another block's body is part of that body.
fn block_occurrences(text: &str) -> Vec<Block<'_>> {
    let tokens = tokenize(text);
    let mut found = Vec::new();
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];
        if let TokenKind::BlockStart { name } = &token.kind {
            if let Some(end_index) = find_block_end(&tokens, index) {
                let end = &tokens[end_index];
                found.push(Block {
                    name: name.clone(),
                    body: &text[token.end..content_end(text, token.end, end.start)],
                    start: token.start,
                    end: end.end,
                    line: token.line,
                });
                index = end_index + 1;
                continue;
            }
        }
        index += 1;
    }

    found
}

/// Template engine for scanning and converting shader templates
///
/// The engine is stateless; one instance can be shared freely.
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self
    }

    /// Extract directive names and their template defaults
    ///
    /// Never fails: text that does not match the grammar is ignored. Each
    /// directive kind is collected from the whole input, so blocks and
    /// variables inside conditional branches are reported as well.
    pub fn scan(&self, template: &str) -> TemplateInfo {
        let mut info = TemplateInfo::default();

        self.scan_conditions(template, &mut info);

        for block in block_occurrences(template) {
            info.blocks.insert_last(&block.name, block.body.to_string());
        }

        for token in TokenStream::new(template) {
            if let TokenKind::Variable { name, values } = token.kind {
                info.variables.insert_first(&name, values);
            }
        }

        log::trace!(
            "scanned template: {} conditions, {} blocks, {} variables",
            info.conditions.len(),
            info.blocks.len(),
            info.variables.len()
        );
        info
    }

    /// Record every conditional of `text`, nested ones included, in document order
    fn scan_conditions(&self, text: &str, info: &mut TemplateInfo) {
        for conditional in conditionals(text) {
            info.conditions
                .insert_first(&conditional.name, conditional.default.unwrap_or(false));
            self.scan_conditions(conditional.when_true, info);
            self.scan_conditions(conditional.when_false, info);
        }
    }

    /// Convert a template into final text
    ///
    /// On failure no partial output is returned.
    pub fn convert(
        &self,
        template: &str,
        resolved: &ResolvedValues,
    ) -> Result<String, TemplateError> {
        self.convert_with_stats(template, resolved)
            .map(|(text, _)| text)
    }

    /// Convert a template and report how many directives were replaced
    pub fn convert_with_stats(
        &self,
        template: &str,
        resolved: &ResolvedValues,
    ) -> Result<(String, ConversionStats), TemplateError> {
        let mut stats = ConversionStats::default();

        let structured = self.resolve_conditionals(template, resolved, &mut stats)?;
        let with_blocks = self.resolve_blocks(&structured, resolved, &mut stats)?;
        let output = self.resolve_variables(&with_blocks, resolved, &mut stats)?;

        log::debug!(
            "converted template: {} conditionals, {} blocks, {} variables",
            stats.conditionals,
            stats.blocks,
            stats.variables
        );
        Ok((normalize_line_endings(&output), stats))
    }

    /// Replace every conditional by its chosen branch
    ///
    /// The chosen branch is resolved recursively before it is inserted, so
    /// each conditional is visited exactly once and directives in the branch
    /// that is dropped are never consulted.
    fn resolve_conditionals(
        &self,
        text: &str,
        resolved: &ResolvedValues,
        stats: &mut ConversionStats,
    ) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(text.len());
        let mut pos = 0;

        for conditional in conditionals(text) {
            output.push_str(&text[pos..conditional.start]);

            let value = resolved.condition(&conditional.name).ok_or_else(|| {
                log::debug!(
                    "condition '{}' at line {} has no value",
                    conditional.name,
                    conditional.line
                );
                TemplateError::unresolved(DirectiveKind::Condition, &conditional.name)
            })?;
            stats.conditionals += 1;

            let branch = if value {
                conditional.when_true
            } else {
                conditional.when_false
            };
            output.push_str(&self.resolve_conditionals(branch, resolved, stats)?);
            pos = conditional.end;
        }

        output.push_str(&text[pos..]);
        Ok(output)
    }

    /// Replace every block by its canonical form around the resolved body
    fn resolve_blocks(
        &self,
        text: &str,
        resolved: &ResolvedValues,
        stats: &mut ConversionStats,
    ) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(text.len());
        let mut pos = 0;

        for block in block_occurrences(text) {
            output.push_str(&text[pos..block.start]);

            let body = resolved.block(&block.name).ok_or_else(|| {
                log::debug!("block '{}' at line {} has no value", block.name, block.line);
                TemplateError::unresolved(DirectiveKind::Block, &block.name)
            })?;
            output.push_str(&canonical_block(&block.name, body));
            stats.blocks += 1;
            pos = block.end;
        }

        output.push_str(&text[pos..]);
        Ok(output)
    }

    /// Replace every variable, block bodies included, by its value
    ///
    /// Runs once over the text, so inserted values are never scanned again.
    fn resolve_variables(
        &self,
        text: &str,
        resolved: &ResolvedValues,
        stats: &mut ConversionStats,
    ) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(text.len());
        let mut pos = 0;

        for token in TokenStream::new(text) {
            let TokenKind::Variable { name, .. } = &token.kind else {
                continue;
            };
            output.push_str(&text[pos..token.start]);

            let value = resolved.variable(name).ok_or_else(|| {
                log::debug!("variable '{}' at line {} has no value", name, token.line);
                TemplateError::unresolved(DirectiveKind::Variable, name)
            })?;
            output.push_str(value);
            stats.variables += 1;
            pos = token.end;
        }

        output.push_str(&text[pos..]);
        Ok(output)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to scan a template
pub fn scan(template: &str) -> TemplateInfo {
    TemplateEngine::new().scan(template)
}

/// Convenience function to convert a template
pub fn convert(template: &str, resolved: &ResolvedValues) -> Result<String, TemplateError> {
    TemplateEngine::new().convert(template, resolved)
}

#[cfg(test)]
mod tests;
