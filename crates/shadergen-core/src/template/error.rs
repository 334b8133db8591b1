//! Template error types

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The three directive forms a template can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    /// `@if Name` ... `@endif`
    Condition,
    /// `@block Name` ... `@endblock`
    Block,
    /// `<Name=a|b>`
    Variable,
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveKind::Condition => write!(f, "condition"),
            DirectiveKind::Block => write!(f, "block"),
            DirectiveKind::Variable => write!(f, "variable"),
        }
    }
}

/// Template conversion errors
///
/// Malformed directive syntax is never reported here: it does not match the
/// grammar and stays in the output as literal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A directive references a name that has no resolved value
    #[error("Unresolved {kind} '{name}': no value was given for it")]
    UnresolvedDirective {
        /// Which directive form referenced the name
        kind: DirectiveKind,
        /// The name that was not found
        name: String,
    },
}

impl TemplateError {
    pub(crate) fn unresolved(kind: DirectiveKind, name: &str) -> Self {
        TemplateError::UnresolvedDirective {
            kind,
            name: name.to_string(),
        }
    }
}
