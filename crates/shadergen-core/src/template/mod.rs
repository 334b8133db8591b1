//! Template module - Directive-based shader template engine
//!
//! This module turns a shader template plus a set of resolved values into final
//! shader source, and can read an already-generated shader back into its
//! directive values (round-trip extraction of blocks).
//!
//! ## Philosophy
//!
//! - **Pure text rewriting**: No knowledge of the target shading language
//! - **Lenient grammar**: Malformed directives are left as literal text, never an error
//! - **Untouched regions stay byte-identical**: Only directive spans are rewritten
//! - **Shared grammar**: `scan` and `convert` use the same tokenizer, so every name
//!   `convert` consults is a name `scan` reports
//!
//! ## Syntax
//!
//! - Conditionals: `@if Name[:true|false]` ... `@else` ... `@endif` (nestable)
//! - Blocks: `@block Name` ... `@endblock` (re-emitted as `// @block Name` ... `// @endblock`)
//! - Variables: `<Name>` (free text) or `<Name=a|b|c>` (choice, first is default)

pub mod directives;
pub mod engine;
pub mod error;

pub use directives::{Directives, ResolvedValues, TemplateInfo};
pub use engine::{convert, scan, ConversionStats, TemplateEngine};
pub use error::{DirectiveKind, TemplateError};
