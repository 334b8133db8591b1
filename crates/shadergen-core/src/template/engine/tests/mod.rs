//! Tests for template engine
//!
//! Organized into focused submodules: tokenizer, scanning, conversion per
//! directive kind, errors, and whole-engine properties.

use super::*;

// Test helper functions
mod helpers;

mod tokenstream_performance;
