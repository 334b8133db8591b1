//! Scan command - list the directives of a template or generated shader

use crate::output::print_json;
use anyhow::{Context as _, Result};
use serde_json::json;
use shadergen_core::template::scan;
use std::fs;
use std::path::PathBuf;

/// Scan a file and print its conditions, blocks and variables
///
/// Works on templates and on generated output alike; generated files only
/// report the blocks they carry.
pub fn run(file: PathBuf, json: bool) -> Result<()> {
    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let info = scan(&text);

    if json {
        print_json(&json!({
            "file": file.display().to_string(),
            "conditions": info.conditions,
            "blocks": info.blocks,
            "variables": info.variables,
        }))?;
        return Ok(());
    }

    if info.is_empty() {
        println!("No directives found in {}", file.display());
        return Ok(());
    }

    super::render_info(&info);
    Ok(())
}
