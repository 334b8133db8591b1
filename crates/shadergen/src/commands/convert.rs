//! Convert command - expand one template file outside of a project

use crate::output::print_raw;
use anyhow::{Context as _, Result};
use colored::Colorize;
use shadergen_core::fs::atomic_write;
use shadergen_core::template::{ResolvedValues, TemplateEngine};
use std::fs;
use std::path::{Path, PathBuf};

/// Convert a template with values read from a TOML file
///
/// # Arguments
///
/// * `template` - Template file to convert
/// * `values` - Optional TOML file with `[conditions]`, `[variables]` and `[blocks]`
/// * `output` - Write here instead of stdout
/// * `strict` - Do not fill missing values from template defaults
/// * `verbose` - Enable verbose output if true
pub fn run(
    template: PathBuf,
    values: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
    verbose: bool,
) -> Result<()> {
    let text = fs::read_to_string(&template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;
    let engine = TemplateEngine::new();

    let mut resolved = match &values {
        Some(path) => load_values(path)?,
        None => ResolvedValues::new(),
    };
    if !strict {
        resolved = resolved.or_defaults(engine.scan(&text).defaults());
    }

    let (converted, stats) = engine.convert_with_stats(&text, &resolved)?;

    match output {
        Some(path) => {
            atomic_write(&path, &converted)?;
            println!("{} Wrote {}", "✓".green().bold(), path.display());
            if verbose {
                println!(
                    "  {} conditionals, {} blocks, {} variables",
                    stats.conditionals, stats.blocks, stats.variables
                );
            }
        }
        None => print_raw(&converted)?,
    }

    Ok(())
}

fn load_values(path: &Path) -> Result<ResolvedValues> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read values {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid values file {}", path.display()))
}
