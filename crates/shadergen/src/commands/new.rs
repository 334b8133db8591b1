//! New command - create a generator document

use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use shadergen_core::generator;
use std::env;

/// Create `<name>.gen.toml` in the current directory
///
/// # Arguments
///
/// * `name` - Shader name, also used as the file name
/// * `template` - Template name; the catalog default when omitted
/// * `verbose` - Enable verbose output if true
pub fn run(name: String, template: Option<String>, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let current_dir = env::current_dir()?;

    if verbose {
        println!(
            "{} Creating generator '{}' in {}",
            "→".cyan(),
            name,
            current_dir.display()
        );
    }

    let path = generator::create(
        &ctx.project,
        &current_dir,
        &name,
        template.as_deref().unwrap_or(""),
    )?;

    println!(
        "{} Created generator '{}' at {}",
        "✓".green().bold(),
        name,
        path.display()
    );
    println!("\nNext: shadergen export {}", relative_name(&path));

    Ok(())
}

fn relative_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
