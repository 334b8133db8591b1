//! Pull command - copy edited blocks back into a generator document

use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use shadergen_core::generator;
use std::path::PathBuf;

pub fn run(generator_path: PathBuf, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;

    let updated = generator::pull(&ctx.project, &generator_path)?;

    if updated.is_empty() {
        println!("{} No block changes in {}", "✓".green().bold(), generator_path.display());
        return Ok(());
    }

    println!(
        "{} Pulled {} block(s) into {}",
        "✓".green().bold(),
        updated.len(),
        generator_path.display()
    );
    for name in &updated {
        println!("  - {}", name);
    }
    Ok(())
}
