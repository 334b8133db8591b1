//! Init command - create shadergen.toml in the current directory

use anyhow::{Result, bail};
use colored::Colorize;
use shadergen_core::config::CONFIG_FILE;
use shadergen_core::project::Project;
use std::env;

/// Initialize a project in the current directory
///
/// The project name defaults to the directory name.
pub fn run(name: Option<String>, verbose: bool) -> Result<()> {
    let current_dir = env::current_dir()?;

    if current_dir.join(CONFIG_FILE).exists() {
        bail!("{} already exists in {}", CONFIG_FILE, current_dir.display());
    }

    let name = match name {
        Some(name) => name,
        None => current_dir
            .file_name()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_else(|| "shaders".to_string()),
    };

    let project = Project::init(&current_dir, &name)?;

    println!(
        "{} Initialized project '{}' at {}",
        "✓".green().bold(),
        name,
        project.root.display()
    );
    if verbose {
        println!("\n{} Project structure:", "→".cyan());
        println!("  - {} (project configuration)", CONFIG_FILE);
        println!("  - {}/ (templates)", project.config.templates.dir);
    }
    Ok(())
}
