//! Templates command - list the templates of the current project

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use shadergen_core::template::scan;

/// List catalog templates with their directive counts
pub fn run(json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let catalog = ctx.project.catalog()?;

    if json {
        let mut templates = Vec::new();
        for entry in catalog.entries() {
            let info = scan(&catalog.read(&entry.name)?);
            templates.push(json!({
                "name": entry.name,
                "path": entry.path.display().to_string(),
                "conditions": info.conditions,
                "blocks": info.blocks.names().collect::<Vec<_>>(),
                "variables": info.variables,
            }));
        }
        print_json(&json!({
            "project": ctx.project.config.project.name,
            "templates_dir": ctx.project.templates_dir()?.display().to_string(),
            "default": catalog.default_name(),
            "templates": templates,
        }))?;
        return Ok(());
    }

    if catalog.is_empty() {
        println!(
            "{} No templates in {}",
            "!".yellow(),
            ctx.project.templates_dir()?.display()
        );
        return Ok(());
    }

    for entry in catalog.entries() {
        let info = scan(&catalog.read(&entry.name)?);
        let marker = if catalog.default_name() == Some(entry.name.as_str()) {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "{}{}  {} conditions, {} blocks, {} variables",
            entry.name.bold(),
            marker,
            info.conditions.len(),
            info.blocks.len(),
            info.variables.len()
        );
        if ctx.verbose {
            super::render_info(&info);
        }
    }

    Ok(())
}
