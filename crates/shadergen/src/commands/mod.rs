//! CLI command implementations

pub mod convert;
pub mod export;
pub mod init;
pub mod new;
pub mod pull;
pub mod scan;
pub mod templates;

use colored::Colorize;
use shadergen_core::generator::display_label;
use shadergen_core::template::TemplateInfo;

/// Print the directives of a scanned template, one section per kind
pub(crate) fn render_info(info: &TemplateInfo) {
    println!("{} Conditions ({})", "→".cyan(), info.conditions.len());
    for (name, default) in info.conditions.iter() {
        println!("  {} = {}  {}", name, default, display_label(name).dimmed());
    }

    println!("{} Blocks ({})", "→".cyan(), info.blocks.len());
    for (name, body) in info.blocks.iter() {
        let lines = body.lines().count();
        println!(
            "  {} ({} {})  {}",
            name,
            lines,
            if lines == 1 { "line" } else { "lines" },
            display_label(name).dimmed()
        );
    }

    println!("{} Variables ({})", "→".cyan(), info.variables.len());
    for (name, alternatives) in info.variables.iter() {
        if alternatives.is_empty() {
            println!("  {}  {}", name, display_label(name).dimmed());
        } else {
            println!(
                "  {} = {}  {}",
                name,
                alternatives.join("|"),
                display_label(name).dimmed()
            );
        }
    }
}
