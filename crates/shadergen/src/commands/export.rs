//! Export and reconvert commands - write shaders from generator documents

use crate::context::Context;
use anyhow::{Result, bail};
use colored::Colorize;
use shadergen_core::generator::{self, ExportReport};
use std::path::PathBuf;

/// Export one generator document
pub fn run(generator_path: PathBuf, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;

    if verbose {
        println!("{} Exporting {}", "→".cyan(), generator_path.display());
    }

    let report = generator::export(&ctx.project, &generator_path)?;
    render_report(&report, verbose);
    Ok(())
}

/// Export every generator in the project
///
/// Every generator is attempted; the command fails afterwards if any did.
pub fn run_all(verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let outcomes = generator::reconvert_all(&ctx.project)?;

    if outcomes.is_empty() {
        println!("{} No generators found", "!".yellow());
        return Ok(());
    }

    let mut failed = 0;
    for (path, outcome) in &outcomes {
        match outcome {
            Ok(report) => render_report(report, verbose),
            Err(e) => {
                failed += 1;
                eprintln!("{} {}: {}", "✗".red().bold(), path.display(), e);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} generators failed", failed, outcomes.len());
    }

    println!(
        "\n{} Reconverted {} generator(s)",
        "✓".green().bold(),
        outcomes.len()
    );
    Ok(())
}

fn render_report(report: &ExportReport, verbose: bool) {
    if let Some(previous) = &report.renamed_from {
        println!(
            "{} Renamed {} to {}",
            "→".cyan(),
            previous.display(),
            report.output.display()
        );
    }
    if !report.pulled.is_empty() {
        println!(
            "{} Pulled edited blocks: {}",
            "→".cyan(),
            report.pulled.join(", ")
        );
    }
    if !report.synced.is_empty() {
        println!(
            "{} Added {} new template value(s)",
            "!".yellow(),
            report.synced.total()
        );
    }

    println!(
        "{} Exported {} ({})",
        "✓".green().bold(),
        report.output.display(),
        report.template
    );

    if verbose {
        println!(
            "  {} conditionals, {} blocks, {} variables",
            report.stats.conditionals, report.stats.blocks, report.stats.variables
        );
    }
}
