//! Project-level generator operations: create, export, pull, reconvert

use super::{Generator, SyncReport};
use crate::catalog::TemplateCatalog;
use crate::config::GENERATOR_SUFFIX;
use crate::error::{Result, ShadergenError};
use crate::fs::atomic_write;
use crate::path::validate_file_stem;
use crate::project::Project;
use crate::template::{scan, ConversionStats, TemplateEngine};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of one export
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub generator: PathBuf,
    pub output: PathBuf,
    pub template: String,
    /// Blocks copied back from the previous output
    pub pulled: Vec<String>,
    /// Names added from the template
    pub synced: SyncReport,
    /// Previous output file, when the shader name changed
    pub renamed_from: Option<PathBuf>,
    #[serde(skip)]
    pub stats: ConversionStats,
}

fn generator_dir(generator_path: &Path) -> &Path {
    match generator_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn selectable_catalog(project: &Project) -> Result<TemplateCatalog> {
    let catalog = project.catalog()?;
    if catalog.is_empty() {
        return Err(ShadergenError::TemplateCatalogEmpty(project.templates_dir()?));
    }
    Ok(catalog)
}

/// Create `<dir>/<name>.gen.toml` seeded with the template defaults
///
/// An empty `template` selects the catalog default.
pub fn create(project: &Project, dir: &Path, name: &str, template: &str) -> Result<PathBuf> {
    validate_file_stem(name)?;
    let path = dir.join(format!("{}{}", name, GENERATOR_SUFFIX));
    if path.exists() {
        return Err(ShadergenError::GeneratorExists(path));
    }

    let catalog = selectable_catalog(project)?;
    let template_name = catalog.resolve_name(template)?;
    let info = scan(&catalog.read(template_name)?);

    let mut generator = Generator::new(name, template_name);
    generator.sync_with_template(&info);
    generator.save(&path)?;

    log::info!("created generator {}", path.display());
    Ok(path)
}

/// Pull edited blocks from the existing output into the generator document
///
/// Reads the last exported file, or the current output path when the
/// document has never been exported. Saves the document when a block changed.
pub fn pull(project: &Project, generator_path: &Path) -> Result<Vec<String>> {
    let mut generator = Generator::load(generator_path)?;
    let dir = generator_dir(generator_path);

    let source = match generator.exported_path(dir)? {
        Some(previous) => previous,
        None => generator.output_path(dir, &project.config.output.extension)?,
    };
    if !source.is_file() {
        return Err(ShadergenError::OutputNotFound(source));
    }

    let updated = generator.pull_blocks(&std::fs::read_to_string(&source)?);
    if !updated.is_empty() {
        generator.save(generator_path)?;
    }
    Ok(updated)
}

/// Export one generator
///
/// 1. Pull edited blocks from the previous output, if any
/// 2. Sync the document with its template
/// 3. Resolve values and convert the template
/// 4. Write the output and save the document
/// 5. Remove the previous output when the shader name changed
pub fn export(project: &Project, generator_path: &Path) -> Result<ExportReport> {
    let mut generator = Generator::load(generator_path)?;
    let dir = generator_dir(generator_path);
    let constants = &project.config.constants;

    let catalog = selectable_catalog(project)?;
    let template_name = catalog.resolve_name(&generator.shader.template)?.to_string();
    let template = catalog.read(&template_name)?;
    let info = scan(&template);
    generator.shader.template = template_name.clone();

    let previous = generator.exported_path(dir)?.filter(|path| path.is_file());
    let pulled = match &previous {
        Some(path) => generator.pull_blocks(&std::fs::read_to_string(path)?),
        None => Vec::new(),
    };

    let synced = generator.sync_with_template(&info);
    let resolved = generator.resolved_values(&info, constants)?;
    let (text, stats) = TemplateEngine::new().convert_with_stats(&template, &resolved)?;
    generator.record_constants(&info, &resolved, constants);

    let output = generator.output_path(dir, &project.config.output.extension)?;
    if let Some(previous) = previous
        .as_ref()
        .filter(|previous| **previous != output && output.exists())
    {
        return Err(ShadergenError::OutputConflict {
            from: previous.clone(),
            to: output,
        });
    }

    let renamed_from = write_output(&mut generator, generator_path, previous, &output, &text)?;
    log::info!("exported {} to {}", generator_path.display(), output.display());

    Ok(ExportReport {
        generator: generator_path.to_path_buf(),
        output,
        template: template_name,
        pulled,
        synced,
        renamed_from,
        stats,
    })
}

/// Write `text` to `output`, record it in the document, then delete `previous`
///
/// The previous output is only removed once both the new output and the
/// document naming it are on disk. Returns the removed path when the output
/// moved.
pub(super) fn write_output(
    generator: &mut Generator,
    generator_path: &Path,
    previous: Option<PathBuf>,
    output: &Path,
    text: &str,
) -> Result<Option<PathBuf>> {
    atomic_write(output, text)?;

    generator.shader.exported = output
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string);
    generator.save(generator_path)?;

    let Some(previous) = previous.filter(|previous| previous != output) else {
        return Ok(None);
    };
    match std::fs::remove_file(&previous) {
        Ok(()) => log::info!("moved {} to {}", previous.display(), output.display()),
        Err(e) => log::warn!("left stale output {}: {}", previous.display(), e),
    }
    Ok(Some(previous))
}

/// Export every generator in the project, in path order
///
/// A failing generator does not stop the others; each outcome is returned
/// with its path.
pub fn reconvert_all(project: &Project) -> Result<Vec<(PathBuf, Result<ExportReport>)>> {
    let generators = project.generators()?;
    log::info!("reconverting {} generators", generators.len());

    Ok(generators
        .into_iter()
        .map(|path| {
            let outcome = export(project, &path);
            if let Err(e) = &outcome {
                log::debug!("failed to export {}: {}", path.display(), e);
            }
            (path, outcome)
        })
        .collect())
}
