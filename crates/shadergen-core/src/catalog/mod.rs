//! Template catalog
//!
//! The catalog is the list of templates a generator can choose from: every
//! file in the templates directory with the configured extension. Files
//! whose name starts with `_` are partials and are not listed.

use crate::error::{Result, ShadergenError};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One selectable template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    /// File stem, used as the template name
    pub name: String,
    pub path: PathBuf,
}

/// Templates available in one directory, sorted by name
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    entries: Vec<TemplateEntry>,
}

impl TemplateCatalog {
    /// Load every `*.<extension>` file directly inside `dir`
    ///
    /// A missing directory yields an empty catalog.
    pub fn load(dir: &Path, extension: &str) -> Result<Self> {
        if !dir.is_dir() {
            log::debug!("templates directory {} does not exist", dir.display());
            return Ok(Self::default());
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if name.is_empty() || name.starts_with('_') {
                continue;
            }
            entries.push(TemplateEntry {
                name: name.to_string(),
                path: path.clone(),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        log::debug!("loaded {} templates from {}", entries.len(), dir.display());
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&TemplateEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// First template by name, used when a generator names none
    pub fn default_name(&self) -> Option<&str> {
        self.entries.first().map(|entry| entry.name.as_str())
    }

    /// Template name to use for `requested`, falling back to the default
    ///
    /// An empty request selects the default template.
    pub fn resolve_name<'a>(&'a self, requested: &'a str) -> Result<&'a str> {
        if requested.is_empty() {
            return self
                .default_name()
                .ok_or_else(|| ShadergenError::TemplateNotFound("(default)".to_string()));
        }
        self.get(requested)
            .map(|entry| entry.name.as_str())
            .ok_or_else(|| ShadergenError::TemplateNotFound(requested.to_string()))
    }

    /// Read the text of template `name`
    pub fn read(&self, name: &str) -> Result<String> {
        let entry = self
            .get(name)
            .ok_or_else(|| ShadergenError::TemplateNotFound(name.to_string()))?;
        Ok(std::fs::read_to_string(&entry.path)?)
    }
}
