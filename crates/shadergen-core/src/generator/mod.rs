//! Generator documents (`*.gen.toml`)
//!
//! A generator stores the user's choices for one shader: which template it
//! is built from and a value for every directive of that template. Export
//! turns the document into a shader file next to it.

mod label;
mod workflow;

pub use label::display_label;
pub use workflow::{create, export, pull, reconvert_all, ExportReport};

use crate::config::consts::constants::NAME_VARIABLE;
use crate::error::{Result, ShadergenError};
use crate::fs::atomic_write;
use crate::path::{join_relative, validate_file_stem};
use crate::template::{scan, ResolvedValues, TemplateInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// `[shader]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderSection {
    /// Shader name; also the output file stem
    pub name: String,
    /// Template name in the catalog; empty selects the catalog default
    #[serde(default)]
    pub template: String,
    /// Output directory, relative to the generator file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    /// File name written by the last export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported: Option<String>,
}

/// A generator document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generator {
    pub shader: ShaderSection,
    #[serde(default)]
    pub conditions: BTreeMap<String, bool>,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
    #[serde(default)]
    pub blocks: BTreeMap<String, String>,
}

/// Names added to a generator by [`Generator::sync_with_template`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub conditions: Vec<String>,
    pub blocks: Vec<String>,
    pub variables: Vec<String>,
}

impl SyncReport {
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> usize {
        self.conditions.len() + self.blocks.len() + self.variables.len()
    }
}

impl Generator {
    pub fn new(name: &str, template: &str) -> Self {
        Self {
            shader: ShaderSection {
                name: name.to_string(),
                template: template.to_string(),
                output_dir: None,
                exported: None,
            },
            conditions: BTreeMap::new(),
            variables: BTreeMap::new(),
            blocks: BTreeMap::new(),
        }
    }

    /// Read a generator document
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ShadergenError::GeneratorNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ShadergenError::GeneratorInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write the document atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        atomic_write(path, &content)
    }

    /// Add every scanned name that has no stored value yet, with its template default
    ///
    /// Stored values are never overwritten, and names the template no longer
    /// uses are kept.
    pub fn sync_with_template(&mut self, info: &TemplateInfo) -> SyncReport {
        let mut report = SyncReport::default();

        for (name, default) in info.conditions.iter() {
            if !self.conditions.contains_key(name) {
                self.conditions.insert(name.to_string(), *default);
                report.conditions.push(name.to_string());
            }
        }
        for (name, body) in info.blocks.iter() {
            if !self.blocks.contains_key(name) {
                self.blocks.insert(name.to_string(), body.clone());
                report.blocks.push(name.to_string());
            }
        }
        for (name, alternatives) in info.variables.iter() {
            if !self.variables.contains_key(name) {
                let default = alternatives.first().cloned().unwrap_or_default();
                self.variables.insert(name.to_string(), default);
                report.variables.push(name.to_string());
            }
        }

        if !report.is_empty() {
            log::debug!(
                "generator '{}' gained {} new values from its template",
                self.shader.name,
                report.total()
            );
        }
        report
    }

    /// One value for every name `info` lists
    ///
    /// Stored values win over template defaults. The variable `Name` always
    /// resolves to the shader name, and `constants` override everything else.
    /// A choice variable holding a value outside its alternatives resolves to
    /// the first alternative.
    pub fn resolved_values(
        &self,
        info: &TemplateInfo,
        constants: &BTreeMap<String, String>,
    ) -> Result<ResolvedValues> {
        if self.shader.name.trim().is_empty() {
            return Err(ShadergenError::ShaderNameEmpty);
        }

        let mut values = ResolvedValues::new();
        for (name, default) in info.conditions.iter() {
            let value = self.conditions.get(name).copied().unwrap_or(*default);
            values.set_condition(name, value);
        }
        for (name, body) in info.blocks.iter() {
            let body = self.blocks.get(name).unwrap_or(body);
            values.set_block(name, body.as_str());
        }
        for (name, alternatives) in info.variables.iter() {
            let stored = self.variables.get(name).map(String::as_str);
            let value = match (stored, alternatives.first()) {
                (Some(value), Some(first)) if !alternatives.iter().any(|a| a == value) => {
                    log::warn!(
                        "variable '{}' value '{}' is not one of its choices, using '{}'",
                        name,
                        value,
                        first
                    );
                    first.as_str()
                }
                (Some(value), _) => value,
                (None, first) => first.map(String::as_str).unwrap_or(""),
            };
            values.set_variable(name, value);
        }

        if info.variables.contains(NAME_VARIABLE) {
            values.set_variable(NAME_VARIABLE, self.shader.name.as_str());
        }
        for (name, value) in constants {
            if info.variables.contains(name) {
                values.set_variable(name, value.as_str());
            }
        }

        Ok(values)
    }

    /// Store the value of every fixed variable the conversion used
    fn record_constants(
        &mut self,
        info: &TemplateInfo,
        resolved: &ResolvedValues,
        constants: &BTreeMap<String, String>,
    ) {
        let fixed = std::iter::once(NAME_VARIABLE).chain(constants.keys().map(String::as_str));
        for name in fixed.filter(|name| info.variables.contains(name)) {
            if let Some(value) = resolved.variable(name) {
                self.variables.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Copy block bodies from previously generated text back into the document
    ///
    /// Only names already stored are updated; unknown blocks are ignored.
    /// Returns the names whose body changed.
    pub fn pull_blocks(&mut self, generated: &str) -> Vec<String> {
        let info = scan(generated);
        if info.blocks.is_empty() && !self.blocks.is_empty() {
            log::warn!(
                "no blocks found in generated output of '{}'",
                self.shader.name
            );
        }

        let mut updated = Vec::new();
        for (name, body) in info.blocks.iter() {
            match self.blocks.get_mut(name) {
                Some(stored) if stored != body => {
                    *stored = body.clone();
                    updated.push(name.to_string());
                }
                Some(_) => {}
                None => log::debug!("ignoring unknown block '{}'", name),
            }
        }
        updated
    }

    /// Directory the shader file is written to
    pub fn output_dir(&self, generator_dir: &Path) -> Result<PathBuf> {
        match &self.shader.output_dir {
            Some(dir) => join_relative(generator_dir, Path::new(dir)),
            None => Ok(generator_dir.to_path_buf()),
        }
    }

    /// `<generator_dir>/<output_dir>/<name>.<extension>`
    pub fn output_path(&self, generator_dir: &Path, extension: &str) -> Result<PathBuf> {
        validate_file_stem(&self.shader.name)?;
        Ok(self
            .output_dir(generator_dir)?
            .join(format!("{}.{}", self.shader.name, extension)))
    }

    /// File written by the last export, if recorded
    pub fn exported_path(&self, generator_dir: &Path) -> Result<Option<PathBuf>> {
        match &self.shader.exported {
            Some(file_name) => {
                validate_file_stem(file_name)?;
                Ok(Some(self.output_dir(generator_dir)?.join(file_name)))
            }
            None => Ok(None),
        }
    }
}
