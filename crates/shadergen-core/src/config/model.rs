use super::consts::defaults;
use crate::error::{Result, ShadergenError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// shadergen.toml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub project: ProjectConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Variables forced to a fixed value on export
    #[serde(default)]
    pub constants: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directory holding the template catalog, relative to the project root
    #[serde(default = "default_templates_dir")]
    pub dir: String,
    /// Template file extension, without the dot
    #[serde(default = "default_template_extension")]
    pub extension: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: default_templates_dir(),
            extension: default_template_extension(),
        }
    }
}

fn default_templates_dir() -> String {
    defaults::TEMPLATES_DIR.to_string()
}

fn default_template_extension() -> String {
    defaults::TEMPLATE_EXTENSION.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Extension of generated shader files, without the dot
    #[serde(default = "default_output_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_output_extension(),
        }
    }
}

fn default_output_extension() -> String {
    defaults::OUTPUT_EXTENSION.to_string()
}

impl Config {
    /// Minimal configuration for a new project
    pub fn new(name: &str) -> Self {
        Self {
            project: ProjectConfig {
                name: name.to_string(),
            },
            templates: TemplatesConfig::default(),
            output: OutputConfig::default(),
            constants: BTreeMap::new(),
        }
    }

    /// Read shadergen.toml
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ShadergenError::ProjectConfigInvalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write shadergen.toml
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        std::fs::write(path.as_ref(), content).map_err(ShadergenError::IoError)?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (field, extension) in [
            ("templates.extension", &self.templates.extension),
            ("output.extension", &self.output.extension),
        ] {
            if extension.is_empty() || extension.starts_with('.') {
                return Err(ShadergenError::ConfigInvalidValue {
                    field: field.to_string(),
                    reason: format!("expected an extension without a leading dot, got '{}'", extension),
                });
            }
        }
        Ok(())
    }
}
