use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum ShadergenError {
    // Project errors
    #[error("PROJECT_NOT_FOUND: shadergen.toml not found in current or parent directories")]
    ProjectNotFound,

    #[error("PROJECT_CONFIG_INVALID: failed to parse shadergen.toml: {0}")]
    ProjectConfigInvalid(String),

    #[error("PROJECT_PATH_ESCAPE: path '{path}' resolves outside project root")]
    ProjectPathEscape { path: PathBuf },

    // Config errors
    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Template errors
    #[error("TEMPLATE_NOT_FOUND: template '{0}' not found")]
    TemplateNotFound(String),

    #[error("TEMPLATE_CATALOG_EMPTY: no templates found in '{0}'")]
    TemplateCatalogEmpty(PathBuf),

    #[error("TEMPLATE_UNRESOLVED: {0}")]
    TemplateUnresolved(#[from] TemplateError),

    // Generator errors
    #[error("GENERATOR_NOT_FOUND: generator '{0}' not found")]
    GeneratorNotFound(PathBuf),

    #[error("GENERATOR_INVALID: failed to parse '{path}': {reason}")]
    GeneratorInvalid { path: PathBuf, reason: String },

    #[error("GENERATOR_EXISTS: generator '{0}' already exists")]
    GeneratorExists(PathBuf),

    #[error("SHADER_NAME_EMPTY: shader name must not be empty")]
    ShaderNameEmpty,

    #[error("SHADER_NAME_INVALID: '{0}' cannot be used as a file name")]
    ShaderNameInvalid(String),

    #[error("OUTPUT_NOT_FOUND: no generated shader at '{0}'")]
    OutputNotFound(PathBuf),

    #[error("OUTPUT_CONFLICT: cannot rename '{from}' to '{to}': target file exists")]
    OutputConflict { from: PathBuf, to: PathBuf },

    #[error("OUTPUT_WRITE_FAILED: failed to write '{path}': {reason}")]
    OutputWriteFailed { path: PathBuf, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<toml::ser::Error> for ShadergenError {
    fn from(err: toml::ser::Error) -> Self {
        ShadergenError::Generic(format!("TOML serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ShadergenError>;
