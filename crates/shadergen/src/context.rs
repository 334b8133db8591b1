//! Global context for CLI commands

use anyhow::Result;
use shadergen_core::ShadergenError;
use shadergen_core::project::Project;
use std::env;

/// Global context containing the project and its config
pub struct Context {
    pub project: Project,
    pub verbose: bool,
}

impl Context {
    /// Create a new context by loading the project around the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Not in a shadergen project
    /// - Config file cannot be read or parsed
    pub fn new(verbose: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let project = Project::find_root(&current_dir)?.ok_or(ShadergenError::ProjectNotFound)?;

        log::debug!("project root: {}", project.root.display());

        Ok(Self { project, verbose })
    }
}
