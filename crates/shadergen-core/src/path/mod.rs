//! Cross-platform path validation utilities
//!
//! Shader names become file names and generator documents carry an output
//! directory relative to their own location. Both come from user-edited
//! TOML, so they are validated before any path is joined.
//!
//! `Path::is_absolute()` is platform-dependent: on Windows `/tmp` is rooted
//! but not absolute. Checks here are component-based so they behave the same
//! on every platform.

use crate::error::{Result, ShadergenError};
use std::path::{Component, Path, PathBuf};

/// Check if path is absolute OR rooted (cross-platform)
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
/// use shadergen_core::path::has_absolute_or_rooted_component;
///
/// assert!(has_absolute_or_rooted_component(Path::new("/tmp")));
/// assert!(!has_absolute_or_rooted_component(Path::new("shaders/out")));
/// ```
pub fn has_absolute_or_rooted_component(path: &Path) -> bool {
    if path.is_absolute() {
        return true;
    }

    path.components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
}

/// Check that a shader name can be used as a single file stem
///
/// Rejects empty names, separators, `.` and `..`.
///
/// ```rust
/// use shadergen_core::path::validate_file_stem;
///
/// assert!(validate_file_stem("Sphere").is_ok());
/// assert!(validate_file_stem("../Sphere").is_err());
/// ```
pub fn validate_file_stem(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ShadergenError::ShaderNameEmpty);
    }

    let path = Path::new(name);
    if has_absolute_or_rooted_component(path) {
        return Err(ShadergenError::ShaderNameInvalid(name.to_string()));
    }

    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(ShadergenError::ShaderNameInvalid(name.to_string())),
    }
}

/// Join a relative directory onto `base`, refusing paths that leave `base`
///
/// Returns `PROJECT_PATH_ESCAPE` for absolute, rooted or `..` paths.
pub fn join_relative(base: &Path, relative: &Path) -> Result<PathBuf> {
    if has_absolute_or_rooted_component(relative) {
        return Err(ShadergenError::ProjectPathEscape {
            path: relative.to_path_buf(),
        });
    }

    let mut joined = base.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => joined.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ShadergenError::ProjectPathEscape {
                    path: relative.to_path_buf(),
                });
            }
        }
    }
    Ok(joined)
}
