//! Test utilities for shadergen
//!
//! This crate provides shared testing utilities used across the shadergen workspace.

pub mod fixtures;

pub use fixtures::{write_generator, write_sample_project};

use tempfile::TempDir;

/// Temporary directory under `<cwd>/.tmp/`, removed on drop
///
/// Cargo runs tests from the crate directory, so scratch directories land
/// in that crate's `.tmp/`. Nothing above it may contain a `shadergen.toml`.
///
/// # Panics
///
/// Panics if the directory cannot be created.
///
/// ```rust
/// use shadergen_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// std::fs::write(temp.path().join("Sphere.gen.toml"), "[shader]\nname = \"Sphere\"\n").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("cannot create scratch directory under .tmp/")
}

/// Fallible form of [`temp_dir_in_workspace`]
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let scratch = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&scratch)?;
    tempfile::Builder::new().prefix("shadergen-").tempdir_in(&scratch)
}

/// Temporary directory holding the sample project from [`fixtures`]
pub fn sample_project() -> TempDir {
    let temp = temp_dir_in_workspace();
    write_sample_project(temp.path()).expect("Failed to write sample project");
    temp
}
