//! Atomic file writes for generator documents and generated shaders

use crate::error::{Result, ShadergenError};
use std::path::Path;

/// Write `content` to `path` atomically
///
/// 1. Create the parent directory if needed
/// 2. Write to a temporary file in the same directory (using tempfile crate)
/// 3. Fsync the temporary file
/// 4. Atomic persist (cross-platform, Windows compatible)
/// 5. Fsync the parent directory (Unix only)
///
/// Readers never observe a partially written file.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let parent = ensure_parent_dir(path)?;
    let failed = |reason: String| ShadergenError::OutputWriteFailed {
        path: path.to_path_buf(),
        reason,
    };

    let mut temp_file = NamedTempFile::new_in(parent)
        .map_err(|e| failed(format!("Failed to create temp file: {}", e)))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| failed(format!("Failed to write temp file: {}", e)))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| failed(format!("Failed to sync temp file: {}", e)))?;

    temp_file
        .persist(path)
        .map_err(|e| failed(format!("Failed to persist temp file: {}", e)))?;

    #[cfg(unix)]
    {
        let parent_file = std::fs::File::open(parent)
            .map_err(|e| failed(format!("Failed to open parent dir: {}", e)))?;
        parent_file
            .sync_all()
            .map_err(|e| failed(format!("Failed to sync parent dir: {}", e)))?;
    }

    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Ensure parent directory exists and return it
fn ensure_parent_dir(path: &Path) -> Result<&Path> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| ShadergenError::OutputWriteFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to create parent dir: {}", e),
    })?;
    Ok(parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadergen_testkit::temp_dir_in_workspace;

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("nested/dir/out.shader");

        atomic_write(&path, "Shader \"X\" {}").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Shader \"X\" {}");
    }

    #[test]
    fn test_atomic_write_replaces_existing_file() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("out.shader");
        std::fs::write(&path, "old content that is longer").unwrap();

        atomic_write(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("out.shader");

        atomic_write(&path, "a").unwrap();
        atomic_write(&path, "b").unwrap();

        let entries: Vec<_> = std::fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
