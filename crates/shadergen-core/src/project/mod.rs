//! Project detection and layout
//!
//! A project is a directory containing `shadergen.toml`. Templates live in
//! the configured templates directory; generator documents (`*.gen.toml`)
//! may live anywhere else below the root.

use crate::catalog::TemplateCatalog;
use crate::config::{Config, CONFIG_FILE, GENERATOR_SUFFIX};
use crate::error::Result;
use crate::path::join_relative;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Represents a shadergen project
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Find project root by searching for shadergen.toml in `start` and its parents
    ///
    /// Returns `Ok(None)` when no ancestor contains a config file.
    pub fn find_root(start: &Path) -> Result<Option<Self>> {
        for dir in start.ancestors() {
            if dir.join(CONFIG_FILE).is_file() {
                log::debug!("found project root at {}", dir.display());
                return Self::load(dir).map(Some);
            }
        }
        Ok(None)
    }

    /// Load the project rooted at `root`
    pub fn load(root: &Path) -> Result<Self> {
        let config = Config::from_file(root.join(CONFIG_FILE))?;
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Create `shadergen.toml` and an empty templates directory in `root`
    pub fn init(root: &Path, name: &str) -> Result<Self> {
        let config = Config::new(name);
        std::fs::create_dir_all(root)?;
        config.to_file(root.join(CONFIG_FILE))?;

        let project = Self {
            root: root.to_path_buf(),
            config,
        };
        std::fs::create_dir_all(project.templates_dir()?)?;
        Ok(project)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Absolute templates directory; must stay inside the project
    pub fn templates_dir(&self) -> Result<PathBuf> {
        join_relative(&self.root, Path::new(&self.config.templates.dir))
    }

    /// Load the template catalog from the templates directory
    pub fn catalog(&self) -> Result<TemplateCatalog> {
        TemplateCatalog::load(&self.templates_dir()?, &self.config.templates.extension)
    }

    /// Every generator document below the root, sorted by path
    ///
    /// Hidden directories and the templates directory are skipped.
    pub fn generators(&self) -> Result<Vec<PathBuf>> {
        let templates_dir = self.templates_dir()?;
        let mut found = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry, &templates_dir));

        for entry in walker {
            let entry = entry.map_err(|e| {
                std::io::Error::other(format!("Failed to walk {}: {}", self.root.display(), e))
            })?;
            if entry.file_type().is_file() && is_generator_file(entry.path()) {
                found.push(entry.into_path());
            }
        }

        found.sort();
        Ok(found)
    }
}

/// True for a path whose file name ends with `.gen.toml`
pub fn is_generator_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.len() > GENERATOR_SUFFIX.len() && name.ends_with(GENERATOR_SUFFIX))
}

fn is_skipped_dir(entry: &DirEntry, templates_dir: &Path) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let hidden = entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'));
    hidden || entry.path() == templates_dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadergen_testkit::temp_dir_in_workspace;
    use std::fs;

    #[test]
    fn test_find_root_walks_up() {
        let temp = temp_dir_in_workspace();
        Project::init(temp.path(), "demo").unwrap();
        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let project = Project::find_root(&nested).unwrap().unwrap();
        assert_eq!(project.root, temp.path());
        assert_eq!(project.config.project.name, "demo");
    }

    #[test]
    fn test_init_creates_templates_dir() {
        let temp = temp_dir_in_workspace();
        let project = Project::init(temp.path(), "demo").unwrap();
        assert!(project.templates_dir().unwrap().is_dir());
        assert!(project.config_path().is_file());
    }

    #[test]
    fn test_generators_sorted_and_filtered() {
        let temp = temp_dir_in_workspace();
        let project = Project::init(temp.path(), "demo").unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("shaders/sub")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("shaders/b.gen.toml"), "").unwrap();
        fs::write(root.join("shaders/sub/a.gen.toml"), "").unwrap();
        fs::write(root.join("shaders/notes.toml"), "").unwrap();
        fs::write(root.join(".hidden/x.gen.toml"), "").unwrap();
        fs::write(root.join("templates/t.gen.toml"), "").unwrap();
        fs::write(root.join("top.gen.toml"), "").unwrap();

        let generators = project.generators().unwrap();
        assert_eq!(
            generators,
            vec![
                root.join("shaders/b.gen.toml"),
                root.join("shaders/sub/a.gen.toml"),
                root.join("top.gen.toml"),
            ]
        );
    }

    #[test]
    fn test_is_generator_file() {
        assert!(is_generator_file(Path::new("dir/Sphere.gen.toml")));
        assert!(!is_generator_file(Path::new(".gen.toml")));
        assert!(!is_generator_file(Path::new("Sphere.toml")));
    }

    #[test]
    fn test_templates_dir_escape_rejected() {
        let temp = temp_dir_in_workspace();
        let mut project = Project::init(temp.path(), "demo").unwrap();
        project.config.templates.dir = "../elsewhere".to_string();
        assert!(project.templates_dir().is_err());
    }
}
