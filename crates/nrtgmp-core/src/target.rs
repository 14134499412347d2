//! Project target resolution and precondition checks

use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};

/// The destination directory of a scaffolding run
#[derive(Debug, Clone)]
pub struct ProjectTarget {
    name: String,
    path: PathBuf,
}

impl ProjectTarget {
    /// Resolve a project name against the current working directory and
    /// validate the preconditions: non-empty name, target must not exist.
    ///
    /// Runs before any prompt or side effect.
    pub fn resolve(name: &str) -> Result<Self, ScaffoldError> {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve_in(name, &current_dir)
    }

    /// Same as [`resolve`](Self::resolve) with an explicit base directory.
    pub fn resolve_in(name: &str, base: &Path) -> Result<Self, ScaffoldError> {
        if name.trim().is_empty() {
            return Err(ScaffoldError::EmptyName);
        }

        let raw = PathBuf::from(name);
        let path = if raw.is_absolute() { raw } else { base.join(name) };

        if path.exists() {
            return Err(ScaffoldError::TargetExists(path));
        }

        Ok(Self {
            name: name.to_string(),
            path,
        })
    }

    /// The name as supplied on the command line
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the directory to create
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the target directory, used as the generated project name
    pub fn base_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectTarget::resolve_in("", dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::EmptyName));
    }

    #[test]
    fn test_existing_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("demo")).unwrap();
        let err = ProjectTarget::resolve_in("demo", dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::TargetExists(_)));
    }

    #[test]
    fn test_relative_name_joined_to_base() {
        let dir = tempfile::tempdir().unwrap();
        let target = ProjectTarget::resolve_in("demo", dir.path()).unwrap();
        assert_eq!(target.path(), dir.path().join("demo"));
        assert_eq!(target.base_name(), "demo");
    }

    #[test]
    fn test_nested_name_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let target = ProjectTarget::resolve_in("apps/demo", dir.path()).unwrap();
        assert_eq!(target.base_name(), "demo");
    }
}
