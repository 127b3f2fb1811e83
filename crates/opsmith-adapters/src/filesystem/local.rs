//! Local filesystem adapter using std::fs.

use std::path::Path;

use opsmith_core::scaffold::{Filesystem, ScaffoldError};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), ScaffoldError> {
        std::fs::create_dir_all(path).map_err(|e| ScaffoldError::Filesystem {
            action: "create directory",
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), ScaffoldError> {
        std::fs::write(path, content).map_err(|e| ScaffoldError::Filesystem {
            action: "write file",
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reports_existence() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("a").join("b");
        fs.create_dir_all(&nested).unwrap();

        let file = nested.join("out.yaml");
        assert!(!fs.exists(&file));
        fs.write_file(&file, "a: 1\n").unwrap();
        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "a: 1\n");
    }

    #[test]
    fn write_into_missing_directory_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = dir.path().join("missing").join("out.yaml");
        let err = fs.write_file(&file, "a: 1\n").unwrap_err();
        assert!(err.to_string().contains("write file"));
        assert!(err.to_string().contains("out.yaml"));
    }
}
