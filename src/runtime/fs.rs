//! File system operations backing [`RealRuntime`].

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn read_to_string_impl(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn create_dir_all_impl(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn remove_file_impl(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_file_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b");

        runtime.create_dir_all(&nested).unwrap();
        assert!(runtime.exists(&nested));

        let file_path = nested.join("index.html");
        runtime.write(&file_path, b"<html></html>").unwrap();
        assert!(runtime.exists(&file_path));
        assert_eq!(runtime.read_to_string(&file_path).unwrap(), "<html></html>");

        runtime.remove_file(&file_path).unwrap();
        assert!(!runtime.exists(&file_path));
        assert!(runtime.remove_file(&file_path).is_err());
    }

    #[test]
    fn test_real_runtime_read_missing_file_names_path() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let err = runtime.read_to_string(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
        assert!(!runtime.exists(&missing));
    }

    #[test]
    fn test_real_runtime_write_into_missing_dir_fails() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope/file.txt");

        assert!(runtime.write(&path, b"x").is_err());
    }
}
