//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory for building fixture trees.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symlink at `path` pointing to `target`, verbatim.
    #[cfg(unix)]
    pub fn add_symlink(&self, path: &str, target: impl AsRef<Path>) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::os::unix::fs::symlink(target, &full_path).expect("Failed to create symlink");
        full_path
    }

    /// Names of the immediate entries of `path`, in the order the filesystem lists them.
    pub fn listing(&self, path: &str) -> Vec<String> {
        fs::read_dir(self.dir.path().join(path))
            .expect("Failed to read dir")
            .map(|entry| {
                entry
                    .expect("Failed to read dir entry")
                    .file_name()
                    .to_string_lossy()
                    .to_string()
            })
            .collect()
    }

    /// Populate a tree `width` entries wide and `depth` levels deep.
    ///
    /// Each level has `width` files plus one subdirectory leading to the next level.
    pub fn populate(&self, width: usize, depth: usize) {
        let mut prefix = String::new();
        for level in 0..depth {
            for i in 0..width {
                self.add_file(&format!("{}file_{}.txt", prefix, i), "content");
            }
            prefix.push_str(&format!("level_{}/", level));
            self.add_dir(&prefix);
        }
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
