//! Configuration types for tree building

use std::path::PathBuf;

/// What to list and how deep to go.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Root entry. Shown verbatim as the first line of text output.
    pub path: PathBuf,
    /// Descend into every real subdirectory instead of listing one level.
    pub recursive: bool,
}

impl BuildConfig {
    pub fn new(path: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
        }
    }
}
