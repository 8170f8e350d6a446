//! In-memory node type shared by the builder and the renderers

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One filesystem entry: a file, a directory, or a symlink.
///
/// Parents own their children directly. Only the builder fills in
/// `children`; a node fresh from the reader never has any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    /// Path the node was read from. Used for recursion and link resolution only.
    #[serde(skip)]
    pub path: PathBuf,
    pub modified_time: DateTime<Utc>,
    pub size: u64,
    pub is_directory: bool,
    pub is_symlink: bool,
    /// Absolute path the symlink points to. Only set for symlinks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_target: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Symlinks and non-directories never get children.
    pub fn is_leaf(&self) -> bool {
        self.is_symlink || !self.is_directory
    }

    /// Name shown by the text renderer: the input path for the root, the base name below it.
    pub fn display_name(&self, depth: usize) -> String {
        if depth == 0 {
            self.path.display().to_string()
        } else {
            self.name.clone()
        }
    }

    /// Number of levels below this node (0 for a node without children).
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

/// Base name of a path, or the path itself when it has no final component (`/`, `..`).
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
