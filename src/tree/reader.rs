//! Reads a single filesystem entry into a `Node` without touching its children

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use path_clean::PathClean;

use crate::error::{ListError, Result};

use super::node::{Node, entry_name};

/// Read metadata for `path` without following symlinks.
///
/// Symlinks are classified as such, with their target resolved to an
/// absolute path. The returned node has no children.
pub fn read_node(path: &Path) -> Result<Node> {
    let meta = fs::symlink_metadata(path).map_err(|source| ListError::PathUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let is_symlink = meta.file_type().is_symlink();
    let link_target = if is_symlink {
        Some(resolve_link(path)?)
    } else {
        None
    };

    let modified_time = meta
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

    Ok(Node {
        name: entry_name(path),
        path: path.to_path_buf(),
        modified_time,
        size: meta.len(),
        is_directory: meta.is_dir(),
        is_symlink,
        link_target,
        children: Vec::new(),
    })
}

/// Absolute, lexically cleaned target of the symlink at `path`.
///
/// Relative targets are taken relative to the directory holding the link.
fn resolve_link(path: &Path) -> Result<PathBuf> {
    let link_error = |source: std::io::Error| ListError::LinkUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let target = fs::read_link(path).map_err(link_error)?;
    let joined = match path.parent() {
        Some(parent) if target.is_relative() => parent.join(&target),
        _ => target,
    };
    let absolute = std::path::absolute(&joined).map_err(link_error)?;
    Ok(absolute.clean())
}
