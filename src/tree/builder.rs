//! Populates directory nodes with their entries

use std::fs;

use tracing::debug;

use crate::error::{ListError, Result};

use super::config::BuildConfig;
use super::node::Node;
use super::reader::read_node;

/// Read the configured root and expand it.
///
/// Any unreadable entry aborts the whole build; partial trees are never returned.
pub fn build_tree(config: &BuildConfig) -> Result<Node> {
    let mut root = read_node(&config.path)?;
    expand(&mut root, config.recursive)?;
    Ok(root)
}

/// Attach the immediate entries of `node` as children, in listing order.
///
/// Leaves (files and any symlink) are left untouched. With `recursive`,
/// every child directory is expanded in turn, depth-first, after the
/// whole level has been read.
pub fn expand(node: &mut Node, recursive: bool) -> Result<()> {
    if node.is_leaf() {
        return Ok(());
    }

    let dir_error = |source: std::io::Error| ListError::DirectoryUnreadable {
        path: node.path.clone(),
        source,
    };

    debug!(path = %node.path.display(), "reading directory");
    let entries = fs::read_dir(&node.path).map_err(dir_error)?;

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(dir_error)?;
        children.push(read_node(&node.path.join(entry.file_name()))?);
    }
    debug!(path = %node.path.display(), entries = children.len(), "read directory");

    if recursive {
        for child in &mut children {
            expand(child, recursive)?;
        }
    }

    node.children = children;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::test_utils::TestDir;

    fn names(node: &Node) -> Vec<String> {
        node.children.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_single_level_matches_listing() {
        let dir = TestDir::new();
        dir.add_file("f.txt", "0123456789");
        dir.add_file("b/g.txt", "g");
        dir.add_file("c.txt", "c");

        let root = build_tree(&BuildConfig::new(dir.path(), false)).unwrap();

        assert_eq!(names(&root), dir.listing(""));
        assert!(root.children.iter().all(|c| c.children.is_empty()));
        assert_eq!(root.depth(), 1);
    }

    #[test]
    fn test_recursive_reaches_full_depth() {
        let dir = TestDir::new();
        dir.add_file("a/b/c/deep.txt", "x");
        dir.add_file("top.txt", "x");

        let root = build_tree(&BuildConfig::new(dir.path(), true)).unwrap();
        assert_eq!(root.depth(), 4);

        let a = root.children.iter().find(|c| c.name == "a").unwrap();
        let b = &a.children[0];
        let c = &b.children[0];
        assert_eq!(b.name, "b");
        assert_eq!(c.name, "c");
        assert_eq!(names(c), vec!["deep.txt"]);
    }

    #[test]
    fn test_children_paths_join_parent() {
        let dir = TestDir::new();
        dir.add_file("sub/inner.txt", "x");

        let root = build_tree(&BuildConfig::new(dir.path(), true)).unwrap();
        let sub = &root.children[0];
        assert_eq!(sub.path, dir.path().join("sub"));
        assert_eq!(sub.children[0].path, dir.path().join("sub").join("inner.txt"));
    }

    #[test]
    fn test_empty_directory_has_empty_children() {
        let dir = TestDir::new();
        dir.add_dir("empty");

        let root = build_tree(&BuildConfig::new(dir.path(), true)).unwrap();
        let empty = &root.children[0];
        assert!(empty.is_directory);
        assert!(empty.children.is_empty());
    }

    #[test]
    fn test_file_root_is_leaf() {
        let dir = TestDir::new();
        let path = dir.add_file("only.txt", "x");

        let root = build_tree(&BuildConfig::new(&path, true)).unwrap();
        assert!(root.children.is_empty());
        assert_eq!(root.name, "only.txt");
    }

    #[test]
    fn test_missing_root_fails() {
        let config = BuildConfig::new(PathBuf::from("/definitely/not/here"), false);
        assert!(matches!(
            build_tree(&config),
            Err(ListError::PathUnreadable { .. })
        ));
    }

    #[test]
    fn test_expand_leaf_is_noop() {
        let dir = TestDir::new();
        let path = dir.add_file("f.txt", "x");
        let mut node = read_node(&path).unwrap();

        expand(&mut node, true).unwrap();
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_unlistable_directory_aborts() {
        let dir = TestDir::new();
        let path = dir.add_file("not_a_dir", "x");
        let mut node = read_node(&path).unwrap();
        node.is_directory = true;

        match expand(&mut node, true) {
            Err(ListError::DirectoryUnreadable { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected DirectoryUnreadable, got {:?}", other),
        }
        assert!(node.children.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_never_expanded() {
        let dir = TestDir::new();
        dir.add_file("realdir/file.txt", "x");
        dir.add_symlink("linkdir", "realdir");

        let root = build_tree(&BuildConfig::new(dir.path(), true)).unwrap();
        let link = root.children.iter().find(|c| c.name == "linkdir").unwrap();
        assert!(link.is_symlink);
        assert!(link.children.is_empty());
        let expected = std::path::absolute(dir.path().join("realdir")).unwrap();
        assert_eq!(link.link_target, Some(expected));

        let real = root.children.iter().find(|c| c.name == "realdir").unwrap();
        assert_eq!(names(real), vec!["file.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_parent_terminates() {
        let dir = TestDir::new();
        dir.add_file("subdir/file.txt", "x");
        dir.add_symlink("subdir/parent", "..");

        let root = build_tree(&BuildConfig::new(dir.path(), true)).unwrap();
        assert_eq!(root.depth(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_aborts() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = TestDir::new();
        let locked = dir.add_dir("locked");
        dir.add_file("locked/secret.txt", "x");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits, so only check when the lock holds.
        let locked_out = fs::read_dir(&locked).is_err();
        let result = build_tree(&BuildConfig::new(dir.path(), true));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if locked_out {
            match result {
                Err(ListError::DirectoryUnreadable { path, .. }) => assert_eq!(path, locked),
                other => panic!("expected DirectoryUnreadable, got {:?}", other),
            }
        }
    }
}
