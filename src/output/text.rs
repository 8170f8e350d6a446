//! Indented plain-text output

use crate::tree::Node;

use super::Renderer;

/// Two spaces per level.
const INDENT: &str = "  ";

/// One line per node, depth-first pre-order.
///
/// The root line shows the input path; every other line shows the base name.
/// Directories get a trailing `/`, symlinks get `* (<target>)`.
pub struct TextRenderer;

impl TextRenderer {
    fn write_node(node: &Node, depth: usize, output: &mut String) {
        output.push_str(&INDENT.repeat(depth));
        output.push_str(&node.display_name(depth));
        output.push_str(&suffix(node));
        output.push('\n');

        for child in &node.children {
            Self::write_node(child, depth + 1, output);
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, root: &Node) -> String {
        let mut output = String::new();
        Self::write_node(root, 0, &mut output);
        output
    }
}

fn suffix(node: &Node) -> String {
    if node.is_symlink {
        let target = node
            .link_target
            .as_ref()
            .map(|t| t.display().to_string())
            .unwrap_or_default();
        format!("* ({})", target)
    } else if node.is_directory {
        "/".to_string()
    } else {
        String::new()
    }
}
