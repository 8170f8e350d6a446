//! YAML output formatting

use crate::tree::Node;

use super::{Renderer, best_effort};

/// YAML sequence of the root's children.
pub struct YamlRenderer;

impl Renderer for YamlRenderer {
    fn render(&self, root: &Node) -> String {
        let mut buf = Vec::new();
        let result = serde_yaml::to_writer(&mut buf, &root.children);
        best_effort("YAML", buf, result)
    }
}
