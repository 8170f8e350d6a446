//! JSON output formatting

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::tree::Node;

use super::{Renderer, best_effort};

/// Pretty-printed JSON array of the root's children, four-space indented.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, root: &Node) -> String {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        let result = root.children.serialize(&mut serializer);
        best_effort("JSON", buf, result)
    }
}
