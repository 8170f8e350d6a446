//! Tree rendering
//!
//! Every output format is a `Renderer`: a pure function from a built tree to
//! a string. Renderers never mutate the tree and never print.
//!
//! The formats differ in one deliberate way: text output starts with the
//! root itself as a header line, while the structured formats (JSON, YAML)
//! serialize only the root's children.
//!
//! # Module Structure
//!
//! - `config` - Output format selection
//! - `text` - Indented plain text
//! - `json` - JSON output
//! - `yaml` - YAML output

mod config;
mod json;
mod text;
mod yaml;

use std::fmt::Display;

use tracing::warn;

use crate::error::ListError;
use crate::tree::Node;

// Re-export public types
pub use config::OutputFormat;
pub use json::JsonRenderer;
pub use text::TextRenderer;
pub use yaml::YamlRenderer;

/// Turns a fully built tree into printable text.
pub trait Renderer {
    fn render(&self, root: &Node) -> String;
}

/// Output written so far, logging a warning if serialization stopped early.
fn best_effort<E: Display>(format: &'static str, buf: Vec<u8>, result: Result<(), E>) -> String {
    if let Err(e) = result {
        let err = ListError::SerializationFailure {
            format,
            message: e.to_string(),
        };
        warn!("{}", err);
    }
    String::from_utf8_lossy(&buf).into_owned()
}
