//! Filelister - list a directory hierarchy as indented text, JSON, or YAML

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ListError, Result};
pub use logging::{LogLevel, init_logging};
pub use output::{JsonRenderer, OutputFormat, Renderer, TextRenderer, YamlRenderer};
pub use tree::{BuildConfig, Node, build_tree, expand, read_node};
