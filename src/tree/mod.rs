//! Filesystem tree model and construction
//!
//! A tree is built in two steps: `read_node` captures one entry's metadata
//! (never following symlinks), then `expand` lists directories and attaches
//! their entries as children, optionally all the way down.

mod builder;
mod config;
mod node;
mod reader;

pub use builder::{build_tree, expand};
pub use config::BuildConfig;
pub use node::{Node, entry_name};
pub use reader::read_node;
