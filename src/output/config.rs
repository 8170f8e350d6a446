//! Output format selection

use std::fmt;
use std::str::FromStr;

use crate::error::ListError;
use crate::tree::Node;

use super::Renderer;
use super::json::JsonRenderer;
use super::text::TextRenderer;
use super::yaml::YamlRenderer;

/// Which renderer to use for the built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const VARIANTS: [&'static str; 3] = ["text", "json", "yaml"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Render `root` with the renderer for this format.
    pub fn render(&self, root: &Node) -> String {
        match self {
            OutputFormat::Text => TextRenderer.render(root),
            OutputFormat::Json => JsonRenderer.render(root),
            OutputFormat::Yaml => YamlRenderer.render(root),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(ListError::InvalidArgument(format!(
                "invalid output format '{}' (expected one of: {})",
                other,
                Self::VARIANTS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
