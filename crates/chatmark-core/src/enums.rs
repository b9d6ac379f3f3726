//! Core enums shared between configuration and the CLI.

use serde::{Deserialize, Serialize};

/// How a parsed document is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per block with its styled runs
    #[default]
    Tree,
    /// The document model as JSON
    Json,
    /// Styling stripped back to plain text
    Plain,
    /// Styled terminal output
    Ansi,
}

impl OutputFormat {
    /// All formats, in the order they are listed to users.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Tree,
        OutputFormat::Json,
        OutputFormat::Plain,
        OutputFormat::Ansi,
    ];
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Ansi => write!(f, "ansi"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tree" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            "plain" | "text" => Ok(OutputFormat::Plain),
            "ansi" => Ok(OutputFormat::Ansi),
            other => Err(format!(
                "unknown output format '{}' (expected tree, json, plain or ansi)",
                other
            )),
        }
    }
}
