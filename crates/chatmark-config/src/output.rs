//! Output configuration.
//!
//! Controls how the CLI writes parsed documents.

use chatmark_core::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Format used when none is given on the command line.
    /// Default: tree
    #[serde(default)]
    pub format: OutputFormat,

    /// Print a separator line between streamed snapshots.
    /// Default: true
    #[serde(default = "default_true")]
    pub stream_separator: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Tree,
            stream_separator: true,
        }
    }
}

impl OutputConfig {
    /// Merge another OutputConfig into this one.
    pub fn merge(&mut self, other: &OutputConfig) {
        self.format = other.format;
        self.stream_separator = other.stream_separator;
    }
}

fn default_true() -> bool {
    true
}
