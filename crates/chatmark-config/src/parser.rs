//! Parser configuration.
//!
//! This module contains the `ParserConfig` struct which holds the
//! settings handed to the markdown parser.

use serde::{Deserialize, Serialize};

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParserConfig {
    /// Merge adjacent plain runs into a single run.
    /// Default: true
    #[serde(default = "default_true")]
    pub coalesce_plain: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            coalesce_plain: true,
        }
    }
}

impl ParserConfig {
    /// Merge another ParserConfig into this one.
    ///
    /// TOML has no "unset" state for these fields, so every value
    /// is copied from `other`.
    pub fn merge(&mut self, other: &ParserConfig) {
        self.coalesce_plain = other.coalesce_plain;
    }
}

fn default_true() -> bool {
    true
}
