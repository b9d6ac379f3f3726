//! Chatmark Parser
//!
//! A markdown-subset parser for the streamed output of a generative model.
//! The input is usually a prefix of a longer response that is still being
//! produced, so parsing never fails: an unterminated code fence runs to the
//! end of the text and an unclosed style marker is shown literally.
//!
//! # Overview
//!
//! Parsing is two pure stages:
//! - [`segment`] groups lines into typed [`Block`]s
//! - [`tokenize`] splits a block's text into styled [`InlineRun`]s
//!
//! Neither stage keeps state between calls. A streaming consumer simply
//! re-parses the full text on every update, see [`StreamBuffer`].
//!
//! # Example
//!
//! ```
//! use chatmark_parser::{parse, Block};
//!
//! let doc = parse("# Hello\n\nSome **bold** text");
//!
//! for block in &doc {
//!     match block {
//!         Block::Heading { level, runs } => {
//!             println!("H{}: {:?}", level, runs);
//!         }
//!         _ => {}
//!     }
//! }
//! ```

pub mod export;
pub mod inline;
pub mod segment;
pub mod stream;

pub use chatmark_core::{Block, Document, InlineRun, RunStyle};
pub use export::to_plain_text;
pub use inline::{tokenize, tokenize_with, InlineOptions};
pub use segment::{segment, segment_with};
pub use stream::StreamBuffer;

use log::trace;

/// Options for a full parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Options passed to the inline tokenizer for every text block.
    pub inline: InlineOptions,
}

/// Markdown-subset parser.
///
/// Holds only options; [`Parser::parse`] is a pure function of the options
/// and the input, so one parser can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Enable or disable merging of adjacent plain runs.
    pub fn set_coalesce_plain(&mut self, enabled: bool) {
        self.options.inline.coalesce_plain = enabled;
    }

    /// Parse a complete (or partially streamed) text into a document.
    pub fn parse(&self, text: &str) -> Document {
        let blocks = segment_with(text, &self.options.inline);
        trace!(
            "parsed {} bytes into {} blocks",
            text.len(),
            blocks.len()
        );
        Document::new(blocks)
    }
}

/// Parse text with default options.
pub fn parse(text: &str) -> Document {
    Parser::new().parse(text)
}

// =============================================================================
// Tests
// =============================================================================
