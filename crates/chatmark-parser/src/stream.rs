//! Accumulation of streamed text.
//!
//! [`StreamBuffer`] collects the chunks of a response as they arrive and
//! re-parses the whole accumulated text on every snapshot. It stores text
//! only; no parse state is carried from one snapshot to the next.

use crate::Parser;
use chatmark_core::Document;

/// Growing text of a streaming response.
///
/// # Example
///
/// ```
/// use chatmark_parser::{Block, StreamBuffer};
///
/// let mut stream = StreamBuffer::new();
/// stream.push("```\nlet x");
/// assert!(matches!(stream.snapshot().blocks(), [Block::CodeBlock { .. }]));
///
/// stream.push(" = 1;\n```\ndone");
/// assert_eq!(stream.snapshot().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreamBuffer {
    text: String,
    lines: usize,
    parser: Parser,
}

impl StreamBuffer {
    /// Create an empty buffer with a default parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer that parses with `parser`.
    pub fn with_parser(parser: Parser) -> Self {
        Self {
            text: String::new(),
            lines: 0,
            parser,
        }
    }

    /// Append a chunk of text exactly as received.
    pub fn push(&mut self, chunk: &str) {
        self.text.push_str(chunk);
    }

    /// Append a line, separating it from the previous line with `\n`.
    ///
    /// Lines are counted separately from raw chunks, so a leading empty
    /// line still yields a separator before the next one.
    pub fn push_line(&mut self, line: &str) {
        if self.lines > 0 || !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
        self.lines += 1;
    }

    /// Parse the full accumulated text.
    pub fn snapshot(&self) -> Document {
        self.parser.parse(&self.text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Drop all accumulated text, keeping the parser.
    pub fn clear(&mut self) {
        self.text.clear();
        self.lines = 0;
    }
}
