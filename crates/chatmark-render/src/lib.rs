//! Chatmark Render
//!
//! Writers that turn a parsed [`Document`] into output. The parser itself
//! has no opinion on presentation; these are the consumers the CLI uses.
//!
//! # Formats
//!
//! - **tree** - one outline line per block, runs shown as `style("text")`
//! - **json** - the document model serialized with serde
//! - **plain** - styling stripped, see [`chatmark_parser::to_plain_text`]
//! - **ansi** - styled terminal text
//!
//! # Example
//!
//! ```
//! use chatmark_core::OutputFormat;
//! use chatmark_parser::parse;
//! use chatmark_render::Renderer;
//!
//! let mut output = Vec::new();
//! let mut renderer = Renderer::new(&mut output, 80);
//! renderer.render(&parse("# Hello"), OutputFormat::Tree).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "heading(1) plain(\"Hello\")\n");
//! ```

pub mod ansi;
pub mod tree;

pub use ansi::{render_block, style_run, visible};
pub use tree::{format_block, format_run};

use chatmark_core::{ChatmarkError, Document, OutputFormat, Result};
use log::trace;
use std::io::Write;

/// Document writer.
pub struct Renderer<W: Write> {
    /// Output writer
    writer: W,
    /// Output width, used for rules
    width: usize,
    /// Emit single-line JSON instead of pretty-printed
    compact_json: bool,
}

impl<W: Write> Renderer<W> {
    /// Create a new renderer.
    pub fn new(writer: W, width: usize) -> Self {
        Self {
            writer,
            width,
            compact_json: false,
        }
    }

    /// Emit JSON on a single line (one document per line).
    pub fn set_compact_json(&mut self, enabled: bool) {
        self.compact_json = enabled;
    }

    /// Get the current width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write one document in the given format.
    pub fn render(&mut self, document: &Document, format: OutputFormat) -> Result<()> {
        trace!("rendering {} blocks as {}", document.len(), format);
        match format {
            OutputFormat::Tree => self.render_tree(document),
            OutputFormat::Json => self.render_json(document),
            OutputFormat::Plain => self.render_plain(document),
            OutputFormat::Ansi => self.render_ansi(document),
        }
    }

    pub fn render_tree(&mut self, document: &Document) -> Result<()> {
        for block in document {
            writeln!(self.writer, "{}", format_block(block))?;
        }
        Ok(())
    }

    pub fn render_json(&mut self, document: &Document) -> Result<()> {
        let json = if self.compact_json {
            serde_json::to_string(document)
        } else {
            serde_json::to_string_pretty(document)
        }
        .map_err(|e| ChatmarkError::Output(format!("JSON serialization failed: {}", e)))?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    pub fn render_plain(&mut self, document: &Document) -> Result<()> {
        if document.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", chatmark_parser::to_plain_text(document))?;
        Ok(())
    }

    pub fn render_ansi(&mut self, document: &Document) -> Result<()> {
        for block in document {
            for line in render_block(block, self.width) {
                writeln!(self.writer, "{}", line)?;
            }
        }
        Ok(())
    }

    /// Write the rule that separates streamed snapshots.
    ///
    /// JSON output has one document per line and needs no separator.
    pub fn render_separator(&mut self, format: OutputFormat) -> Result<()> {
        if format != OutputFormat::Json {
            writeln!(self.writer, "{}", "─".repeat(self.width))?;
        }
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
