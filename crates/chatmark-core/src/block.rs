//! Block and inline run types.
//!
//! A parsed document is an ordered sequence of [`Block`]s. Every block
//! that carries text (everything except code, dividers and blank markers)
//! holds its content as a sequence of styled [`InlineRun`]s.

use serde::{Deserialize, Serialize};

/// Rendering style of an inline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStyle {
    /// Unstyled text
    Plain,
    /// `**text**` or `__text__`
    Bold,
    /// `*text*` or `_text_`
    Italic,
    /// `` `text` ``
    Code,
}

impl std::fmt::Display for RunStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStyle::Plain => write!(f, "plain"),
            RunStyle::Bold => write!(f, "bold"),
            RunStyle::Italic => write!(f, "italic"),
            RunStyle::Code => write!(f, "code"),
        }
    }
}

/// One contiguous styled span of text within a block.
///
/// The delimiters that produced the run have been consumed; the text may
/// still contain delimiters of other kinds that did not match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineRun {
    /// The visible text of the run
    pub text: String,
    /// How the text is styled
    pub style: RunStyle,
}

impl InlineRun {
    /// Create a run with the given style.
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Plain)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Italic)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Code)
    }

    /// Check if this run is unstyled.
    pub fn is_plain(&self) -> bool {
        self.style == RunStyle::Plain
    }
}

/// One structural unit of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// `#`, `##` or `###` heading; level is always 1..=3
    Heading { level: u8, runs: Vec<InlineRun> },
    /// `-`, `*` or `•` list item; depth is a nesting hint (leading spaces / 2)
    BulletItem { depth: usize, runs: Vec<InlineRun> },
    /// `N.` list item
    NumberedItem { number: i64, runs: Vec<InlineRun> },
    /// One or more consecutive lines of running text
    Paragraph { runs: Vec<InlineRun> },
    /// Fenced code, lines joined with `\n`, never tokenized
    CodeBlock { raw: String },
    /// `> ` quoted line
    Blockquote { runs: Vec<InlineRun> },
    /// `---`, `***` or `___`
    Divider,
    /// A collapsed run of consecutive empty lines
    BlankMarker,
}

impl Block {
    /// Short lowercase name of the block kind.
    ///
    /// Matches the tag the block serializes under.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::BulletItem { .. } => "bullet_item",
            Block::NumberedItem { .. } => "numbered_item",
            Block::Paragraph { .. } => "paragraph",
            Block::CodeBlock { .. } => "code_block",
            Block::Blockquote { .. } => "blockquote",
            Block::Divider => "divider",
            Block::BlankMarker => "blank_marker",
        }
    }

    /// The inline runs of a text-bearing block.
    ///
    /// Returns `None` for code blocks, dividers and blank markers, which
    /// are never tokenized.
    pub fn runs(&self) -> Option<&[InlineRun]> {
        match self {
            Block::Heading { runs, .. }
            | Block::BulletItem { runs, .. }
            | Block::NumberedItem { runs, .. }
            | Block::Paragraph { runs }
            | Block::Blockquote { runs } => Some(runs),
            Block::CodeBlock { .. } | Block::Divider | Block::BlankMarker => None,
        }
    }

    /// The block's text with all styling removed.
    ///
    /// Code blocks return their raw content; dividers and blank markers
    /// return an empty string.
    pub fn plain_text(&self) -> String {
        match self {
            Block::CodeBlock { raw } => raw.clone(),
            other => other
                .runs()
                .map(|runs| runs.iter().map(|r| r.text.as_str()).collect())
                .unwrap_or_default(),
        }
    }

    /// Check if this block carries inline runs.
    pub fn is_text(&self) -> bool {
        self.runs().is_some()
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}
