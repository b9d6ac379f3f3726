//! Plain-text export.
//!
//! Strips styling from a parsed document. Delimiters consumed by the
//! tokenizer are gone; delimiters that never matched stay as literal text.

use chatmark_core::{Block, Document};

/// Bullet glyph used for exported bullet items.
const BULLET: &str = "•";

/// Render a document as plain text, one line per block.
///
/// # Example
///
/// ```
/// use chatmark_parser::{parse, to_plain_text};
///
/// let doc = parse("## **Plan**\n1. `cargo build`\n- ship _it_");
/// assert_eq!(to_plain_text(&doc), "Plan\n1. cargo build\n• ship it");
/// ```
pub fn to_plain_text(document: &Document) -> String {
    document
        .iter()
        .map(block_to_plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_to_plain_text(block: &Block) -> String {
    match block {
        Block::Heading { .. } | Block::Paragraph { .. } => block.plain_text(),
        Block::BulletItem { depth, .. } => {
            format!("{}{} {}", "  ".repeat(*depth), BULLET, block.plain_text())
        }
        Block::NumberedItem { number, .. } => format!("{}. {}", number, block.plain_text()),
        Block::Blockquote { .. } => format!("> {}", block.plain_text()),
        Block::CodeBlock { raw } => raw.clone(),
        Block::Divider => "---".to_string(),
        Block::BlankMarker => String::new(),
    }
}
