//! Outline rendering.
//!
//! One line per block: the block kind with its attributes, followed by
//! each run as `style("text")`. Text is quoted with Rust string escaping
//! so line breaks inside code blocks stay on one line.

use chatmark_core::{Block, InlineRun};

/// Format a run as `style("text")`.
pub fn format_run(run: &InlineRun) -> String {
    format!("{}({:?})", run.style, run.text)
}

/// Format a block as a single outline line.
pub fn format_block(block: &Block) -> String {
    let head = match block {
        Block::Heading { level, .. } => format!("heading({})", level),
        Block::BulletItem { depth, .. } => format!("bullet_item(depth={})", depth),
        Block::NumberedItem { number, .. } => format!("numbered_item({})", number),
        Block::CodeBlock { raw } => return format!("code_block {:?}", raw),
        other => other.kind().to_string(),
    };

    match block.runs() {
        Some(runs) if !runs.is_empty() => {
            let runs: Vec<String> = runs.iter().map(format_run).collect();
            format!("{} {}", head, runs.join(" "))
        }
        _ => head,
    }
}
