//! Styled terminal rendering.
//!
//! Maps blocks and runs onto terminal text attributes via crossterm:
//! - bold runs: bold
//! - italic runs: italic
//! - code runs and code blocks: dim
//! - headings: bold + underlined on top of the run styles
//! - blockquotes: `│ ` border, italic on top of the run styles

use chatmark_core::{Block, InlineRun, RunStyle};
use crossterm::style::{StyledContent, Stylize};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for CSI escape sequences (SGR and friends).
static ANSI_ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[a-zA-Z]").unwrap());

/// Bullet glyph for list items.
pub const BULLET: &str = "•";

/// Quote border.
pub const QUOTE_BORDER: &str = "│ ";

/// Indentation for code block lines.
pub const CODE_INDENT: &str = "    ";

/// Remove all ANSI escape sequences from text.
///
/// # Example
///
/// ```
/// use chatmark_render::ansi::visible;
/// assert_eq!(visible("\x1b[1mBold\x1b[22m text"), "Bold text");
/// ```
pub fn visible(text: &str) -> String {
    ANSI_ESCAPE_RE.replace_all(text, "").to_string()
}

fn styled(run: &InlineRun) -> StyledContent<&str> {
    let text = run.text.as_str().stylize();
    match run.style {
        RunStyle::Plain => text,
        RunStyle::Bold => text.bold(),
        RunStyle::Italic => text.italic(),
        RunStyle::Code => text.dim(),
    }
}

/// Style a single run.
pub fn style_run(run: &InlineRun) -> String {
    match run.style {
        RunStyle::Plain => run.text.clone(),
        _ => styled(run).to_string(),
    }
}

fn style_runs(runs: &[InlineRun]) -> String {
    runs.iter().map(style_run).collect()
}

/// Render a block to styled lines.
///
/// `width` is the length of a divider rule.
pub fn render_block(block: &Block, width: usize) -> Vec<String> {
    match block {
        Block::Heading { level, runs } => {
            let marker = format!("{} ", "#".repeat(*level as usize));
            let mut line = marker.bold().underlined().to_string();
            for run in runs {
                line.push_str(&styled(run).bold().underlined().to_string());
            }
            vec![line]
        }
        Block::BulletItem { depth, runs } => {
            vec![format!(
                "{}{} {}",
                "  ".repeat(*depth),
                BULLET,
                style_runs(runs)
            )]
        }
        Block::NumberedItem { number, runs } => {
            vec![format!("{}. {}", number, style_runs(runs))]
        }
        Block::Paragraph { runs } => vec![style_runs(runs)],
        Block::Blockquote { runs } => {
            let mut line = QUOTE_BORDER.dim().to_string();
            for run in runs {
                line.push_str(&styled(run).italic().to_string());
            }
            vec![line]
        }
        Block::CodeBlock { raw } => raw
            .split('\n')
            .map(|line| format!("{}{}", CODE_INDENT, line.dim()))
            .collect(),
        Block::Divider => vec!["─".repeat(width).dim().to_string()],
        Block::BlankMarker => vec![String::new()],
    }
}
