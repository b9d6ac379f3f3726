//! Block segmenter.
//!
//! Groups the lines of the input into typed blocks. Each line is matched
//! (trimmed) against the rules below, first match wins:
//!
//! 1. code fence (```` ``` ````), running to the closing fence or end of input
//! 2. divider (`---`, `***`, `___`)
//! 3. heading (`### `, `## `, `# `)
//! 4. blockquote (`> `)
//! 5. bullet item (`- `, `* `, `• `)
//! 6. numbered item (`N.`)
//! 7. blank line, collapsed with an adjacent blank marker
//! 8. paragraph, greedily joining the following plain lines
//!
//! Text-bearing blocks are handed to the inline tokenizer as they are built.

use crate::inline::{tokenize_with, InlineOptions};
use chatmark_core::Block;
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Line patterns
// =============================================================================

/// Code fence opener or closer; anything may follow the backticks.
const FENCE: &str = "```";

/// Horizontal divider, matched against the whole trimmed line.
static DIVIDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:---|\*\*\*|___)$").unwrap());

/// Heading with one to three hashes and a single separating space.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,3}) (.*)$").unwrap());

/// Blockquote marker.
const QUOTE_MARKER: &str = "> ";

/// Bullet markers, each including its trailing space.
const BULLET_MARKERS: [&str; 3] = ["- ", "* ", "• "];

// =============================================================================
// Line classification
// =============================================================================

/// What a single line is, before it is grouped into a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Fence,
    Divider,
    Heading { level: u8, content: &'a str },
    Quote { content: &'a str },
    Bullet { depth: usize, content: &'a str },
    Numbered { number: i64, content: &'a str },
    Blank,
    Text,
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.starts_with(FENCE) {
        return LineKind::Fence;
    }

    if DIVIDER_RE.is_match(trimmed) {
        return LineKind::Divider;
    }

    if let Some(caps) = HEADING_RE.captures(trimmed) {
        let level = caps.get(1).map(|m| m.as_str().len()).unwrap_or(1) as u8;
        let content = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        return LineKind::Heading { level, content };
    }

    if let Some(content) = trimmed.strip_prefix(QUOTE_MARKER) {
        return LineKind::Quote { content };
    }

    if let Some(content) = BULLET_MARKERS
        .iter()
        .find_map(|marker| trimmed.strip_prefix(marker))
    {
        let indent = line.chars().take_while(|&c| c == ' ').count();
        return LineKind::Bullet {
            depth: indent / 2,
            content,
        };
    }

    // Deliberately loose: "3.14 is pi" is item 3 with content "14 is pi".
    if let Some((head, tail)) = trimmed.split_once('.') {
        if let Ok(number) = head.parse::<i64>() {
            return LineKind::Numbered {
                number,
                content: tail.trim_start(),
            };
        }
    }

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    LineKind::Text
}

// =============================================================================
// Segmenter
// =============================================================================

/// Split text into lines, treating `\r\n` the same as `\n`.
///
/// Unlike [`str::lines`] a trailing empty line is kept.
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Segment text into blocks with default inline options.
///
/// # Example
///
/// ```
/// use chatmark_core::{Block, InlineRun};
/// use chatmark_parser::segment;
///
/// let blocks = segment("### Title\n3. go");
/// assert_eq!(
///     blocks,
///     vec![
///         Block::Heading { level: 3, runs: vec![InlineRun::plain("Title")] },
///         Block::NumberedItem { number: 3, runs: vec![InlineRun::plain("go")] },
///     ]
/// );
/// ```
pub fn segment(text: &str) -> Vec<Block> {
    segment_with(text, &InlineOptions::default())
}

/// Segment text into blocks, tokenizing block content with `options`.
///
/// Never fails. Every line of `text` is consumed by exactly one block;
/// fence lines are dropped and paragraph lines are joined with a space.
pub fn segment_with(text: &str, options: &InlineOptions) -> Vec<Block> {
    let lines = split_lines(text);
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        i += 1;

        match classify(line) {
            LineKind::Fence => {
                let start = i;
                let mut end = lines.len();
                while i < lines.len() {
                    let candidate = lines[i];
                    i += 1;
                    if candidate.trim().starts_with(FENCE) {
                        end = i - 1;
                        break;
                    }
                }
                blocks.push(Block::CodeBlock {
                    raw: lines[start..end].join("\n"),
                });
            }
            LineKind::Divider => blocks.push(Block::Divider),
            LineKind::Heading { level, content } => blocks.push(Block::Heading {
                level,
                runs: tokenize_with(content, options),
            }),
            LineKind::Quote { content } => blocks.push(Block::Blockquote {
                runs: tokenize_with(content, options),
            }),
            LineKind::Bullet { depth, content } => blocks.push(Block::BulletItem {
                depth,
                runs: tokenize_with(content, options),
            }),
            LineKind::Numbered { number, content } => blocks.push(Block::NumberedItem {
                number,
                runs: tokenize_with(content, options),
            }),
            LineKind::Blank => {
                if blocks.last() != Some(&Block::BlankMarker) {
                    blocks.push(Block::BlankMarker);
                }
            }
            LineKind::Text => {
                let mut content = line.to_string();
                while i < lines.len() && classify(lines[i]) == LineKind::Text {
                    content.push(' ');
                    content.push_str(lines[i]);
                    i += 1;
                }
                blocks.push(Block::Paragraph {
                    runs: tokenize_with(&content, options),
                });
            }
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmark_core::InlineRun;

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            runs: vec![InlineRun::plain(text)],
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_single_paragraph() {
        assert_eq!(segment("Hello, world!"), vec![paragraph("Hello, world!")]);
    }

    #[test]
    fn test_blank_lines_collapse() {
        assert_eq!(
            segment("a\n\n\nb"),
            vec![paragraph("a"), Block::BlankMarker, paragraph("b")]
        );
    }

    #[test]
    fn test_separate_blank_runs_each_get_a_marker() {
        assert_eq!(
            segment("a\n\nb\n\nc"),
            vec![
                paragraph("a"),
                Block::BlankMarker,
                paragraph("b"),
                Block::BlankMarker,
                paragraph("c"),
            ]
        );
    }

    #[test]
    fn test_trailing_newline_is_a_blank_line() {
        assert_eq!(segment("a\n"), vec![paragraph("a"), Block::BlankMarker]);
        assert_eq!(segment("\n"), vec![Block::BlankMarker]);
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        assert_eq!(
            segment("a\n   \n\t\nb"),
            vec![paragraph("a"), Block::BlankMarker, paragraph("b")]
        );
    }

    #[test]
    fn test_heading_levels() {
        for (input, level) in [("### Title", 3), ("## Title", 2), ("# Title", 1)] {
            assert_eq!(
                segment(input),
                vec![Block::Heading {
                    level,
                    runs: vec![InlineRun::plain("Title")],
                }],
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_deep_or_unspaced_hashes_are_paragraphs() {
        assert_eq!(segment("#### Deep"), vec![paragraph("#### Deep")]);
        assert_eq!(segment("#Tight"), vec![paragraph("#Tight")]);
        assert_eq!(segment("#"), vec![paragraph("#")]);
    }

    #[test]
    fn test_heading_keeps_extra_spaces_after_marker() {
        assert_eq!(
            segment("##  Spaced"),
            vec![Block::Heading {
                level: 2,
                runs: vec![InlineRun::plain(" Spaced")],
            }]
        );
    }

    #[test]
    fn test_indented_heading() {
        assert_eq!(
            segment("   # Title  "),
            vec![Block::Heading {
                level: 1,
                runs: vec![InlineRun::plain("Title")],
            }]
        );
    }

    #[test]
    fn test_code_fence() {
        assert_eq!(
            segment("```\nfoo\nbar\n```"),
            vec![Block::CodeBlock {
                raw: "foo\nbar".to_string()
            }]
        );
    }

    #[test]
    fn test_code_fence_with_language_and_indent() {
        assert_eq!(
            segment("```rust\n    let x = **1**;\n\n# not a heading\n  ```\nafter"),
            vec![
                Block::CodeBlock {
                    raw: "    let x = **1**;\n\n# not a heading".to_string()
                },
                paragraph("after"),
            ]
        );
    }

    #[test]
    fn test_unterminated_fence_takes_the_rest() {
        assert_eq!(
            segment("intro\n```python\nprint(1)\n\n- x"),
            vec![
                paragraph("intro"),
                Block::CodeBlock {
                    raw: "print(1)\n\n- x".to_string()
                },
            ]
        );
        assert_eq!(
            segment("```"),
            vec![Block::CodeBlock { raw: String::new() }]
        );
    }

    #[test]
    fn test_empty_fenced_block() {
        assert_eq!(
            segment("```\n```"),
            vec![Block::CodeBlock { raw: String::new() }]
        );
    }

    #[test]
    fn test_dividers() {
        assert_eq!(
            segment("---\n***\n___"),
            vec![Block::Divider, Block::Divider, Block::Divider]
        );
        assert_eq!(segment("----"), vec![paragraph("----")]);
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            segment("> Quote *text*"),
            vec![Block::Blockquote {
                runs: vec![InlineRun::plain("Quote "), InlineRun::italic("text")],
            }]
        );
        assert_eq!(segment(">tight"), vec![paragraph(">tight")]);
    }

    #[test]
    fn test_bullets() {
        assert_eq!(
            segment("- one\n* two\n• three"),
            vec![
                Block::BulletItem {
                    depth: 0,
                    runs: vec![InlineRun::plain("one")],
                },
                Block::BulletItem {
                    depth: 0,
                    runs: vec![InlineRun::plain("two")],
                },
                Block::BulletItem {
                    depth: 0,
                    runs: vec![InlineRun::plain("three")],
                },
            ]
        );
    }

    #[test]
    fn test_bullet_depth_from_leading_spaces() {
        let depths: Vec<_> = segment("- a\n  - b\n    - item\n     - d")
            .into_iter()
            .map(|block| match block {
                Block::BulletItem { depth, .. } => depth,
                other => panic!("expected bullet, got {other:?}"),
            })
            .collect();
        assert_eq!(depths, vec![0, 1, 2, 2]);
    }

    #[test]
    fn test_numbered_items() {
        assert_eq!(
            segment("3. go"),
            vec![Block::NumberedItem {
                number: 3,
                runs: vec![InlineRun::plain("go")],
            }]
        );
        assert_eq!(
            segment("12.   **done**"),
            vec![Block::NumberedItem {
                number: 12,
                runs: vec![InlineRun::bold("done")],
            }]
        );
        assert_eq!(
            segment("7."),
            vec![Block::NumberedItem {
                number: 7,
                runs: vec![],
            }]
        );
    }

    #[test]
    fn test_decimal_number_reads_as_numbered_item() {
        assert_eq!(
            segment("3.14 is pi"),
            vec![Block::NumberedItem {
                number: 3,
                runs: vec![InlineRun::plain("14 is pi")],
            }]
        );
    }

    #[test]
    fn test_non_integer_before_dot_is_paragraph() {
        assert_eq!(segment("v1.2 released"), vec![paragraph("v1.2 released")]);
        assert_eq!(segment(". leading"), vec![paragraph(". leading")]);
    }

    #[test]
    fn test_paragraph_joins_lines() {
        assert_eq!(
            segment("first line\nsecond **line**\nthird"),
            vec![Block::Paragraph {
                runs: vec![
                    InlineRun::plain("first line second "),
                    InlineRun::bold("line"),
                    InlineRun::plain(" third"),
                ],
            }]
        );
    }

    #[test]
    fn test_paragraph_spans_bold_across_lines() {
        assert_eq!(
            segment("a **b\nc** d"),
            vec![Block::Paragraph {
                runs: vec![
                    InlineRun::plain("a "),
                    InlineRun::bold("b c"),
                    InlineRun::plain(" d"),
                ],
            }]
        );
    }

    #[test]
    fn test_paragraph_stops_at_other_constructs() {
        assert_eq!(
            segment("intro\n- item\nmore text\n# Head"),
            vec![
                paragraph("intro"),
                Block::BulletItem {
                    depth: 0,
                    runs: vec![InlineRun::plain("item")],
                },
                paragraph("more text"),
                Block::Heading {
                    level: 1,
                    runs: vec![InlineRun::plain("Head")],
                },
            ]
        );
    }

    #[test]
    fn test_paragraph_keeps_raw_indentation() {
        assert_eq!(segment("a\n  b"), vec![paragraph("a   b")]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            segment("# T\r\n\r\nbody\r\n"),
            vec![
                Block::Heading {
                    level: 1,
                    runs: vec![InlineRun::plain("T")],
                },
                Block::BlankMarker,
                paragraph("body"),
                Block::BlankMarker,
            ]
        );
    }

    #[test]
    fn test_same_input_same_output() {
        let input = "# A\n\n- b\n```\nc\n";
        assert_eq!(segment(input), segment(input));
    }

    #[test]
    fn test_classify_order() {
        assert_eq!(classify("```"), LineKind::Fence);
        assert_eq!(classify("***"), LineKind::Divider);
        assert_eq!(
            classify("* * *"),
            LineKind::Bullet {
                depth: 0,
                content: "* *"
            }
        );
        assert_eq!(
            classify("# 1. x"),
            LineKind::Heading {
                level: 1,
                content: "1. x"
            }
        );
        assert_eq!(
            classify("- 1. x"),
            LineKind::Bullet {
                depth: 0,
                content: "1. x"
            }
        );
        assert_eq!(classify(" "), LineKind::Blank);
        assert_eq!(classify("text"), LineKind::Text);
    }
}
