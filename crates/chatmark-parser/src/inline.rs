//! Inline tokenizer.
//!
//! Splits the text of a single block into styled runs. Extraction is
//! greedy and non-recursive: at each position bold is tried first, then
//! italic, then inline code, and if none of them has a closing delimiter
//! later in the text one character is emitted as plain text. The inner
//! text of a matched span is never tokenized again, so `**a *b* c**` is a
//! single bold run containing literal asterisks.

use chatmark_core::{InlineRun, RunStyle};

/// Two-character bold delimiters; the closer must equal the opener.
const BOLD_DELIMITERS: [&str; 2] = ["**", "__"];

/// Single-character italic delimiters.
const ITALIC_DELIMITERS: [&str; 2] = ["*", "_"];

/// Inline code delimiter.
const CODE_DELIMITER: &str = "`";

/// Options for inline tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineOptions {
    /// Merge adjacent plain runs into one.
    ///
    /// When disabled every unmatched character is emitted as its own run.
    /// Renderers treat both forms the same.
    pub coalesce_plain: bool,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            coalesce_plain: true,
        }
    }
}

/// Tokenize block content with default options.
///
/// # Example
///
/// ```
/// use chatmark_core::InlineRun;
/// use chatmark_parser::tokenize;
///
/// assert_eq!(
///     tokenize("**x** y"),
///     vec![InlineRun::bold("x"), InlineRun::plain(" y")]
/// );
/// ```
pub fn tokenize(content: &str) -> Vec<InlineRun> {
    tokenize_with(content, &InlineOptions::default())
}

/// Tokenize block content into styled runs.
///
/// Never fails: unterminated delimiters degrade to literal plain text.
pub fn tokenize_with(content: &str, options: &InlineOptions) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    let mut pos = 0;

    while pos < content.len() {
        let rest = &content[pos..];

        if let Some((run, consumed)) = extract_bold(rest)
            .or_else(|| extract_italic(rest))
            .or_else(|| extract_code(rest))
        {
            push_run(&mut runs, run, options.coalesce_plain);
            pos += consumed;
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        push_run(
            &mut runs,
            InlineRun::plain(ch.to_string()),
            options.coalesce_plain,
        );
        pos += ch.len_utf8();
    }

    runs
}

fn push_run(runs: &mut Vec<InlineRun>, run: InlineRun, coalesce: bool) {
    if coalesce && run.is_plain() {
        if let Some(last) = runs.last_mut().filter(|last| last.is_plain()) {
            last.text.push_str(&run.text);
            return;
        }
    }
    runs.push(run);
}

/// Match `delimiter inner delimiter` at the start of `rest`.
///
/// The closer is the nearest following occurrence of the delimiter. An
/// empty inner text is not a match, so the `**` of an unclosed bold never
/// opens an empty italic span. Returns the inner text and the number of
/// bytes consumed including both delimiters.
fn extract_span<'a>(rest: &'a str, delimiter: &str) -> Option<(&'a str, usize)> {
    let after = rest.strip_prefix(delimiter)?;
    let end = after.find(delimiter)?;
    if end == 0 {
        return None;
    }
    Some((&after[..end], delimiter.len() * 2 + end))
}

fn extract_bold(rest: &str) -> Option<(InlineRun, usize)> {
    BOLD_DELIMITERS.iter().find_map(|delimiter| {
        extract_span(rest, delimiter).map(|(inner, consumed)| (InlineRun::bold(inner), consumed))
    })
}

fn extract_italic(rest: &str) -> Option<(InlineRun, usize)> {
    ITALIC_DELIMITERS.iter().find_map(|delimiter| {
        extract_span(rest, delimiter)
            .map(|(inner, consumed)| (InlineRun::italic(inner), consumed))
    })
}

fn extract_code(rest: &str) -> Option<(InlineRun, usize)> {
    extract_span(rest, CODE_DELIMITER)
        .map(|(inner, consumed)| (InlineRun::new(inner, RunStyle::Code), consumed))
}
