//! Block comment validation and content extraction
//!
//! Turns the raw text of a block comment, delimiters included, into the prose
//! its author meant to show:
//!
//! ```text
//! /*                      # Title
//!  * # Title        ->
//!  *                      **Bold text**
//!  * **Bold text**
//!  */
//! ```
//!
//! Per-line decoration (a lone leading `*`) is removed, markdown emphasis
//! (`**bold**`, `***both***`) is left alone.
//!
//! Two checks live here, separate from the scanner on purpose:
//! [`detect_block_comment`] answers "is this text one block comment at all",
//! and [`extract`] refuses any text not framed by the given delimiters.

use crate::heuristics::{is_line_comment, is_whitespace};
use crate::registry::CommentPattern;

/// Find the pattern whose delimiters frame the whole of `text`.
///
/// Returns `None` for empty text, for text that is only a run of `//` line
/// comments, and for text that does not both start and end with one pattern's
/// delimiters (such as a comment followed by code).
pub fn detect_block_comment<'p>(
    text: &str,
    patterns: &'p [CommentPattern],
) -> Option<&'p CommentPattern> {
    let trimmed = text.trim_matches(is_whitespace);
    if trimmed.is_empty() || is_line_comment_run(trimmed) {
        return None;
    }
    patterns.iter().find(|pattern| frames(trimmed, pattern))
}

/// Strip delimiters and per-line decoration from a block comment.
///
/// Returns `None` unless the trimmed `raw` text starts with `pattern.start`
/// and ends with `pattern.end`. An empty comment yields `Some("")`.
///
/// # Examples
///
/// ```
/// use commark::comments::extract;
/// use commark::registry::CommentPattern;
///
/// let pattern = CommentPattern::from_static("/*", "*/");
/// assert_eq!(extract("/* Hello World */", &pattern).as_deref(), Some("Hello World"));
/// assert_eq!(extract("// nope", &pattern), None);
/// ```
pub fn extract(raw: &str, pattern: &CommentPattern) -> Option<String> {
    let trimmed = raw.trim_matches(is_whitespace);
    if !frames(trimmed, pattern) {
        return None;
    }
    let interior = &trimmed[pattern.start.len()..trimmed.len() - pattern.end.len()];

    let lines: Vec<&str> = interior.split('\n').map(strip_decoration).collect();

    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => Some(lines[first..=last].join("\n")),
        _ => Some(String::new()),
    }
}

/// Clean one interior line.
///
/// Trims both ends and removes a single leading `*` (with the whitespace after
/// it) unless the line opens with `**`.
///
/// ```
/// use commark::comments::strip_decoration;
///
/// assert_eq!(strip_decoration("   * some text"), "some text");
/// assert_eq!(strip_decoration(" * **bold**"), "**bold**");
/// assert_eq!(strip_decoration(" **bold**"), "**bold**");
/// ```
pub fn strip_decoration(line: &str) -> &str {
    let line = line.trim_start_matches(is_whitespace);
    let line = match line.strip_prefix('*') {
        Some(rest) if !rest.starts_with('*') => rest.trim_start_matches(is_whitespace),
        _ => line,
    };
    line.trim_end_matches(is_whitespace)
}

fn frames(text: &str, pattern: &CommentPattern) -> bool {
    text.len() >= pattern.start.len() + pattern.end.len()
        && text.starts_with(&*pattern.start)
        && text.ends_with(&*pattern.end)
}

fn is_line_comment_run(text: &str) -> bool {
    let mut lines = text.split('\n');
    let count = lines.clone().count();
    count >= 2 && lines.all(is_line_comment)
}
