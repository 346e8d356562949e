//! Block comment boundary scanner
//!
//! Given a buffer, a cursor and the delimiter patterns of the active language,
//! finds the block comment enclosing the cursor line. The search runs in two
//! phases:
//!
//! 1. **Upward**: from the cursor line toward the top, the first plausible
//!    start delimiter fixes where the comment opens and which pattern is in
//!    play. Code-looking lines above the cursor end the search.
//! 2. **Downward**: from the opener, the first plausible end delimiter of the
//!    same pattern closes the comment.
//!
//! "Plausible" is decided by the predicates in [`crate::heuristics`]. Every
//! failure is a plain `Ok(None)`; only a cursor outside the buffer is an
//! error.

use tracing::{debug, trace};

use crate::buffer::{CommentSpan, CursorPosition, SourceBuffer, byte_to_char, char_to_byte};
use crate::error::{Error, Result};
use crate::heuristics::{
    find_plausible_end, find_plausible_start, in_line_comment_run, looks_like_comment_line,
};
use crate::registry::CommentPattern;

/// Bounds on how far a single scan may walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanLimits {
    /// Maximum number of lines each phase may visit. `None` is unbounded.
    pub max_lines: Option<usize>,
}

impl ScanLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_lines(max_lines: usize) -> Self {
        Self {
            max_lines: Some(max_lines),
        }
    }

    fn allows(&self, visited: usize) -> bool {
        self.max_lines.is_none_or(|max| visited < max)
    }
}

/// Locate the block comment around `cursor`, with no line budget.
///
/// Returns `Ok(None)` when the cursor is not inside a block comment, sits in a
/// run of `//` line comments, or the comment never closes.
///
/// # Errors
///
/// [`Error::CursorOutOfBounds`] if `cursor.line` is not a line of `buffer`.
pub fn locate_span(
    buffer: &SourceBuffer<'_>,
    cursor: CursorPosition,
    patterns: &[CommentPattern],
) -> Result<Option<CommentSpan>> {
    locate_span_with(buffer, cursor, patterns, ScanLimits::unbounded())
}

/// [`locate_span`] with a per-phase line budget.
pub fn locate_span_with(
    buffer: &SourceBuffer<'_>,
    cursor: CursorPosition,
    patterns: &[CommentPattern],
    limits: ScanLimits,
) -> Result<Option<CommentSpan>> {
    if cursor.line >= buffer.line_count() {
        return Err(Error::CursorOutOfBounds {
            line: cursor.line,
            line_count: buffer.line_count(),
        });
    }
    if patterns.is_empty() {
        return Ok(None);
    }

    Ok(locate_after(buffer, cursor.line, patterns, limits, Floor::default()))
}

/// Earliest position a comment start may take: nothing above `line`, and
/// nothing before byte `byte` on `line` itself.
#[derive(Debug, Clone, Copy, Default)]
struct Floor {
    line: usize,
    byte: usize,
}

fn locate_after(
    buffer: &SourceBuffer<'_>,
    cursor_line: usize,
    patterns: &[CommentPattern],
    limits: ScanLimits,
    floor: Floor,
) -> Option<CommentSpan> {
    if in_line_comment_run(buffer.lines(), cursor_line) {
        debug!(line = cursor_line, "cursor is inside a run of line comments");
        return None;
    }

    let start = find_start(buffer, cursor_line, patterns, limits, floor)?;
    let Some((end_line, end_byte)) = find_end(buffer, &start, limits) else {
        debug!(
            start_line = start.line,
            "no closing '{}' found", start.pattern.end
        );
        return None;
    };
    if end_line < cursor_line {
        debug!(end_line, cursor_line, "comment closes above the cursor");
        return None;
    }

    let start_text = buffer.line(start.line).unwrap_or_default();
    let end_text = buffer.line(end_line).unwrap_or_default();
    Some(CommentSpan {
        start_line: start.line,
        start_column: byte_to_char(start_text, start.byte),
        end_line,
        end_column: byte_to_char(end_text, end_byte),
        pattern: start.pattern.clone(),
    })
}

/// Every block comment in `buffer`, top to bottom, without overlaps.
///
/// Each line is used as a cursor in turn, the way a user hovering every line
/// would. A new comment may only open after the previous one closed, so a
/// closing delimiter is never reused as an opener and a comment opening on
/// the line where another closes is still found.
pub fn scan_buffer(
    buffer: &SourceBuffer<'_>,
    patterns: &[CommentPattern],
    limits: ScanLimits,
) -> Vec<CommentSpan> {
    let mut spans = Vec::new();
    if patterns.is_empty() {
        return spans;
    }
    let mut floor = Floor::default();
    let mut line = 0;
    while line < buffer.line_count() {
        match locate_after(buffer, line, patterns, limits, floor) {
            Some(span) => {
                let end_text = buffer.line(span.end_line).unwrap_or_default();
                floor = Floor {
                    line: span.end_line,
                    byte: char_to_byte(end_text, span.end_column),
                };
                // Stay on the closing line: another comment may open after it
                line = span.end_line;
                spans.push(span);
            }
            None => line += 1,
        }
    }
    spans
}

struct Start<'p> {
    line: usize,
    byte: usize,
    pattern: &'p CommentPattern,
}

fn find_start<'p>(
    buffer: &SourceBuffer<'_>,
    cursor_line: usize,
    patterns: &'p [CommentPattern],
    limits: ScanLimits,
    floor: Floor,
) -> Option<Start<'p>> {
    for (visited, line) in (floor.line..=cursor_line).rev().enumerate() {
        if !limits.allows(visited) {
            debug!(visited, "line budget exhausted looking for a comment start");
            return None;
        }
        let text = buffer.line(line)?;
        let from = if line == floor.line { floor.byte } else { 0 };
        for pattern in patterns {
            if let Some(byte) = find_plausible_start(text, &pattern.start, from) {
                trace!(line, byte, start = %pattern.start, "comment start");
                return Some(Start {
                    line,
                    byte,
                    pattern,
                });
            }
        }
        if line < cursor_line && !looks_like_comment_line(text) {
            debug!(line, "code above the cursor, not inside a block comment");
            return None;
        }
    }
    None
}

/// Returns the end line and the byte offset just past the end delimiter.
fn find_end(
    buffer: &SourceBuffer<'_>,
    start: &Start<'_>,
    limits: ScanLimits,
) -> Option<(usize, usize)> {
    let pattern = start.pattern;
    // A symmetric opener would otherwise close itself
    let first = if pattern.is_symmetric() {
        start.line + 1
    } else {
        start.line
    };

    for (visited, line) in (first..buffer.line_count()).enumerate() {
        if !limits.allows(visited) {
            debug!(visited, "line budget exhausted looking for a comment end");
            return None;
        }
        let text = buffer.line(line)?;
        let from = if line == start.line {
            start.byte + pattern.start.len()
        } else {
            0
        };
        if let Some(byte) = find_plausible_end(text, &pattern.end, from) {
            trace!(line, byte, end = %pattern.end, "comment end");
            return Some((line, byte + pattern.end.len()));
        }
    }
    None
}
