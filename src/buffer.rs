//! Line-oriented view over source text
//!
//! Lines are 0-indexed and stored without their terminators. Columns count
//! characters (Unicode scalar values), not bytes.

use serde::Serialize;

use crate::registry::CommentPattern;

/// An immutable sequence of lines borrowed from a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SourceBuffer<'a> {
    /// Split `text` into lines on `\n`, dropping a trailing `\r` per line.
    ///
    /// A text ending in a newline has an empty last line, the way editors
    /// count it. An empty text is one empty line.
    pub fn new(text: &'a str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// The exact text covered by a span, lines joined with `\n`.
    ///
    /// Columns past the end of a line are clamped to the line end, and lines
    /// past the end of the buffer are ignored.
    pub fn slice(&self, span: &CommentSpan) -> String {
        let mut out = String::new();
        for index in span.start_line..=span.end_line {
            let Some(line) = self.line(index) else {
                break;
            };
            let from = if index == span.start_line {
                char_to_byte(line, span.start_column)
            } else {
                0
            };
            let to = if index == span.end_line {
                char_to_byte(line, span.end_column)
            } else {
                line.len()
            };
            if index > span.start_line {
                out.push('\n');
            }
            if from < to {
                out.push_str(&line[from..to]);
            }
        }
        out
    }
}

/// A location in a [`SourceBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The located text of one block comment, delimiters included.
///
/// Both ends are inclusive: the start delimiter begins at
/// `(start_line, start_column)` and the end delimiter's last character sits
/// just before `(end_line, end_column)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentSpan {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub pattern: CommentPattern,
}

impl CommentSpan {
    pub fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Byte offset of the `column`-th character, or the line length if the
/// column is past the end.
pub(crate) fn char_to_byte(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(byte, _)| byte)
        .unwrap_or(line.len())
}

/// Character column of a byte offset that lies on a char boundary.
pub(crate) fn byte_to_char(line: &str, byte: usize) -> usize {
    line[..byte].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_span(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> CommentSpan {
        CommentSpan {
            start_line,
            start_column,
            end_line,
            end_column,
            pattern: CommentPattern::from_static("/*", "*/"),
        }
    }

    #[test]
    fn test_split_lines() {
        let buffer = SourceBuffer::new("a\r\nb\nc");
        assert_eq!(buffer.lines(), &["a", "b", "c"]);
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let buffer = SourceBuffer::new("a\n");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line(1), Some(""));
        assert_eq!(SourceBuffer::new("").line_count(), 1);
    }

    #[test]
    fn test_slice_single_line() {
        let buffer = SourceBuffer::new("int x; /* note */ int y;");
        assert_eq!(buffer.slice(&c_span(0, 7, 0, 17)), "/* note */");
    }

    #[test]
    fn test_slice_multi_line() {
        let buffer = SourceBuffer::new("code();\n  /* one\n   * two */ more();");
        assert_eq!(buffer.slice(&c_span(1, 2, 2, 11)), "/* one\n   * two */");
    }

    #[test]
    fn test_slice_counts_characters() {
        let buffer = SourceBuffer::new("é /* ü */");
        assert_eq!(buffer.slice(&c_span(0, 2, 0, 9)), "/* ü */");
    }

    #[test]
    fn test_column_conversions() {
        let line = "aé/*";
        assert_eq!(char_to_byte(line, 2), 3);
        assert_eq!(char_to_byte(line, 99), line.len());
        assert_eq!(byte_to_char(line, 3), 2);
    }

    #[test]
    fn test_span_lines() {
        let span = c_span(2, 0, 4, 3);
        assert!(span.contains_line(3));
        assert!(!span.contains_line(5));
        assert_eq!(span.line_count(), 3);
    }
}
