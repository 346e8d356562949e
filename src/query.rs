//! Cursor queries: from a buffer position to rendered comment text
//!
//! Chains the pieces together: registry lookup, boundary scan, slicing the
//! raw text out of the buffer, the independent block comment check, and
//! content extraction. Any step can decline, and each reason is reported as
//! a [`Miss`] rather than an error.

use serde::Serialize;
use tracing::debug;

use crate::buffer::{CommentSpan, CursorPosition, SourceBuffer};
use crate::comments::{detect_block_comment, extract};
use crate::error::Result;
use crate::registry::{CommentPattern, Registry};
use crate::scanner::{ScanLimits, locate_span_with, scan_buffer};

/// Why a query produced nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Miss {
    /// No patterns are registered for the language.
    UnsupportedLanguage,
    /// The scanner found no block comment around the cursor.
    NoEnclosingComment,
    /// The scanner's span did not survive re-validation.
    MalformedSpan,
    /// The comment holds nothing but delimiters and decoration.
    EmptyComment,
}

/// A block comment and its cleaned content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDoc {
    pub span: CommentSpan,
    pub content: String,
}

/// Outcome of a cursor query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(CommentDoc),
    Missed(Miss),
}

impl Lookup {
    pub fn found(self) -> Option<CommentDoc> {
        match self {
            Lookup::Found(doc) => Some(doc),
            Lookup::Missed(_) => None,
        }
    }

    pub fn miss(&self) -> Option<Miss> {
        match self {
            Lookup::Found(_) => None,
            Lookup::Missed(miss) => Some(*miss),
        }
    }
}

/// Find and clean the block comment around `cursor`.
///
/// # Errors
///
/// Only [`crate::Error::CursorOutOfBounds`]; every other outcome is a
/// [`Lookup`].
pub fn lookup(
    registry: &Registry,
    buffer: &SourceBuffer<'_>,
    cursor: CursorPosition,
    language_id: &str,
) -> Result<Lookup> {
    lookup_with(registry, buffer, cursor, language_id, ScanLimits::unbounded())
}

/// [`lookup`] with a scanner line budget.
pub fn lookup_with(
    registry: &Registry,
    buffer: &SourceBuffer<'_>,
    cursor: CursorPosition,
    language_id: &str,
    limits: ScanLimits,
) -> Result<Lookup> {
    let patterns = registry.patterns_for(language_id);
    if patterns.is_empty() {
        debug!(language_id, "language not registered");
        return Ok(Lookup::Missed(Miss::UnsupportedLanguage));
    }

    let Some(span) = locate_span_with(buffer, cursor, patterns, limits)? else {
        return Ok(Lookup::Missed(Miss::NoEnclosingComment));
    };

    Ok(match document(buffer, span, patterns) {
        Some(doc) if doc.content.is_empty() => Lookup::Missed(Miss::EmptyComment),
        Some(doc) => Lookup::Found(doc),
        None => Lookup::Missed(Miss::MalformedSpan),
    })
}

/// Every block comment in `buffer` that survives re-validation, top to
/// bottom. Empty comments are kept so listings show where they are.
///
/// Returns `None` if the language is not registered.
pub fn collect_docs(
    registry: &Registry,
    buffer: &SourceBuffer<'_>,
    language_id: &str,
    limits: ScanLimits,
) -> Option<Vec<CommentDoc>> {
    let patterns = registry.patterns_for(language_id);
    if patterns.is_empty() {
        return None;
    }
    let docs = scan_buffer(buffer, patterns, limits)
        .into_iter()
        .filter_map(|span| document(buffer, span, patterns))
        .collect();
    Some(docs)
}

fn document(
    buffer: &SourceBuffer<'_>,
    span: CommentSpan,
    patterns: &[CommentPattern],
) -> Option<CommentDoc> {
    let raw = buffer.slice(&span);
    if detect_block_comment(&raw, patterns).is_none() {
        debug!(start_line = span.start_line, "span is not a block comment");
        return None;
    }
    let Some(content) = extract(&raw, &span.pattern) else {
        debug!(start_line = span.start_line, "span does not match its own delimiters");
        return None;
    };
    Some(CommentDoc { span, content })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn query(text: &str, line: usize, language: &str) -> Lookup {
        let buffer = SourceBuffer::new(text);
        lookup(&Registry::builtin(), &buffer, CursorPosition::new(line, 0), language).unwrap()
    }

    #[test]
    fn test_found_markdown() {
        let text = "/*\n * # Title\n *\n * **Bold text**\n */\nfn main() {}";
        let doc = query(text, 2, "rust").found().unwrap();
        assert_eq!(doc.content, "# Title\n\n**Bold text**");
        assert_eq!((doc.span.start_line, doc.span.end_line), (0, 4));
    }

    #[test]
    fn test_unsupported_language() {
        assert_eq!(
            query("/* x */", 0, "plaintext").miss(),
            Some(Miss::UnsupportedLanguage)
        );
    }

    #[test]
    fn test_no_enclosing_comment() {
        assert_eq!(
            query("// Line 1\n// Line 2\n// Line 3", 1, "javascript").miss(),
            Some(Miss::NoEnclosingComment)
        );
        assert_eq!(
            query("let x = 1;", 0, "rust").miss(),
            Some(Miss::NoEnclosingComment)
        );
    }

    #[test]
    fn test_python_docstring_query() {
        let text = "def greet():\n    \"\"\"\n    Say **hello**.\n    \"\"\"\n";
        let doc = query(text, 2, "python").found().unwrap();
        assert_eq!(doc.content, "Say **hello**.");
    }

    #[test]
    fn test_cursor_out_of_bounds_is_an_error() {
        let buffer = SourceBuffer::new("/* x */");
        let result = lookup(
            &Registry::builtin(),
            &buffer,
            CursorPosition::new(3, 0),
            "c",
        );
        assert!(matches!(result, Err(Error::CursorOutOfBounds { .. })));
    }

    #[test]
    fn test_revalidation_rejects_line_comment_span() {
        // With `//` registered as a symmetric block delimiter the scanner
        // accepts a span made only of line comments; the independent check
        // refuses it.
        let mut registry = Registry::new();
        registry.register("odd", CommentPattern::new("//", "//").unwrap());
        let buffer = SourceBuffer::new("x = 1 // a\n// b");
        let result = lookup(&registry, &buffer, CursorPosition::new(0, 0), "odd").unwrap();
        assert_eq!(result.miss(), Some(Miss::MalformedSpan));
    }

    #[test]
    fn test_collect_docs() {
        let text = "/* one */\nint x;\n/*\n * two\n */\nint y; /**/";
        let buffer = SourceBuffer::new(text);
        let docs = collect_docs(&Registry::builtin(), &buffer, "c", ScanLimits::unbounded()).unwrap();
        let contents: Vec<&str> = docs.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two", ""]);
        assert!(collect_docs(&Registry::builtin(), &buffer, "nope", ScanLimits::unbounded()).is_none());
    }

    #[test]
    fn test_collect_docs_skips_code_between_docstrings() {
        let text = "\"\"\"\nModule docs.\n\"\"\"\ndef f():\n    \"\"\"\n    Inner docs.\n    \"\"\"\n    pass\n";
        let buffer = SourceBuffer::new(text);
        let docs =
            collect_docs(&Registry::builtin(), &buffer, "python", ScanLimits::unbounded()).unwrap();
        let contents: Vec<&str> = docs.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["Module docs.", "Inner docs."]);
    }

    #[test]
    fn test_collect_docs_comment_after_closing_delimiter() {
        let buffer = SourceBuffer::new("int x; /* a */ int y; /* b\n * more */\nint z;");
        let docs = collect_docs(&Registry::builtin(), &buffer, "c", ScanLimits::unbounded()).unwrap();
        let contents: Vec<&str> = docs.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b\nmore"]);
    }

    #[test]
    fn test_empty_comment_has_nothing_to_show() {
        assert_eq!(query("/**/", 0, "c").miss(), Some(Miss::EmptyComment));
        assert_eq!(query("/*\n *\n */", 1, "c").miss(), Some(Miss::EmptyComment));
    }

    #[test]
    fn test_miss_serializes_snake_case() {
        let json = serde_json::to_string(&Miss::NoEnclosingComment).unwrap();
        assert_eq!(json, "\"no_enclosing_comment\"");
    }
}
