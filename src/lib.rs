//! commark - Find the block comment around a cursor and render it as markdown
//!
//! The core is three pure pieces: a [`registry`] of block comment delimiters
//! per language, a [`scanner`] that locates the comment enclosing a cursor,
//! and an extractor in [`comments`] that strips delimiters and decoration.
//! [`query`] chains them; the remaining modules serve the command line tool.

pub mod buffer;
pub mod comments;
pub mod error;
pub mod file_utils;
pub mod heuristics;
pub mod language;
pub mod output;
pub mod query;
pub mod registry;
pub mod scanner;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use buffer::{CommentSpan, CursorPosition, SourceBuffer};
pub use comments::{detect_block_comment, extract};
pub use error::{Error, Result};
pub use query::{CommentDoc, Lookup, Miss, collect_docs, lookup};
pub use registry::{CommentPattern, Registry, patterns_for};
pub use scanner::{ScanLimits, locate_span, scan_buffer};
pub use walk::{FileReport, WalkConfig};
