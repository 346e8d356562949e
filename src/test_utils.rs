//! Test utilities for buffers with cursors and temporary source trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::buffer::CursorPosition;

/// Cursor marker understood by [`text_with_cursor`].
pub const CURSOR_MARKER: &str = "<|>";

/// Split a fixture into source text and the cursor it marks.
///
/// The first [`CURSOR_MARKER`] is removed and its position becomes the
/// cursor. Without a marker the cursor is at the start of the text.
///
/// ```
/// use commark::test_utils::text_with_cursor;
///
/// let (text, cursor) = text_with_cursor("/*\n * he<|>llo\n */");
/// assert_eq!(text, "/*\n * hello\n */");
/// assert_eq!((cursor.line, cursor.column), (1, 5));
/// ```
pub fn text_with_cursor(fixture: &str) -> (String, CursorPosition) {
    let Some(at) = fixture.find(CURSOR_MARKER) else {
        return (fixture.to_string(), CursorPosition::default());
    };
    let before = &fixture[..at];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count();

    let mut text = String::with_capacity(fixture.len());
    text.push_str(before);
    text.push_str(&fixture[at + CURSOR_MARKER.len()..]);
    (text, CursorPosition::new(line, column))
}

/// A temporary directory of source files.
///
/// The directory is removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a temporary directory that looks like a git checkout, so
    /// `.gitignore` files inside it take effect.
    pub fn with_git() -> Self {
        let repo = Self::new();
        fs::create_dir(repo.path().join(".git")).expect("Failed to create .git");
        repo
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
