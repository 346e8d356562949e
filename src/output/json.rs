//! JSON output formatting

use std::io;
use std::path::PathBuf;

use serde::Serialize;

use crate::buffer::CursorPosition;
use crate::query::CommentDoc;

/// The comment found at a cursor, with where it was asked for.
#[derive(Debug, Clone, Serialize)]
pub struct HoverReport {
    pub path: PathBuf,
    pub language: String,
    pub cursor: CursorPosition,
    pub comment: CommentDoc,
}

/// Render any serializable report as pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

/// Print a serializable report as pretty-printed JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}
