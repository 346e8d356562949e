//! Colored terminal output
//!
//! Comment content is shown as-is with light markdown highlighting: headings
//! in bold cyan, list markers in yellow, block quotes in green and code fences
//! in magenta. Everything else is written uncolored.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::query::CommentDoc;
use crate::walk::FileReport;

use super::config::OutputConfig;

/// Formatter for console output.
pub struct TerminalFormatter {
    config: OutputConfig,
}

impl TerminalFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn stdout(&self) -> StandardStream {
        // Terminal detection already happened when `use_color` was decided
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        StandardStream::stdout(choice)
    }

    /// Print one comment to stdout.
    pub fn print_doc(&self, path: &Path, doc: &CommentDoc) -> io::Result<()> {
        let mut stdout = self.stdout();
        self.write_doc(&mut stdout, path, doc)
    }

    /// Print every comment of every report to stdout.
    pub fn print_reports(&self, reports: &[FileReport]) -> io::Result<()> {
        let mut stdout = self.stdout();
        self.write_reports(&mut stdout, reports)
    }

    pub fn write_reports<W: WriteColor>(&self, out: &mut W, reports: &[FileReport]) -> io::Result<()> {
        let mut first = true;
        for report in reports {
            for doc in &report.comments {
                if !first {
                    writeln!(out)?;
                }
                first = false;
                self.write_doc(out, &report.path, doc)?;
            }
        }
        Ok(())
    }

    pub fn write_doc<W: WriteColor>(&self, out: &mut W, path: &Path, doc: &CommentDoc) -> io::Result<()> {
        if self.config.show_location {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(
                out,
                "{}:{}-{}",
                path.display(),
                doc.span.start_line + 1,
                doc.span.end_line + 1
            )?;
            out.reset()?;
            writeln!(out)?;
        }
        let mut in_fence = false;
        for line in doc.content.lines() {
            in_fence = write_markdown_line(out, line, in_fence)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Write one content line with highlighting. Returns whether the following
/// line is inside a fenced code block.
fn write_markdown_line<W: WriteColor>(out: &mut W, line: &str, in_fence: bool) -> io::Result<bool> {
    let trimmed = line.trim_start();

    if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{}", line)?;
        out.reset()?;
        return Ok(!in_fence);
    }
    if in_fence {
        write!(out, "{}", line)?;
        return Ok(true);
    }

    if trimmed.starts_with('#') {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(out, "{}", line)?;
        out.reset()?;
    } else if trimmed.starts_with('>') {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", line)?;
        out.reset()?;
    } else if let Some(marker_len) = list_marker_len(trimmed) {
        let indent = line.len() - trimmed.len();
        write!(out, "{}", &line[..indent])?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "{}", &trimmed[..marker_len])?;
        out.reset()?;
        write!(out, "{}", &trimmed[marker_len..])?;
    } else {
        write!(out, "{}", line)?;
    }
    Ok(false)
}

/// Length of a leading list marker (`- `, `* `, `+ `, `1. `), if any.
fn list_marker_len(text: &str) -> Option<usize> {
    for bullet in ["- ", "* ", "+ "] {
        if text.starts_with(bullet) {
            return Some(bullet.len());
        }
    }
    let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 && text[digits..].starts_with(". ") {
        return Some(digits + 2);
    }
    None
}
