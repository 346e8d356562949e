//! Markdown output formatting
//!
//! Comment content is already markdown, so this only adds structure: one
//! section per file and one subsection per comment.

use crate::walk::FileReport;

/// Render file reports as a single markdown document.
///
/// Files without comments are left out. Line numbers are 1-based.
pub fn render_markdown(reports: &[FileReport]) -> String {
    let mut output = String::new();
    for report in reports.iter().filter(|r| !r.comments.is_empty()) {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str("## `");
        output.push_str(&report.path.display().to_string());
        output.push_str("`\n");

        for doc in &report.comments {
            output.push('\n');
            let (start, end) = (doc.span.start_line + 1, doc.span.end_line + 1);
            if start == end {
                output.push_str(&format!("### Line {}\n", start));
            } else {
                output.push_str(&format!("### Lines {}-{}\n", start, end));
            }
            if !doc.content.is_empty() {
                output.push('\n');
                output.push_str(&doc.content);
                output.push('\n');
            }
        }
    }
    output
}

/// Print the markdown rendering of `reports` to stdout.
pub fn print_markdown(reports: &[FileReport]) -> std::io::Result<()> {
    print!("{}", render_markdown(reports));
    Ok(())
}
