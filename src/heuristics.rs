//! Structural plausibility checks for delimiter candidates
//!
//! These are line-local guesses, not a tokenizer. They know nothing about
//! escapes, raw strings, interpolation or strings spanning lines, and are
//! kept in one place so they can be replaced without touching the scanner.

/// Whitespace as understood by every trimming step in the crate.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Guess whether the text right after `prefix` sits inside an open string
/// literal.
///
/// Counts `"` and `'` characters in `prefix`; an odd total means a string was
/// opened earlier on the line and not closed. Apostrophes in prose count too,
/// so `don't /*` reads as "inside a string".
pub fn inside_string_literal(prefix: &str) -> bool {
    let quotes = prefix.chars().filter(|c| matches!(c, '"' | '\'')).count();
    quotes % 2 == 1
}

/// Whether the text right after an end delimiter starts with an identifier
/// character (letter, digit or `_`), as in `a*/b`.
pub fn identifier_follows(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Whether a line can sit between a block comment opener and the cursor:
/// blank, or starting with `*`, `//` or `#` once trimmed.
pub fn looks_like_comment_line(line: &str) -> bool {
    let trimmed = line.trim_matches(is_whitespace);
    trimmed.is_empty()
        || trimmed.starts_with('*')
        || trimmed.starts_with("//")
        || trimmed.starts_with('#')
}

pub fn is_line_comment(line: &str) -> bool {
    line.trim_matches(is_whitespace).starts_with("//")
}

/// Whether `line` belongs to a run of two or more consecutive `//` lines.
pub fn in_line_comment_run(lines: &[&str], line: usize) -> bool {
    let Some(current) = lines.get(line) else {
        return false;
    };
    if !is_line_comment(current) {
        return false;
    }
    let above = line
        .checked_sub(1)
        .and_then(|i| lines.get(i))
        .is_some_and(|l| is_line_comment(l));
    let below = lines.get(line + 1).is_some_and(|l| is_line_comment(l));
    above || below
}

/// First occurrence of `token` at or after byte `from` that is not inside a
/// string literal. Returns its byte offset within `line`.
pub fn find_plausible_start(line: &str, token: &str, from: usize) -> Option<usize> {
    line.get(from..)?
        .match_indices(token)
        .map(|(offset, _)| from + offset)
        .find(|&at| !inside_string_literal(&line[..at]))
}

/// Like [`find_plausible_start`], additionally rejecting occurrences glued to
/// a following identifier character.
pub fn find_plausible_end(line: &str, token: &str, from: usize) -> Option<usize> {
    line.get(from..)?
        .match_indices(token)
        .map(|(offset, _)| from + offset)
        .find(|&at| {
            !inside_string_literal(&line[..at]) && !identifier_follows(&line[at + token.len()..])
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_balance() {
        assert!(!inside_string_literal(""));
        assert!(!inside_string_literal("let s = \"done\"; "));
        assert!(inside_string_literal("let s = \"open "));
        assert!(inside_string_literal("x = 'a"));
        // Mixed quote kinds are counted together
        assert!(!inside_string_literal("\"it's\" '"));
    }

    #[test]
    fn test_identifier_follows() {
        assert!(identifier_follows("x"));
        assert!(identifier_follows("_tail"));
        assert!(identifier_follows("9"));
        assert!(!identifier_follows(""));
        assert!(!identifier_follows(" const x = 1;"));
        assert!(!identifier_follows(";"));
    }

    #[test]
    fn test_comment_shaped_lines() {
        assert!(looks_like_comment_line(""));
        assert!(looks_like_comment_line("   \t"));
        assert!(looks_like_comment_line("  * body"));
        assert!(looks_like_comment_line("// note"));
        assert!(looks_like_comment_line("# heading"));
        assert!(!looks_like_comment_line("let x = 1;"));
        assert!(!looks_like_comment_line("Plain docstring prose"));
    }

    #[test]
    fn test_line_comment_run() {
        let lines = ["// one", "  // two", "code();", "// lone"];
        assert!(in_line_comment_run(&lines, 0));
        assert!(in_line_comment_run(&lines, 1));
        assert!(!in_line_comment_run(&lines, 2));
        assert!(!in_line_comment_run(&lines, 3));
        assert!(!in_line_comment_run(&lines, 10));
    }

    #[test]
    fn test_find_start_skips_string_literal() {
        let line = r#"let s = "/* no"; /* yes"#;
        assert_eq!(find_plausible_start(line, "/*", 0), Some(17));
        assert_eq!(find_plausible_start(r#"x = "/* open"#, "/*", 0), None);
    }

    #[test]
    fn test_find_end_rejects_identifier_adjacency() {
        assert_eq!(find_plausible_end("a */b */", "*/", 0), Some(6));
        assert_eq!(find_plausible_end(" */ next();", "*/", 0), Some(1));
        assert_eq!(find_plausible_end("a*/b", "*/", 0), None);
    }

    #[test]
    fn test_find_end_respects_from() {
        // "/*/" must not close itself
        assert_eq!(find_plausible_end("/*/", "*/", 2), None);
        assert_eq!(find_plausible_end("/**/", "*/", 2), Some(2));
        assert_eq!(find_plausible_end("ab", "*/", 5), None);
    }
}
