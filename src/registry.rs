//! Block comment delimiters per language
//!
//! The registry is plain data: a language id maps to the ordered list of
//! `(start, end)` delimiter pairs that open and close a block comment in that
//! language. Scanning and extraction only ever see the pattern list, so adding
//! a language is a table entry, never a code change.
//!
//! Language ids follow editor conventions (`typescript`, `javascriptreact`,
//! `csharp`, ...). See [`crate::language::Language::id`] for the mapping from
//! file extensions.

use std::borrow::Cow;

use serde::Serialize;

use crate::error::{Error, Result};

/// A block comment delimiter pair, such as `/*` and `*/`.
///
/// Both delimiters are non-empty. Symmetric pairs (start equal to end, as in
/// Python's triple quotes) are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CommentPattern {
    pub start: Cow<'static, str>,
    pub end: Cow<'static, str>,
}

impl CommentPattern {
    /// Build a pattern from owned or borrowed delimiters.
    ///
    /// Returns [`Error::EmptyDelimiter`] if either side is empty.
    pub fn new(start: impl Into<Cow<'static, str>>, end: impl Into<Cow<'static, str>>) -> Result<Self> {
        let start = start.into();
        let end = end.into();
        if start.is_empty() || end.is_empty() {
            return Err(Error::EmptyDelimiter);
        }
        Ok(Self { start, end })
    }

    /// Pattern over string literals, usable in `const` tables.
    ///
    /// Callers are responsible for passing non-empty delimiters.
    pub const fn from_static(start: &'static str, end: &'static str) -> Self {
        Self {
            start: Cow::Borrowed(start),
            end: Cow::Borrowed(end),
        }
    }

    /// Whether the opening and closing delimiters are the same text.
    pub fn is_symmetric(&self) -> bool {
        self.start == self.end
    }
}

const C_STYLE: &[CommentPattern] = &[CommentPattern::from_static("/*", "*/")];
const MARKUP: &[CommentPattern] = &[CommentPattern::from_static("<!--", "-->")];
const TRIPLE_QUOTED: &[CommentPattern] = &[
    CommentPattern::from_static("\"\"\"", "\"\"\""),
    CommentPattern::from_static("'''", "'''"),
];

/// Built-in language table, in no particular order.
pub static BUILTIN_PATTERNS: &[(&str, &[CommentPattern])] = &[
    ("typescript", C_STYLE),
    ("javascript", C_STYLE),
    ("typescriptreact", C_STYLE),
    ("javascriptreact", C_STYLE),
    ("java", C_STYLE),
    ("c", C_STYLE),
    ("cpp", C_STYLE),
    ("csharp", C_STYLE),
    ("go", C_STYLE),
    ("rust", C_STYLE),
    ("php", C_STYLE),
    ("swift", C_STYLE),
    ("kotlin", C_STYLE),
    ("scala", C_STYLE),
    ("python", TRIPLE_QUOTED),
    ("html", MARKUP),
    ("xml", MARKUP),
    ("css", C_STYLE),
    ("scss", C_STYLE),
    ("less", C_STYLE),
    ("sql", C_STYLE),
];

/// Look up the built-in patterns for a language id.
///
/// Unknown ids yield an empty slice.
pub fn patterns_for(language_id: &str) -> &'static [CommentPattern] {
    BUILTIN_PATTERNS
        .iter()
        .find(|(id, _)| *id == language_id)
        .map(|(_, patterns)| *patterns)
        .unwrap_or(&[])
}

/// A language table that can be extended at startup.
///
/// Starts from [`BUILTIN_PATTERNS`] and accepts extra entries; lookups behave
/// like [`patterns_for`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<(String, Vec<CommentPattern>)>,
}

impl Registry {
    /// An empty registry with no languages.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in table.
    pub fn builtin() -> Self {
        let entries = BUILTIN_PATTERNS
            .iter()
            .map(|(id, patterns)| (id.to_string(), patterns.to_vec()))
            .collect();
        Self { entries }
    }

    /// Patterns for a language, in registration order.
    pub fn patterns_for(&self, language_id: &str) -> &[CommentPattern] {
        self.entries
            .iter()
            .find(|(id, _)| id == language_id)
            .map(|(_, patterns)| patterns.as_slice())
            .unwrap_or(&[])
    }

    pub fn supports(&self, language_id: &str) -> bool {
        !self.patterns_for(language_id).is_empty()
    }

    /// Append a pattern to a language, creating the language if needed.
    ///
    /// Existing patterns keep priority over the new one.
    pub fn register(&mut self, language_id: &str, pattern: CommentPattern) {
        match self.entries.iter_mut().find(|(id, _)| id == language_id) {
            Some((_, patterns)) => {
                if !patterns.contains(&pattern) {
                    patterns.push(pattern);
                }
            }
            None => self.entries.push((language_id.to_string(), vec![pattern])),
        }
    }

    /// Registered languages with their patterns, sorted by id.
    pub fn languages(&self) -> Vec<(&str, &[CommentPattern])> {
        let mut langs: Vec<_> = self
            .entries
            .iter()
            .map(|(id, patterns)| (id.as_str(), patterns.as_slice()))
            .collect();
        langs.sort_by_key(|(id, _)| *id);
        langs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_languages_registered() {
        for lang in [
            "typescript", "javascript", "java", "python", "c", "cpp", "csharp", "go", "rust",
            "php", "html", "css",
        ] {
            assert!(!patterns_for(lang).is_empty(), "missing patterns for {}", lang);
        }
    }

    #[test]
    fn test_every_language_has_a_pattern() {
        for (id, patterns) in BUILTIN_PATTERNS {
            assert!(!patterns.is_empty(), "{} has no patterns", id);
            for p in patterns.iter() {
                assert!(!p.start.is_empty() && !p.end.is_empty());
            }
        }
    }

    #[test]
    fn test_python_pattern_order() {
        let patterns = patterns_for("python");
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].start, "\"\"\"");
        assert_eq!(patterns[1].start, "'''");
        assert!(patterns[0].is_symmetric());
    }

    #[test]
    fn test_unknown_language_is_empty() {
        assert!(patterns_for("unsupported-language").is_empty());
        assert!(!Registry::builtin().supports("brainfuck"));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        assert!(matches!(
            CommentPattern::new("", "*/"),
            Err(Error::EmptyDelimiter)
        ));
        assert!(CommentPattern::new("{-", "-}").is_ok());
    }

    #[test]
    fn test_register_appends_after_builtin() {
        let mut registry = Registry::builtin();
        let extra = CommentPattern::new("/+", "+/").unwrap();
        registry.register("rust", extra.clone());
        let patterns = registry.patterns_for("rust");
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].start, "/*");
        assert_eq!(patterns[1], extra);

        // Registering the same pair twice is a no-op
        registry.register("rust", extra);
        assert_eq!(registry.patterns_for("rust").len(), 2);
    }

    #[test]
    fn test_register_new_language() {
        let mut registry = Registry::new();
        assert!(!registry.supports("haskell"));
        registry.register("haskell", CommentPattern::new("{-", "-}").unwrap());
        assert!(registry.supports("haskell"));
        assert_eq!(registry.languages().len(), 1);
    }

    #[test]
    fn test_languages_sorted() {
        let registry = Registry::builtin();
        let ids: Vec<&str> = registry.languages().iter().map(|(id, _)| *id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), BUILTIN_PATTERNS.len());
    }
}
