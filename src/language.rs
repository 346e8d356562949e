//! Programming language detection
//!
//! Maps file extensions to the language ids used as keys in the
//! [`crate::registry`] table. Only languages with block comments are listed.

use std::path::Path;

/// Languages with a built-in block comment table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    TypeScriptReact,
    JavaScript,
    JavaScriptReact,
    Java,
    C,
    Cpp,
    CSharp,
    Go,
    Rust,
    PHP,
    Swift,
    Kotlin,
    Scala,
    Python,
    Html,
    Xml,
    Css,
    Scss,
    Less,
    Sql,
}

impl Language {
    /// Detect language from a file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use commark::language::Language;
    ///
    /// assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
    /// assert_eq!(Language::from_extension("py"), Some(Language::Python));
    /// assert_eq!(Language::from_extension("jsx"), Some(Language::JavaScriptReact));
    /// assert_eq!(Language::from_extension("unknown"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "ts" | "mts" | "cts" => Some(Language::TypeScript),
            "tsx" => Some(Language::TypeScriptReact),
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            "jsx" => Some(Language::JavaScriptReact),
            "java" => Some(Language::Java),
            "c" | "h" => Some(Language::C),
            "cpp" | "cxx" | "cc" | "hpp" | "hxx" | "hh" => Some(Language::Cpp),
            "cs" => Some(Language::CSharp),
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            "php" => Some(Language::PHP),
            "swift" => Some(Language::Swift),
            "kt" | "kts" => Some(Language::Kotlin),
            "scala" | "sc" => Some(Language::Scala),
            "py" | "pyw" | "pyi" => Some(Language::Python),
            "html" | "htm" => Some(Language::Html),
            "xml" | "svg" | "xsd" | "xsl" => Some(Language::Xml),
            "css" => Some(Language::Css),
            "scss" => Some(Language::Scss),
            "less" => Some(Language::Less),
            "sql" => Some(Language::Sql),
            _ => None,
        }
    }

    /// Detect language from a file path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use commark::language::Language;
    ///
    /// assert_eq!(Language::from_path(Path::new("main.rs")), Some(Language::Rust));
    /// assert_eq!(Language::from_path(Path::new("README.md")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// The registry key for this language.
    pub fn id(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::TypeScriptReact => "typescriptreact",
            Language::JavaScript => "javascript",
            Language::JavaScriptReact => "javascriptreact",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::PHP => "php",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Scala => "scala",
            Language::Python => "python",
            Language::Html => "html",
            Language::Xml => "xml",
            Language::Css => "css",
            Language::Scss => "scss",
            Language::Less => "less",
            Language::Sql => "sql",
        }
    }

    /// Returns the human-readable name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::TypeScriptReact => "TypeScript JSX",
            Language::JavaScript => "JavaScript",
            Language::JavaScriptReact => "JavaScript JSX",
            Language::Java => "Java",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::PHP => "PHP",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Scala => "Scala",
            Language::Python => "Python",
            Language::Html => "HTML",
            Language::Xml => "XML",
            Language::Css => "CSS",
            Language::Scss => "SCSS",
            Language::Less => "Less",
            Language::Sql => "SQL",
        }
    }
}
