//! Multi-file scanning
//!
//! Expands the paths given on the command line into source files (walking
//! directories with `.gitignore` support), then lists the block comments of
//! each file in parallel. Each file is scanned independently; results come
//! back in path order.

use std::path::{Path, PathBuf};

use glob::Pattern;
use ignore::WalkBuilder;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::buffer::SourceBuffer;
use crate::error::{Error, Result};
use crate::file_utils::{DEFAULT_MAX_FILE_SIZE, read_source_file};
use crate::language::Language;
use crate::query::{CommentDoc, collect_docs};
use crate::registry::Registry;
use crate::scanner::ScanLimits;

/// Configuration for multi-file scans.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Honour `.gitignore`, `.ignore` and hidden-file rules when walking directories
    pub respect_ignore: bool,
    /// Glob patterns matched against file and directory names
    pub ignore_patterns: Vec<String>,
    /// Number of parallel workers.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential
    /// N = use N worker threads
    pub parallel_workers: usize,
    pub max_file_size: u64,
    pub limits: ScanLimits,
    /// Language id used for every file instead of extension detection
    pub language: Option<String>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            respect_ignore: true,
            ignore_patterns: Vec::new(),
            parallel_workers: 0,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            limits: ScanLimits::unbounded(),
            language: None,
        }
    }
}

/// The block comments found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: String,
    pub comments: Vec<CommentDoc>,
}

/// Language id for a file: the override if given, else detected from the
/// extension.
///
/// # Errors
///
/// [`Error::UnknownLanguage`] if there is no override and the extension is not
/// recognized.
pub fn language_id_for(path: &Path, language: Option<&str>) -> Result<String> {
    if let Some(id) = language {
        return Ok(id.to_string());
    }
    Language::from_path(path)
        .map(|lang| lang.id().to_string())
        .ok_or_else(|| Error::UnknownLanguage {
            path: path.to_path_buf(),
        })
}

/// Expand `roots` into a sorted, de-duplicated list of files to scan.
///
/// Files named directly are always kept. Files found by walking a directory
/// are kept if their language is known (or an override is set) and no ignore
/// pattern matches their name or a parent directory name.
pub fn collect_source_files(roots: &[PathBuf], config: &WalkConfig) -> Vec<PathBuf> {
    let patterns: Vec<Pattern> = config
        .ignore_patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!(pattern = %p, "ignoring invalid glob: {}", e);
                None
            }
        })
        .collect();

    let mut files = Vec::new();
    for root in roots {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        if !root.is_dir() {
            warn!(path = %root.display(), "no such file or directory");
            continue;
        }

        let entry_patterns = patterns.clone();
        let walker = WalkBuilder::new(root)
            .hidden(config.respect_ignore)
            .ignore(config.respect_ignore)
            .git_ignore(config.respect_ignore)
            .git_global(config.respect_ignore)
            .git_exclude(config.respect_ignore)
            .follow_links(false)
            .filter_entry(move |entry| !is_ignored_name(entry.path(), &entry_patterns))
            .build();

        for entry in walker.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if config.language.is_none() && Language::from_path(path).is_none() {
                continue;
            }
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files.dedup();
    debug!(count = files.len(), "collected source files");
    files
}

/// Check if a path should be skipped based on its name and ignore patterns.
fn is_ignored_name(path: &Path, patterns: &[Pattern]) -> bool {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    // Always ignore .git directory
    if name == ".git" {
        return true;
    }
    patterns.iter().any(|p| p.as_str() == name || p.matches(&name))
}

/// List the block comments of one file.
pub fn scan_file(path: &Path, registry: &Registry, config: &WalkConfig) -> Result<FileReport> {
    let language = language_id_for(path, config.language.as_deref())?;
    let text = read_source_file(path, config.max_file_size)?;
    let buffer = SourceBuffer::new(&text);
    let comments = collect_docs(registry, &buffer, &language, config.limits).ok_or_else(|| {
        Error::UnknownLanguage {
            path: path.to_path_buf(),
        }
    })?;
    Ok(FileReport {
        path: path.to_path_buf(),
        language,
        comments,
    })
}

/// Scan many files in parallel. Results are in the order of `paths`.
pub fn scan_files(
    paths: &[PathBuf],
    registry: &Registry,
    config: &WalkConfig,
) -> Vec<Result<FileReport>> {
    let scan_all = || -> Vec<Result<FileReport>> {
        paths
            .par_iter()
            .map(|path| scan_file(path, registry, config))
            .collect()
    };

    if config.parallel_workers == 0 {
        // Auto-detect: use rayon's default thread pool
        return scan_all();
    }
    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallel_workers)
        .build()
    {
        Ok(pool) => pool.install(scan_all),
        Err(e) => {
            // Fall back to rayon's global pool if custom pool creation fails
            debug!("custom thread pool unavailable: {}", e);
            scan_all()
        }
    }
}
