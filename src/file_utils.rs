//! Reading source files for scanning
//!
//! Size limits are passed in explicitly; nothing here keeps process-wide
//! settings.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Default maximum file size for scanning (1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_000_000;

/// Read a UTF-8 source file no larger than `max_size` bytes.
///
/// # Errors
///
/// [`Error::FileTooLarge`] if the file exceeds `max_size`, [`Error::Io`] if
/// it cannot be read or is not valid UTF-8.
pub fn read_source_file(path: &Path, max_size: u64) -> Result<String> {
    let size = fs::metadata(path)?.len();
    if size > max_size {
        return Err(Error::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_size,
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
pub fn parse_file_size(s: &str) -> Result<u64> {
    let invalid = |reason: &str| Error::InvalidSize {
        input: s.to_string(),
        reason: reason.to_string(),
    };

    let upper = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = upper.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = upper.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = upper.strip_suffix('B') {
        (n, 1)
    } else {
        (upper.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| invalid("expected a number with an optional K, M or G suffix"))?;
    num.checked_mul(multiplier)
        .ok_or_else(|| invalid("size is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_file_size() {
        assert_eq!(parse_file_size("100").unwrap(), 100);
        assert_eq!(parse_file_size("2K").unwrap(), 2048);
        assert_eq!(parse_file_size("1mb").unwrap(), 1024 * 1024);
        assert_eq!(parse_file_size(" 3G ").unwrap(), 3 * 1024 * 1024 * 1024);
        assert_eq!(parse_file_size("10B").unwrap(), 10);
    }

    #[test]
    fn test_parse_file_size_invalid() {
        assert!(matches!(
            parse_file_size("lots"),
            Err(Error::InvalidSize { .. })
        ));
        assert!(parse_file_size("").is_err());
        assert!(parse_file_size("99999999999999999999G").is_err());
    }

    #[test]
    fn test_read_source_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.c");
        fs::write(&path, "/* hi */").unwrap();
        assert_eq!(read_source_file(&path, 100).unwrap(), "/* hi */");
    }

    #[test]
    fn test_read_source_file_too_large() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.c");
        fs::write(&path, "x".repeat(64)).unwrap();
        assert!(matches!(
            read_source_file(&path, 10),
            Err(Error::FileTooLarge { size: 64, limit: 10, .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_source_file(Path::new("/definitely/not/here.rs"), 100).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
