//! Error types for text file operations
//!
//! Every failure a read or write pipeline can produce is represented as a
//! distinct variant so callers can match on the condition instead of parsing
//! messages. Unrecognized filesystem errors pass through as [`TextFileError::Io`].

use std::io;
use std::path::PathBuf;

// ============================================================================
// Text File Errors
// ============================================================================

/// Errors produced by the read and write pipelines
#[derive(Debug, thiserror::Error)]
pub enum TextFileError {
    /// Target exists but is not a regular file
    #[error("cannot read a directory: {}", .path.display())]
    IsDirectory { path: PathBuf },

    /// Non-negative offset with no valid bytes left to read
    #[error("offset {offset} is out of range for {} ({total} bytes)", .path.display())]
    OutOfRange {
        path: PathBuf,
        offset: i64,
        total: u64,
    },

    /// Fewer bytes were read than requested
    ///
    /// Treated as corruption or a concurrent-truncation race; never retried.
    #[error("short read from {}: expected {expected} bytes, read {actual}", .path.display())]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    /// A NUL byte was found in the candidate window
    #[error("{} is not a text file (NUL byte at window offset {position})", .path.display())]
    NotText { path: PathBuf, position: usize },

    /// Generic passthrough for stat/open/read/write failures
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Releasing the file handle failed
    ///
    /// When the close happened while unwinding from an earlier pipeline
    /// error, that error is preserved in `cause` so neither failure is lost.
    #[error("failed to close {}: {source}{}", .path.display(), fmt_close_cause(.cause))]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
        cause: Option<Box<TextFileError>>,
    },
}

impl TextFileError {
    /// Stable machine-readable code for this error, when one is defined.
    ///
    /// The binary gate rejection carries `ENOTTEXT`.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            TextFileError::NotText { .. } => Some("ENOTTEXT"),
            _ => None,
        }
    }

    /// True when the underlying cause is a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, TextFileError::Io(err) if err.kind() == io::ErrorKind::NotFound)
    }
}

fn fmt_close_cause(cause: &Option<Box<TextFileError>>) -> String {
    match cause {
        Some(inner) => format!(" (while handling: {inner})"),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_text_carries_stable_code() {
        let err = TextFileError::NotText {
            path: PathBuf::from("/tmp/blob.bin"),
            position: 4,
        };
        assert_eq!(err.code(), Some("ENOTTEXT"));

        let other = TextFileError::IsDirectory {
            path: PathBuf::from("/tmp"),
        };
        assert_eq!(other.code(), None);
    }

    #[test]
    fn test_close_error_preserves_original_cause() {
        let original = TextFileError::ShortRead {
            path: PathBuf::from("/tmp/data.txt"),
            expected: 64,
            actual: 12,
        };
        let err = TextFileError::Close {
            path: PathBuf::from("/tmp/data.txt"),
            source: io::Error::other("descriptor already released"),
            cause: Some(Box::new(original)),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("failed to close"));
        assert!(rendered.contains("short read"));
    }

    #[test]
    fn test_close_error_without_prior_cause() {
        let err = TextFileError::Close {
            path: PathBuf::from("/tmp/data.txt"),
            source: io::Error::other("flush failed"),
            cause: None,
        };
        assert!(!err.to_string().contains("while handling"));
    }

    #[test]
    fn test_not_found_detection() {
        let err = TextFileError::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(err.is_not_found());

        let err = TextFileError::Io(io::Error::other("disk on fire"));
        assert!(!err.is_not_found());
    }
}
