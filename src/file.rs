//! Read and write orchestration
//!
//! The read pipeline sequences stat → range resolution → open → exact-length
//! read → binary gate → line trimming → encoding detection → decode →
//! newline normalization → close, producing the decoded text plus a
//! descriptor of the file's original textual properties. The write pipeline
//! is the mirror image: option defaulting → newline denormalization →
//! encoding (with BOM) → whole-file overwrite.
//!
//! No state is held between calls; arbitrarily many calls may run
//! concurrently against different files. Concurrent access to the same file
//! is not coordinated.

use std::path::Path;

use tracing::{debug, trace};

use crate::encoding;
use crate::encoding::codec;
use crate::error::TextFileError;
use crate::fs::{Fs, FsHandle, TokioFs};
use crate::newline;
use crate::options::TextFileOptions;
use crate::range::{self, RangeOutcome};
use crate::window;

// ============================================================================
// Text File
// ============================================================================

/// Encoding- and newline-aware text file operations
///
/// Parameterized over the [`Fs`] seam; [`TextFile::new`] uses the real
/// tokio-backed filesystem.
#[derive(Debug, Clone, Default)]
pub struct TextFile<F: Fs = TokioFs> {
    fs: F,
}

impl TextFile<TokioFs> {
    pub fn new() -> Self {
        Self { fs: TokioFs }
    }
}

impl<F: Fs> TextFile<F> {
    /// Build against a custom filesystem implementation
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    // ------------------------------------------------------------------------
    // Read operations
    // ------------------------------------------------------------------------

    /// Read an entire text file
    ///
    /// Returns the LF-normalized text and a descriptor of the encoding,
    /// newline style and BOM presence observed on disk.
    pub async fn read(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(String, TextFileOptions), TextFileError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading text file");

        let bytes = self.fs.read_full(path).await?;

        if let Some(position) = window::find_nul(&bytes) {
            return Err(TextFileError::NotText {
                path: path.to_path_buf(),
                position,
            });
        }

        if bytes.is_empty() {
            return Ok((String::new(), TextFileOptions::default()));
        }

        Ok(decode_window(&bytes))
    }

    /// Read a byte range of a text file without splitting lines
    ///
    /// A negative `offset` is tail-relative (the final `abs(offset)` bytes;
    /// `length` is then ignored). `trim_start` drops an incomplete leading
    /// line and `trim_end` an incomplete trailing line; both are suppressed
    /// automatically when the window touches the corresponding end of the
    /// file, where no incomplete line can exist.
    pub async fn read_range(
        &self,
        path: impl AsRef<Path>,
        offset: i64,
        length: u64,
        trim_start: bool,
        trim_end: bool,
    ) -> Result<(String, TextFileOptions), TextFileError> {
        let path = path.as_ref();
        debug!(
            path = %path.display(),
            offset, length, trim_start, trim_end,
            "reading text file range"
        );

        let metadata = self.fs.stat(path).await?;
        if !metadata.is_file {
            return Err(TextFileError::IsDirectory {
                path: path.to_path_buf(),
            });
        }

        let total = metadata.len;
        let (start, len) = match range::resolve(offset, length, total) {
            RangeOutcome::Empty => return Ok((String::new(), TextFileOptions::default())),
            RangeOutcome::OutOfRange => {
                return Err(TextFileError::OutOfRange {
                    path: path.to_path_buf(),
                    offset,
                    total,
                });
            }
            RangeOutcome::Window { start, len } => (start, len),
        };
        trace!(start, len, total, "resolved byte window");

        let mut handle = self.fs.open(path).await?;

        let mut buf = vec![0u8; len as usize];
        let read = match handle.read_at(&mut buf, start).await {
            Ok(read) => read,
            Err(err) => {
                return Err(close_unwinding(handle, path, TextFileError::Io(err)).await);
            }
        };

        if read != buf.len() {
            let cause = TextFileError::ShortRead {
                path: path.to_path_buf(),
                expected: buf.len(),
                actual: read,
            };
            return Err(close_unwinding(handle, path, cause).await);
        }

        // The gate inspects the raw window before trimming: a NUL inside a
        // portion that trimming would discard still rejects the read.
        if let Some(position) = window::find_nul(&buf) {
            let cause = TextFileError::NotText {
                path: path.to_path_buf(),
                position,
            };
            return Err(close_unwinding(handle, path, cause).await);
        }

        // At a true file boundary there is no incomplete line to trim.
        let trim_start = trim_start && start != 0;
        let trim_end = trim_end && start + len != total;
        let trimmed = window::trim_to_line_boundaries(&buf, trim_start, trim_end);

        let result = if trimmed.is_empty() {
            (String::new(), TextFileOptions::default())
        } else {
            decode_window(trimmed)
        };

        close_after_success(handle, path).await?;
        Ok(result)
    }

    /// Read up to `length` bytes from the start of the file
    ///
    /// An incomplete final line (one whose separator lies past the requested
    /// length) is discarded.
    pub async fn read_head(
        &self,
        path: impl AsRef<Path>,
        length: u64,
    ) -> Result<(String, TextFileOptions), TextFileError> {
        self.read_range(path, 0, length, false, true).await
    }

    /// Read the final `length` bytes of the file
    ///
    /// An incomplete first line is discarded. Note the first line is dropped
    /// even when the window happens to start exactly at a line's first byte:
    /// the bytes before the window are never examined, so its completeness
    /// cannot be known.
    pub async fn read_tail(
        &self,
        path: impl AsRef<Path>,
        length: u64,
    ) -> Result<(String, TextFileOptions), TextFileError> {
        let offset = -i64::try_from(length).unwrap_or(i64::MAX);
        self.read_range(path, offset, 0, true, false).await
    }

    /// Read a text file as a sequence of lines
    ///
    /// A missing file is not an error: it yields `None` (any other failure
    /// propagates). Empty content yields an empty sequence.
    pub async fn read_lines(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(Option<Vec<String>>, TextFileOptions), TextFileError> {
        match self.read(path).await {
            Ok((text, options)) => {
                let lines = if text.is_empty() {
                    Vec::new()
                } else {
                    newline::split_lines(&text)
                };
                Ok((Some(lines), options))
            }
            Err(err) if err.is_not_found() => Ok((None, TextFileOptions::default())),
            Err(err) => Err(err),
        }
    }

    // ------------------------------------------------------------------------
    // Write operations
    // ------------------------------------------------------------------------

    /// Write LF-normalized text to a file, overwriting prior content
    ///
    /// Fields absent from `options` are filled from the defaults (UTF-8, LF,
    /// no BOM). An `"ascii"` encoding request is upgraded to UTF-8: a file
    /// that is pure ASCII today may gain non-ASCII characters in a later
    /// edit, so the byte encoding never commits to ASCII.
    pub async fn write(
        &self,
        path: impl AsRef<Path>,
        text: &str,
        options: TextFileOptions,
    ) -> Result<(), TextFileError> {
        let path = path.as_ref();
        let resolved = options.resolve_for_write();

        let body = newline::denormalize(text, resolved.newline);

        let encoding_name = if resolved.encoding.eq_ignore_ascii_case("ascii") {
            "UTF-8"
        } else {
            resolved.encoding.as_str()
        };
        debug!(
            path = %path.display(),
            encoding = encoding_name,
            newline = ?resolved.newline,
            bom = resolved.bom,
            "writing text file"
        );

        let bytes = codec::encode(&body, encoding_name, resolved.bom);
        self.fs.write(path, &bytes).await?;
        Ok(())
    }

    /// Write a sequence of lines, joined with LF and no trailing separator
    pub async fn write_lines<S: AsRef<str>>(
        &self,
        path: impl AsRef<Path>,
        lines: &[S],
        options: TextFileOptions,
    ) -> Result<(), TextFileError> {
        let text = newline::join_lines(lines);
        self.write(path, &text, options).await
    }
}

// ============================================================================
// Pipeline Helpers
// ============================================================================

/// Detect encoding and BOM, decode, and normalize newlines for one window
fn decode_window(bytes: &[u8]) -> (String, TextFileOptions) {
    let detected = encoding::detect(bytes);
    let bom = encoding::has_bom(bytes, detected.as_deref());

    let text = codec::decode(bytes, detected.as_deref());

    // Newline detection looks at the decoded text before normalization;
    // the descriptor reports the original style, the text never keeps it.
    let newline_style = newline::detect_style(&text);
    let text = newline::normalize(text);

    trace!(encoding = ?detected, newline = ?newline_style, bom, "decoded window");
    (
        text,
        TextFileOptions {
            encoding: detected,
            newline: newline_style,
            bom,
        },
    )
}

/// Close while unwinding from `cause`
///
/// A close failure must not silently replace the error that triggered the
/// unwind, so both are carried in the composite variant.
async fn close_unwinding(
    handle: Box<dyn FsHandle>,
    path: &Path,
    cause: TextFileError,
) -> TextFileError {
    match handle.close().await {
        Ok(()) => cause,
        Err(source) => TextFileError::Close {
            path: path.to_path_buf(),
            source,
            cause: Some(Box::new(cause)),
        },
    }
}

/// Close after a successful pipeline run
async fn close_after_success(handle: Box<dyn FsHandle>, path: &Path) -> Result<(), TextFileError> {
    handle.close().await.map_err(|source| TextFileError::Close {
        path: path.to_path_buf(),
        source,
        cause: None,
    })
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Read an entire text file. See [`TextFile::read`].
pub async fn read(
    path: impl AsRef<Path>,
) -> Result<(String, TextFileOptions), TextFileError> {
    TextFile::new().read(path).await
}

/// Read a byte range of a text file. See [`TextFile::read_range`].
pub async fn read_range(
    path: impl AsRef<Path>,
    offset: i64,
    length: u64,
    trim_start: bool,
    trim_end: bool,
) -> Result<(String, TextFileOptions), TextFileError> {
    TextFile::new()
        .read_range(path, offset, length, trim_start, trim_end)
        .await
}

/// Read the head of a text file. See [`TextFile::read_head`].
pub async fn read_head(
    path: impl AsRef<Path>,
    length: u64,
) -> Result<(String, TextFileOptions), TextFileError> {
    TextFile::new().read_head(path, length).await
}

/// Read the tail of a text file. See [`TextFile::read_tail`].
pub async fn read_tail(
    path: impl AsRef<Path>,
    length: u64,
) -> Result<(String, TextFileOptions), TextFileError> {
    TextFile::new().read_tail(path, length).await
}

/// Read a text file as lines. See [`TextFile::read_lines`].
pub async fn read_lines(
    path: impl AsRef<Path>,
) -> Result<(Option<Vec<String>>, TextFileOptions), TextFileError> {
    TextFile::new().read_lines(path).await
}

/// Write text to a file. See [`TextFile::write`].
pub async fn write(
    path: impl AsRef<Path>,
    text: &str,
    options: TextFileOptions,
) -> Result<(), TextFileError> {
    TextFile::new().write(path, text, options).await
}

/// Write lines to a file. See [`TextFile::write_lines`].
pub async fn write_lines<S: AsRef<str>>(
    path: impl AsRef<Path>,
    lines: &[S],
    options: TextFileOptions,
) -> Result<(), TextFileError> {
    TextFile::new().write_lines(path, lines, options).await
}

// ============================================================================
// Tests
// ============================================================================
