//! File system abstraction layer
//!
//! Trait-based seam over the platform file primitives (stat, open,
//! positioned read, whole-file read/write, close), enabling dependency
//! injection and failure-path testing through an in-memory implementation.
//! Errors are plain `std::io::Error` so unrecognized conditions pass through
//! to callers unmodified.

use std::io;
use std::io::SeekFrom;
use std::path::Path;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

// ============================================================================
// File Metadata
// ============================================================================

/// Simplified, testable alternative to `std::fs::Metadata`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsMetadata {
    /// File size in bytes
    pub len: u64,
    /// Whether the path names a regular file
    pub is_file: bool,
}

// ============================================================================
// File System Traits
// ============================================================================

/// An open file handle supporting positioned reads
#[async_trait]
pub trait FsHandle: Send {
    /// Read up to `buf.len()` bytes starting at absolute byte position `pos`
    ///
    /// Returns the number of bytes actually read; fewer than requested means
    /// end of file was reached (or the file shrank underneath the read).
    async fn read_at(&mut self, buf: &mut [u8], pos: u64) -> io::Result<usize>;

    /// Release the handle
    async fn close(self: Box<Self>) -> io::Result<()>;
}

/// Trait for the file system operations the pipelines consume
#[async_trait]
pub trait Fs: Send + Sync {
    /// Get size and file-kind information for a path
    async fn stat(&self, path: &Path) -> io::Result<FsMetadata>;

    /// Open a file for reading
    async fn open(&self, path: &Path) -> io::Result<Box<dyn FsHandle>>;

    /// Read an entire file as bytes
    async fn read_full(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Overwrite a file with exactly the given bytes
    async fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

// ============================================================================
// Tokio File System Implementation
// ============================================================================

/// Real file system implementation backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

struct TokioHandle {
    file: tokio::fs::File,
}

#[async_trait]
impl FsHandle for TokioHandle {
    async fn read_at(&mut self, buf: &mut [u8], pos: u64) -> io::Result<usize> {
        self.file.seek(SeekFrom::Start(pos)).await?;

        // A single read may return less than the buffer even mid-file, so
        // keep filling until EOF or the buffer is full.
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.file.read(&mut buf[filled..]).await?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        Ok(filled)
    }

    async fn close(self: Box<Self>) -> io::Result<()> {
        drop(self.file);
        Ok(())
    }
}

#[async_trait]
impl Fs for TokioFs {
    async fn stat(&self, path: &Path) -> io::Result<FsMetadata> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(FsMetadata {
            len: metadata.len(),
            is_file: metadata.is_file(),
        })
    }

    async fn open(&self, path: &Path) -> io::Result<Box<dyn FsHandle>> {
        let file = tokio::fs::File::open(path).await?;
        Ok(Box::new(TokioHandle { file }))
    }

    async fn read_full(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, bytes).await
    }
}

// ============================================================================
// Test File System Implementation
// ============================================================================


#[cfg(test)]
pub use test_fs::{TestFs, TestFsFailures};

// ============================================================================
// Tests
// ============================================================================
