//! Encoding- and newline-aware text file I/O
//!
//! Reading a text file through this crate hides three concerns from the
//! caller: character encoding (detected statistically, decoded to UTF-8),
//! line-ending style (detected, then normalized so the returned text is
//! always LF-separated), and partial reads ("head", "tail" or an arbitrary
//! byte window) that never surface half a line. Writing applies the inverse
//! transform: newline denormalization, encoding, and optional BOM emission.
//!
//! Every read returns the decoded text together with a [`TextFileOptions`]
//! describing the file's original on-disk properties; the same type
//! specifies the desired properties for a write, with absent fields filled
//! from the defaults (UTF-8, LF, no BOM).
//!
//! ```no_run
//! use textfile::TextFileOptions;
//!
//! # async fn demo() -> Result<(), textfile::TextFileError> {
//! // Tail of a log file, complete lines only.
//! let (text, options) = textfile::read_tail("app.log", 4096).await?;
//! println!("{text} (encoding: {:?})", options.encoding);
//!
//! // Write back with Windows line endings.
//! let options = TextFileOptions {
//!     newline: Some(textfile::NewlineStyle::CrLf),
//!     ..TextFileOptions::default()
//! };
//! textfile::write("out.txt", "a\nb\n", options).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Binary content (anything containing a NUL byte) is rejected with
//! [`TextFileError::NotText`] before any decoding is attempted.

mod encoding;
mod error;
mod file;
mod fs;
mod newline;
mod options;
mod range;
mod window;

pub use error::TextFileError;
pub use file::{
    TextFile, read, read_head, read_lines, read_range, read_tail, write, write_lines,
};
pub use fs::{Fs, FsHandle, FsMetadata, TokioFs};
pub use options::{NewlineStyle, TextFileOptions};
