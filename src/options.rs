//! Text file descriptor options
//!
//! [`TextFileOptions`] describes a file's textual properties. On the read
//! side it reports what was observed on disk; on the write side it specifies
//! the desired on-disk form, with absent fields filled from defaults.

// ============================================================================
// Newline Style
// ============================================================================

/// Line separator style of a text file
///
/// Reading normalizes every separator to LF regardless of this value; the
/// style only records what the file originally used (or what a write should
/// emit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewlineStyle {
    /// `\n` (Linux/Unix)
    Lf,
    /// `\r\n` (Windows)
    CrLf,
    /// `\r` (classic Mac OS, rare today)
    Cr,
}

impl NewlineStyle {
    /// The separator characters this style writes to disk
    pub fn as_str(&self) -> &'static str {
        match self {
            NewlineStyle::Lf => "\n",
            NewlineStyle::CrLf => "\r\n",
            NewlineStyle::Cr => "\r",
        }
    }
}

// ============================================================================
// Text File Options
// ============================================================================

/// Observed or desired textual properties of a file
///
/// - `encoding`: character encoding name. Absent after a read when
///   detection was inconclusive (UTF-8 is then the implied interpretation);
///   absent before a write to request the UTF-8 default.
/// - `newline`: original line separator. Absent after a read when the
///   content was empty or contained no separator at all.
/// - `bom`: whether a byte-order mark was present (read) or should be
///   emitted (write). Only meaningful for the UTF-8/UTF-16 families.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFileOptions {
    pub encoding: Option<String>,
    pub newline: Option<NewlineStyle>,
    pub bom: bool,
}

/// Write-side options after merging caller values with defaults
///
/// Defaults: UTF-8, LF, no BOM. Merging is explicit per-field resolution;
/// a field the caller set always wins, including `bom: false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedWriteOptions {
    pub encoding: String,
    pub newline: NewlineStyle,
    pub bom: bool,
}

impl TextFileOptions {
    /// Resolve this descriptor against the write defaults
    pub(crate) fn resolve_for_write(&self) -> ResolvedWriteOptions {
        ResolvedWriteOptions {
            encoding: self.encoding.clone().unwrap_or_else(|| "UTF-8".to_string()),
            newline: self.newline.unwrap_or(NewlineStyle::Lf),
            bom: self.bom,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
