//! Newline detection, normalization and line sequence helpers
//!
//! Detection reports the style the decoded text originally used; the
//! normalization to LF always runs afterwards so downstream consumers only
//! ever see LF-separated text.

use std::borrow::Cow;

use crate::options::NewlineStyle;

/// Detect the line separator style of decoded (pre-normalization) text
///
/// CRLF is checked first so a Windows file is not misreported as CR or LF;
/// content with no separator at all reports no style.
pub(crate) fn detect_style(text: &str) -> Option<NewlineStyle> {
    if text.contains("\r\n") {
        Some(NewlineStyle::CrLf)
    } else if text.contains('\r') {
        Some(NewlineStyle::Cr)
    } else if text.contains('\n') {
        Some(NewlineStyle::Lf)
    } else {
        None
    }
}

/// Rewrite all CRLF and remaining CR occurrences to LF
pub(crate) fn normalize(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Rewrite every LF to the requested separator (inverse of [`normalize`])
pub(crate) fn denormalize(text: &str, style: NewlineStyle) -> Cow<'_, str> {
    match style {
        NewlineStyle::Lf => Cow::Borrowed(text),
        other => Cow::Owned(text.replace('\n', other.as_str())),
    }
}

/// Split normalized text into its line sequence
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Join a line sequence with LF, inserting no trailing separator
pub(crate) fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests
// ============================================================================
