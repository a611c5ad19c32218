//! Character encoding detection and byte-order-mark inspection
//!
//! Detection runs the statistical charset detector once per window and
//! applies a confidence policy to its answer. The detector is treated as an
//! opaque collaborator: this module only decides whether to believe it.

pub(crate) mod codec;

use tracing::trace;

use crate::encoding::codec::UTF8_BOM;

// ============================================================================
// Detection Policy
// ============================================================================

/// Minimum confidence required to accept a Western single-byte classification
///
/// Short UTF-8 text is frequently misclassified as one of these code pages
/// well below this threshold (a snippet like "über\n" scores ISO-8859-1 at
/// around 0.73), and decoding UTF-8 bytes through a Latin code page produces
/// mojibake. The stricter threshold applies to this family only.
const WESTERN_SINGLE_BYTE_MIN_CONFIDENCE: f32 = 0.99;

/// Detect the character encoding of a byte window
///
/// Returns `None` when the detector has no candidate or the candidate fails
/// the confidence policy; the decode step then defaults to UTF-8. A pure
/// ASCII classification is reported as UTF-8 outright, since ASCII bytes are a
/// UTF-8 subset and the write side never commits to an ASCII encoding.
pub(crate) fn detect(bytes: &[u8]) -> Option<String> {
    let (name, confidence, _language) = chardet::detect(bytes);
    trace!(charset = %name, confidence, "charset detection result");

    apply_confidence_policy(name, confidence)
}

/// Decide whether a detector candidate is trustworthy enough to report
pub(crate) fn apply_confidence_policy(name: String, confidence: f32) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    if is_western_single_byte(&name) {
        if confidence >= WESTERN_SINGLE_BYTE_MIN_CONFIDENCE {
            Some(name)
        } else {
            None
        }
    } else if name.eq_ignore_ascii_case("ascii") || name.eq_ignore_ascii_case("utf-8-sig") {
        // "ascii" because ASCII bytes are a UTF-8 subset; "UTF-8-SIG" is the
        // detector's name for BOM-prefixed UTF-8 (the mark is reported
        // separately, not as part of the encoding name).
        Some("UTF-8".to_string())
    } else {
        Some(name)
    }
}

// The Western single-byte names the detector's probers emit for Latin
// text: the ISO-8859 series plus the windows-125x code pages.
fn is_western_single_byte(name: &str) -> bool {
    has_prefix(name, "iso-8859-") || has_prefix(name, "windows-125")
}

// ============================================================================
// BOM Inspection
// ============================================================================

/// Whether the window starts with a byte-order mark for the detected encoding
///
/// Only the UTF-8 and UTF-16 families are inspected; files in other
/// encodings occasionally carry a mark too, but rarely enough that the
/// original behavior of not checking them is kept.
pub(crate) fn has_bom(bytes: &[u8], encoding_name: Option<&str>) -> bool {
    let Some(name) = encoding_name else {
        return false;
    };

    if has_prefix(name, "utf-8") {
        bytes.starts_with(&UTF8_BOM)
    } else if has_prefix(name, "utf-16") {
        bytes.starts_with(&[0xFE, 0xFF]) || bytes.starts_with(&[0xFF, 0xFE])
    } else {
        false
    }
}

// Family match by prefix: covers detector spellings like "UTF-8-SIG",
// "UTF-16LE" and "UTF-16BE".
fn has_prefix(name: &str, prefix: &str) -> bool {
    name.trim()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

// ============================================================================
// Tests
// ============================================================================
