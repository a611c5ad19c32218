//! Binary content gate and line boundary trimming
//!
//! Both operate on the raw bytes of a read window before any decoding. The
//! gate rejects windows that look like binary data; the trimmer shrinks a
//! window so it starts and/or ends on a line boundary, so a partial read
//! never surfaces half a line.

// ============================================================================
// Binary Content Gate
// ============================================================================

/// Position of the first NUL byte in the window, if any
///
/// A NUL byte is the binary sentinel: text in any of the supported
/// ASCII-superset encodings never contains one. The gate runs on the raw,
/// pre-trim bytes so a sentinel inside a portion that trimming would later
/// discard still rejects the window.
pub(crate) fn find_nul(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| b == 0)
}

// ============================================================================
// Line Boundary Trimmer
// ============================================================================

/// Shrink a window so it starts and/or ends on a line boundary
///
/// - `trim_start` drops everything up to and including the first LF; with
///   no LF present the start is left unchanged.
/// - `trim_end` keeps everything up to and including the last LF at or
///   after the (possibly trimmed) start; with no such LF the end is left
///   unchanged.
///
/// The scan works on raw 0x0A bytes, which is only valid for encodings where
/// that byte can never be part of a multi-byte unit (UTF-8 and the 8-bit
/// code pages). UTF-16 windows would need decode-then-trim instead; in
/// practice the binary gate already rejects them via their NUL bytes.
pub(crate) fn trim_to_line_boundaries(
    bytes: &[u8],
    trim_start: bool,
    trim_end: bool,
) -> &[u8] {
    let mut start = 0;
    let mut end = bytes.len();

    if trim_start {
        if let Some(pos) = bytes.iter().position(|&b| b == b'\n') {
            start = pos + 1;
        }
    }

    if trim_end {
        if let Some(pos) = bytes.iter().rposition(|&b| b == b'\n') {
            if pos >= start {
                end = pos + 1;
            }
        }
    }

    &bytes[start..end]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nul_detection() {
        assert_eq!(find_nul(b"plain text"), None);
        assert_eq!(find_nul(b"ab\0cd"), Some(2));
        assert_eq!(find_nul(b"\0"), Some(0));
        assert_eq!(find_nul(b""), None);
    }

    #[test]
    fn test_no_trim_flags_leave_window_unchanged() {
        let bytes = b"partial\nlines\nhere";
        assert_eq!(trim_to_line_boundaries(bytes, false, false), bytes);
    }

    #[test]
    fn test_trim_start_drops_through_first_lf() {
        assert_eq!(trim_to_line_boundaries(b"03\nln04\nln", true, false), b"ln04\nln");
    }

    #[test]
    fn test_trim_end_keeps_through_last_lf() {
        assert_eq!(trim_to_line_boundaries(b"03\nln04\nln", false, true), b"03\nln04\n");
    }

    #[test]
    fn test_trim_both_yields_complete_lines_only() {
        assert_eq!(trim_to_line_boundaries(b"03\nln04\nln", true, true), b"ln04\n");
    }

    #[test]
    fn test_window_without_lf_is_untouched() {
        let bytes = b"no separator at all";
        assert_eq!(trim_to_line_boundaries(bytes, true, true), bytes);
    }

    #[test]
    fn test_single_line_window_trims_to_empty() {
        // Only LF is the first byte: trimming the start consumes it, and the
        // last LF now lies before the new start, so the end stays put.
        assert_eq!(trim_to_line_boundaries(b"\nrest", true, true), b"rest");
        // One incomplete line on both sides of a single LF.
        assert_eq!(trim_to_line_boundaries(b"abc\n", true, true), b"");
    }

    #[test]
    fn test_trim_end_lf_before_start_is_ignored() {
        // The only LF is swallowed by the start trim; end must not move
        // before the start.
        let trimmed = trim_to_line_boundaries(b"x\nyz", true, true);
        assert_eq!(trimmed, b"yz");
    }
}
