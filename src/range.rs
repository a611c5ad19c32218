//! Byte range resolution for partial reads
//!
//! Turns a caller's `(offset, length)` request plus the file's total size
//! into a concrete in-bounds window. A negative offset is tail-relative:
//! it selects the final `abs(offset)` bytes and the caller's length is
//! ignored (the read always extends to end of file).

// ============================================================================
// Range Outcome
// ============================================================================

/// Result of resolving a requested range against the actual file size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RangeOutcome {
    /// The file is empty; the caller short-circuits without opening it
    Empty,
    /// A non-negative offset left no room for even a minimal read
    OutOfRange,
    /// Concrete window satisfying `start + len <= total`
    Window { start: u64, len: u64 },
}

/// Resolve a requested `(offset, length)` against `total` bytes of file
pub(crate) fn resolve(offset: i64, length: u64, total: u64) -> RangeOutcome {
    if total == 0 {
        return RangeOutcome::Empty;
    }

    if offset < 0 {
        // Tail-relative: start `abs(offset)` bytes before the end, clamped
        // to the start of the file, and read through to the end.
        let start = total.saturating_sub(offset.unsigned_abs());
        return RangeOutcome::Window {
            start,
            len: total - start,
        };
    }

    let offset = offset as u64;
    if offset >= total - 1 {
        return RangeOutcome::OutOfRange;
    }

    RangeOutcome::Window {
        start: offset,
        len: length.min(total - offset),
    }
}

// ============================================================================
// Tests
// ============================================================================
