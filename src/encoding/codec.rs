//! Byte/text transcoding
//!
//! Thin wrapper over `encoding_rs` label-based lookup. Unknown or absent
//! labels fall back to UTF-8. Encoding to UTF-16 is emitted manually because
//! the Encoding Standard defines no UTF-16 encoder (`encode()` would fall
//! back to UTF-8 output).

use encoding_rs::{Encoding, UTF_8};

/// UTF-8 byte-order mark
pub(crate) const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Decode bytes to text using the named encoding, defaulting to UTF-8
///
/// A leading BOM matching the chosen (or sniffed) encoding is stripped from
/// the output; malformed sequences are replaced with U+FFFD rather than
/// failing, matching the detect-and-report (not repair) contract.
pub(crate) fn decode(bytes: &[u8], encoding_name: Option<&str>) -> String {
    let encoding = encoding_name
        .and_then(|name| Encoding::for_label(name.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Encode text to bytes using the named encoding, optionally BOM-prefixed
///
/// The BOM is emitted for the UTF-8 and UTF-16 families only; other
/// encodings have no conventional mark and the flag is ignored for them.
pub(crate) fn encode(text: &str, encoding_name: &str, add_bom: bool) -> Vec<u8> {
    if let Some(big_endian) = utf16_endianness(encoding_name) {
        return encode_utf16(text, big_endian, add_bom);
    }

    let encoding = Encoding::for_label(encoding_name.as_bytes()).unwrap_or(UTF_8);
    let (body, _, _) = encoding.encode(text);

    if add_bom && encoding == UTF_8 {
        let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
        bytes.extend_from_slice(&UTF8_BOM);
        bytes.extend_from_slice(&body);
        bytes
    } else {
        body.into_owned()
    }
}

/// `Some(big_endian)` when the label names a UTF-16 encoding
///
/// The bare "UTF-16" label means little-endian, as in the Encoding Standard.
fn utf16_endianness(encoding_name: &str) -> Option<bool> {
    let name = encoding_name.trim();
    if name.eq_ignore_ascii_case("utf-16be") || name.eq_ignore_ascii_case("utf16be") {
        Some(true)
    } else if name.eq_ignore_ascii_case("utf-16")
        || name.eq_ignore_ascii_case("utf-16le")
        || name.eq_ignore_ascii_case("utf16")
        || name.eq_ignore_ascii_case("utf16le")
    {
        Some(false)
    } else {
        None
    }
}

fn encode_utf16(text: &str, big_endian: bool, add_bom: bool) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() * 2 + 2);
    let mut push = |unit: u16| {
        if big_endian {
            bytes.extend_from_slice(&unit.to_be_bytes());
        } else {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
    };

    if add_bom {
        push(0xFEFF);
    }
    for unit in text.encode_utf16() {
        push(unit);
    }
    bytes
}

// ============================================================================
// Tests
// ============================================================================
