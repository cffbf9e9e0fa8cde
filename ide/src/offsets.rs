//! Conversions between UTF-8 byte offsets and the other column units.
//!
//! All ranges are half-open `[start, end)`.

use crate::PositionEncoding;

/// Number of `encoding` units in `text`.
pub fn width(text: &str, encoding: PositionEncoding) -> usize {
    match encoding {
        PositionEncoding::Utf8 => text.len(),
        PositionEncoding::Utf16 => text.chars().map(char::len_utf16).sum(),
        PositionEncoding::Utf32 => text.chars().count(),
    }
}

/// Byte offset at which `units` units of `text` end.
///
/// Counts past the end clamp to `text.len()`. Returns `None` when `units` ends inside
/// a character, e.g. between the two halves of a UTF-16 surrogate pair.
pub fn offset_of_width(text: &str, units: usize, encoding: PositionEncoding) -> Option<usize> {
    let mut count = 0usize;
    for (byte_idx, ch) in text.char_indices() {
        if count == units {
            return Some(byte_idx);
        }
        if count > units {
            return None;
        }
        count += match encoding {
            PositionEncoding::Utf8 => ch.len_utf8(),
            PositionEncoding::Utf16 => ch.len_utf16(),
            PositionEncoding::Utf32 => 1,
        };
    }
    (count <= units).then_some(text.len())
}
