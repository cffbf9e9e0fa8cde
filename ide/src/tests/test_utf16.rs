use crate::{IdeError, LineIndex, Position, PositionEncoding, offset_of_width, width};

fn utf16_column(source: &str, byte: usize) -> Result<u32, IdeError> {
    LineIndex::new(source)
        .position(byte, PositionEncoding::Utf16)
        .map(|position| position.character)
}

#[test]
fn test_utf16_column_ascii() {
    let s = "abc";
    assert_eq!(utf16_column(s, 0), Ok(0));
    assert_eq!(utf16_column(s, 2), Ok(2));
    assert_eq!(utf16_column(s, 3), Ok(3));
    assert_eq!(utf16_column(s, 10), Err(IdeError::InvalidPosition));
}

#[test]
fn test_utf16_column_chinese() {
    let s = "一二";
    assert_eq!(utf16_column(s, 0), Ok(0));
    assert_eq!(utf16_column(s, 3), Ok(1));
    assert_eq!(utf16_column(s, 4), Err(IdeError::InvalidPosition));
    assert_eq!(utf16_column(s, 6), Ok(2));
}

#[test]
fn test_utf16_column_emoji() {
    let s = "😀a";
    assert_eq!(utf16_column(s, 0), Ok(0));
    assert_eq!(utf16_column(s, 2), Err(IdeError::InvalidPosition));
    assert_eq!(utf16_column(s, 4), Ok(2));
    assert_eq!(utf16_column(s, 5), Ok(3));
}

#[test]
fn test_utf16_offset_inside_surrogate_pair_is_rejected() {
    let s = "😀a";
    assert_eq!(offset_of_width(s, 0, PositionEncoding::Utf16), Some(0));
    assert_eq!(offset_of_width(s, 1, PositionEncoding::Utf16), None);
    assert_eq!(offset_of_width(s, 2, PositionEncoding::Utf16), Some(4));
    assert_eq!(offset_of_width(s, 3, PositionEncoding::Utf16), Some(5));
    assert_eq!(offset_of_width(s, 10, PositionEncoding::Utf16), Some(5));

    let index = LineIndex::new(s);
    assert_eq!(
        index.offset(Position::new(0, 1), PositionEncoding::Utf16),
        Err(IdeError::InvalidPosition)
    );
    assert_eq!(
        index.offset(Position::new(0, 2), PositionEncoding::Utf16),
        Ok(4)
    );
}

#[test]
fn test_width_per_encoding() {
    let s = "😀é";
    assert_eq!(width(s, PositionEncoding::Utf8), 6);
    assert_eq!(width(s, PositionEncoding::Utf16), 3);
    assert_eq!(width(s, PositionEncoding::Utf32), 2);
    assert_eq!(width("", PositionEncoding::Utf16), 0);
}

#[test]
fn test_offset_of_width() {
    let s = "😀é";
    assert_eq!(offset_of_width(s, 0, PositionEncoding::Utf16), Some(0));
    assert_eq!(offset_of_width(s, 1, PositionEncoding::Utf16), None);
    assert_eq!(offset_of_width(s, 2, PositionEncoding::Utf16), Some(4));
    assert_eq!(offset_of_width(s, 3, PositionEncoding::Utf16), Some(6));
    assert_eq!(offset_of_width(s, 9, PositionEncoding::Utf16), Some(6));

    assert_eq!(offset_of_width(s, 1, PositionEncoding::Utf32), Some(4));
    assert_eq!(offset_of_width(s, 5, PositionEncoding::Utf8), None);
    assert_eq!(offset_of_width(s, 4, PositionEncoding::Utf8), Some(4));
    assert_eq!(offset_of_width("", 3, PositionEncoding::Utf8), Some(0));
}
