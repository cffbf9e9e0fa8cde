use textdiff::{DiffError, MalformedReason, Span};

use crate::tests::common::edit;
use crate::{IdeError, PositionEncoding, TextEdit, apply_edits, apply_protocol_edits};

#[test]
fn ide_apply_edits_rejects_overlapping_ranges() {
    let edits = vec![
        TextEdit::new(Span::new(1, 3), "X"),
        TextEdit::new(Span::new(2, 4), "Y"),
    ];

    let err = apply_edits("abcd", edits, 0).expect_err("expected overlap error");
    assert_eq!(err, IdeError::OverlappingEdits);
}

#[test]
fn ide_apply_edits_applies_and_rebases_cursor() {
    let edits = vec![TextEdit::new(Span::new(1, 2), "XYZ")];

    let out = apply_edits("abcd", edits, 3).expect("expected edits to apply");
    assert_eq!(out.source, "aXYZcd");
    assert_eq!(out.cursor, 5);
}

#[test]
fn ide_apply_edits_sorts_unordered_edits() {
    let edits = vec![
        TextEdit::new(Span::new(3, 4), "D"),
        TextEdit::new(Span::new(0, 1), "A"),
    ];

    let out = apply_edits("abcd", edits, 4).expect("expected edits to apply");
    assert_eq!(out.source, "AbcD");
    assert_eq!(out.cursor, 4);
}

#[test]
fn ide_apply_edits_snaps_cursor_inside_replaced_range() {
    let edits = vec![TextEdit::new(Span::new(1, 4), "X")];

    let out = apply_edits("abcdef", edits, 3).expect("expected edits to apply");
    assert_eq!(out.source, "aXef");
    assert_eq!(out.cursor, 1);

    let edits = vec![TextEdit::new(Span::new(1, 4), "X")];
    let out = apply_edits("abcdef", edits, 0).expect("expected edits to apply");
    assert_eq!(out.cursor, 0);
}

#[test]
fn ide_apply_edits_keeps_order_of_inserts_at_one_offset() {
    let edits = vec![TextEdit::insert(1, "x"), TextEdit::insert(1, "y")];

    let out = apply_edits("ab", edits, 2).expect("expected edits to apply");
    assert_eq!(out.source, "axyb");
    assert_eq!(out.cursor, 4);
}

#[test]
fn ide_apply_edits_rejects_invalid_ranges() {
    let past_end = vec![TextEdit::delete(Span::new(2, 5))];
    assert_eq!(
        apply_edits("abcd", past_end, 0),
        Err(IdeError::InvalidEditRange)
    );

    let inside_char = vec![TextEdit::delete(Span::new(1, 2))];
    assert_eq!(
        apply_edits("é", inside_char, 0),
        Err(IdeError::InvalidEditRange)
    );

    let inside_crlf = vec![TextEdit::insert(2, "x")];
    assert_eq!(
        apply_edits("a\r\nb", inside_crlf, 0),
        Err(IdeError::InvalidEditRange)
    );
}

#[test]
fn ide_apply_edits_rejects_invalid_cursor() {
    assert_eq!(apply_edits("abcd", Vec::new(), 10), Err(IdeError::InvalidCursor));
    assert_eq!(apply_edits("é", Vec::new(), 1), Err(IdeError::InvalidCursor));
}

#[test]
fn ide_error_messages_are_stable() {
    assert_eq!(IdeError::InvalidEditRange.message(), "Invalid edit range");
    assert_eq!(IdeError::OverlappingEdits.message(), "Overlapping edits");
    assert_eq!(IdeError::InvalidCursor.message(), "Invalid cursor");
    assert_eq!(IdeError::InvalidPosition.message(), "Invalid position");

    for error in [
        IdeError::InvalidEditRange,
        IdeError::OverlappingEdits,
        IdeError::InvalidCursor,
        IdeError::InvalidPosition,
    ] {
        assert_eq!(error.to_string(), error.message());
    }

    let diff = IdeError::from(DiffError::MalformedScript {
        reason: MalformedReason::Incomplete,
        index: 0,
    });
    assert_eq!(diff.message(), "Diff failed");
    assert_eq!(
        diff.to_string(),
        DiffError::MalformedScript {
            reason: MalformedReason::Incomplete,
            index: 0,
        }
        .to_string()
    );
}

#[test]
fn ide_apply_protocol_edits() {
    let out = apply_protocol_edits(
        "line1\nline2\n",
        &[edit((1, 0), (1, 5), "LINE2")],
        PositionEncoding::Utf16,
    );
    assert_eq!(out.as_deref(), Ok("line1\nLINE2\n"));

    let out = apply_protocol_edits(
        "😀a\n",
        &[edit((0, 2), (0, 3), "b"), edit((1, 0), (1, 0), "end")],
        PositionEncoding::Utf16,
    );
    assert_eq!(out.as_deref(), Ok("😀b\nend"));
}

#[test]
fn ide_apply_protocol_edits_rejects_bad_ranges() {
    let backwards = apply_protocol_edits("abc", &[edit((0, 2), (0, 1), "")], PositionEncoding::Utf16);
    assert_eq!(backwards, Err(IdeError::InvalidEditRange));

    let missing_line = apply_protocol_edits("abc", &[edit((3, 0), (3, 0), "x")], PositionEncoding::Utf16);
    assert_eq!(missing_line, Err(IdeError::InvalidPosition));

    let split_pair = apply_protocol_edits("😀", &[edit((0, 1), (0, 2), "")], PositionEncoding::Utf16);
    assert_eq!(split_pair, Err(IdeError::InvalidPosition));
}
