//! Turns an edit script into editor edits over the old text.
//!
//! Every change becomes a byte-range edit. A line terminator that both sides of a change
//! end with stays in place, so a changed line maps to a range inside that line. Edit
//! boundaries that fall inside a UTF-8 character or a `\r\n` pair are widened over the
//! bytes both texts share, and edits that end up touching are merged. The result is sorted
//! and non-overlapping.

use textdiff::{DiffError, EditOp, EditScript, Sequence, Span, coalesce, verify};

use crate::line_index::splits_crlf;
use crate::{IdeError, LineIndex, PositionEncoding, ProtocolEdit, Range, TextEdit};

/// Byte spans of one change, in the old and the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Change {
    old: Span,
    new: Span,
}

/// Byte-offset edits that turn `old` into `new`.
///
/// The script is verified against both sequences first; a script that does not tile them
/// is reported as [`IdeError::Diff`].
pub fn byte_edits(
    script: &EditScript,
    old: &Sequence<'_>,
    new: &Sequence<'_>,
) -> Result<Vec<TextEdit>, IdeError> {
    verify(old, new, script)?;
    let old_text = text_of(old)?;
    let new_text = text_of(new)?;

    let script = coalesce(script);
    let changes = script
        .changes()
        .map(|op| byte_change(op, old, new))
        .collect::<Result<Vec<_>, _>>()?;

    let mut aligned: Vec<Change> = Vec::with_capacity(changes.len());
    for (i, change) in changes.iter().enumerate() {
        let mut change = keep_shared_terminator(*change, old_text, new_text);
        let floor = aligned.last().map_or(0, |prev| prev.old.end);
        align_start(&mut change, old_text, new_text, floor);

        match aligned.last_mut() {
            Some(prev) if change.old.start <= prev.old.end => {
                prev.old.end = change.old.end;
                prev.new.end = change.new.end;
            }
            _ => aligned.push(change),
        }

        let ceiling = changes
            .get(i + 1)
            .map_or(old_text.len(), |next| next.old.start);
        if let Some(last) = aligned.last_mut() {
            align_end(last, old_text, new_text, ceiling);
        }
    }

    let edits = aligned
        .into_iter()
        .filter(|change| !(change.old.is_empty() && change.new.is_empty()))
        .map(|change| {
            let replacement = new_text
                .get(change.new.range())
                .ok_or(IdeError::InvalidEditRange)?;
            Ok(TextEdit::new(change.old, replacement))
        })
        .collect::<Result<Vec<_>, IdeError>>()?;

    tracing::trace!(
        changes = changes.len(),
        edits = edits.len(),
        "mapped script to byte edits"
    );
    Ok(edits)
}

/// Protocol edits over the old text, with positions in `encoding` units.
///
/// `index` must be built over the text of `old`.
pub fn to_ranges(
    script: &EditScript,
    old: &Sequence<'_>,
    new: &Sequence<'_>,
    index: &LineIndex<'_>,
    encoding: PositionEncoding,
) -> Result<Vec<ProtocolEdit>, IdeError> {
    debug_assert_eq!(index.text().as_bytes(), old.as_bytes());

    let edits = byte_edits(script, old, new)?
        .into_iter()
        .map(|edit| {
            Ok(ProtocolEdit {
                range: Range::new(
                    index.position(edit.range.start, encoding)?,
                    index.position(edit.range.end, encoding)?,
                ),
                new_text: edit.new_text,
            })
        })
        .collect::<Result<Vec<_>, IdeError>>()?;

    tracing::trace!(edits = edits.len(), ?encoding, "mapped edits to protocol ranges");
    Ok(edits)
}

fn text_of<'a>(seq: &Sequence<'a>) -> Result<&'a str, IdeError> {
    std::str::from_utf8(seq.as_bytes()).map_err(|e| {
        IdeError::Diff(DiffError::Encoding {
            unit: seq.unit(),
            offset: e.valid_up_to(),
        })
    })
}

fn byte_change(op: &EditOp, old: &Sequence<'_>, new: &Sequence<'_>) -> Result<Change, IdeError> {
    Ok(Change {
        old: old.byte_span(op.old).ok_or(IdeError::InvalidEditRange)?,
        new: new.byte_span(op.new).ok_or(IdeError::InvalidEditRange)?,
    })
}

fn terminator_len(bytes: &[u8]) -> usize {
    match bytes {
        [.., b'\r', b'\n'] => 2,
        [.., b'\n' | b'\r'] => 1,
        _ => 0,
    }
}

fn keep_shared_terminator(change: Change, old: &str, new: &str) -> Change {
    let old_bytes = &old.as_bytes()[change.old.range()];
    let new_bytes = &new.as_bytes()[change.new.range()];
    let len = terminator_len(old_bytes);
    let shared = len > 0
        && terminator_len(new_bytes) == len
        && new_bytes.ends_with(&old_bytes[old_bytes.len() - len..]);
    if !shared {
        return change;
    }
    Change {
        old: Span::new(change.old.start, change.old.end - len),
        new: Span::new(change.new.start, change.new.end - len),
    }
}

fn is_boundary(text: &str, offset: usize) -> bool {
    text.is_char_boundary(offset) && !splits_crlf(text, offset)
}

/// Moves the start back over shared bytes until it is a boundary in both texts, or
/// reaches `floor`.
fn align_start(change: &mut Change, old: &str, new: &str, floor: usize) {
    while change.old.start > floor
        && !(is_boundary(old, change.old.start) && is_boundary(new, change.new.start))
    {
        change.old.start -= 1;
        change.new.start -= 1;
    }
}

/// Moves the end forward over shared bytes until it is a boundary in both texts, or
/// reaches `ceiling`.
fn align_end(change: &mut Change, old: &str, new: &str, ceiling: usize) {
    while change.old.end < ceiling
        && !(is_boundary(old, change.old.end) && is_boundary(new, change.new.end))
    {
        change.old.end += 1;
        change.new.end += 1;
    }
}
