use textdiff::{DiffError, Span};

use crate::line_index::splits_crlf;
use crate::text_edit::apply_text_edits_with_cursor;
use crate::{LineIndex, PositionEncoding, ProtocolEdit, TextEdit};

/// Result of [`apply_edits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub source: String,
    pub cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdeError {
    #[error("{}", self.message())]
    InvalidEditRange,
    #[error("{}", self.message())]
    OverlappingEdits,
    #[error("{}", self.message())]
    InvalidCursor,
    #[error("{}", self.message())]
    InvalidPosition,
    #[error(transparent)]
    Diff(#[from] DiffError),
}

impl IdeError {
    /// Stable, user-facing description. `Display` uses it for every variant except
    /// [`IdeError::Diff`], which shows the wrapped error.
    pub fn message(&self) -> &'static str {
        match self {
            IdeError::InvalidEditRange => "Invalid edit range",
            IdeError::OverlappingEdits => "Overlapping edits",
            IdeError::InvalidCursor => "Invalid cursor",
            IdeError::InvalidPosition => "Invalid position",
            IdeError::Diff(_) => "Diff failed",
        }
    }
}

/// Applies byte-offset edits to `source` and rebases `cursor` through them.
///
/// Edits may come in any order; ties keep their given order, so several inserts at one
/// offset land in sequence. Ranges must lie on character boundaries and must not split a
/// `\r\n` pair.
pub fn apply_edits(
    source: &str,
    mut edits: Vec<TextEdit>,
    cursor: usize,
) -> Result<ApplyResult, IdeError> {
    validate_cursor(source, cursor)?;
    edits.sort_by_key(|edit| (edit.range.start, edit.range.end));
    validate_sorted_non_overlapping_edits(source, &edits)?;

    let (source, cursor) = apply_text_edits_with_cursor(source, &edits, cursor);
    Ok(ApplyResult { source, cursor })
}

/// Applies protocol edits, expressed against `source` in `encoding` coordinates.
pub fn apply_protocol_edits(
    source: &str,
    edits: &[ProtocolEdit],
    encoding: PositionEncoding,
) -> Result<String, IdeError> {
    let index = LineIndex::new(source);
    let edits = edits
        .iter()
        .map(|edit| {
            let start = index.offset(edit.range.start, encoding)?;
            let end = index.offset(edit.range.end, encoding)?;
            if start > end {
                return Err(IdeError::InvalidEditRange);
            }
            Ok(TextEdit::new(Span::new(start, end), edit.new_text.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(apply_edits(source, edits, 0)?.source)
}

fn validate_cursor(source: &str, cursor: usize) -> Result<(), IdeError> {
    if source.is_char_boundary(cursor) {
        Ok(())
    } else {
        Err(IdeError::InvalidCursor)
    }
}

fn validate_sorted_non_overlapping_edits(source: &str, edits: &[TextEdit]) -> Result<(), IdeError> {
    let mut prev_end = 0usize;
    for edit in edits {
        let range = edit.range;
        if range.start > range.end
            || !is_edit_boundary(source, range.start)
            || !is_edit_boundary(source, range.end)
        {
            return Err(IdeError::InvalidEditRange);
        }
        if range.start < prev_end {
            return Err(IdeError::OverlappingEdits);
        }
        prev_end = range.end;
    }
    Ok(())
}

fn is_edit_boundary(source: &str, offset: usize) -> bool {
    source.is_char_boundary(offset) && !splits_crlf(source, offset)
}
