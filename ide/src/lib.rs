//! Editor-facing edits between two versions of a document.
//!
//! Diffs with `textdiff`, then maps the script onto the old text: byte-offset
//! [`TextEdit`]s, or [`ProtocolEdit`]s whose positions count UTF-8 bytes, UTF-16 code
//! units or Unicode scalars per [`PositionEncoding`].

mod edit;
mod line_index;
mod mapper;
mod offsets;
mod position;
mod tests;
mod text_edit;

use textdiff::{DiffConfig, Sequence, Strategy, Unit, coalesce, compute_edits};

pub use edit::{ApplyResult, IdeError, apply_edits, apply_protocol_edits};
pub use line_index::LineIndex;
pub use mapper::{byte_edits, to_ranges};
pub use offsets::{offset_of_width, width};
pub use position::{Position, PositionEncoding, ProtocolEdit, Range};
pub use text_edit::{TextEdit, apply_text_edits_with_cursor};

/// Knobs for [`text_edits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditOptions {
    /// Unit the texts are compared in. Coarser units give fewer, larger edits.
    ///
    /// [`Unit::Line`] replaces a changed line's text whole: `line2` to `LINE2` maps to
    /// `(1,0)-(1,5) "LINE2"`. The default [`Unit::Rune`] leaves shared characters outside
    /// the edit and gives `(1,0)-(1,4) "LINE"` for the same change.
    pub unit: Unit,
    pub encoding: PositionEncoding,
    pub diff: DiffConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditsResult {
    /// Sorted, non-overlapping edits over `old`.
    pub edits: Vec<ProtocolEdit>,
    /// [`Strategy::FullReplace`] when the diff gave up on a minimal script.
    pub strategy: Strategy,
}

/// Protocol edits that turn `old` into `new`.
pub fn text_edits(old: &str, new: &str, options: &EditOptions) -> Result<EditsResult, IdeError> {
    let old_seq = Sequence::from_text(old, options.unit);
    let new_seq = Sequence::from_text(new, options.unit);
    let script = coalesce(&compute_edits(&old_seq, &new_seq, &options.diff));

    let index = LineIndex::new(old);
    let edits = to_ranges(&script, &old_seq, &new_seq, &index, options.encoding)?;
    Ok(EditsResult {
        edits,
        strategy: script.strategy(),
    })
}
