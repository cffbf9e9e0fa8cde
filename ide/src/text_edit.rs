use textdiff::Span;

/// A single text edit in byte offsets of the old text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: Span, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    pub fn insert(at: usize, new_text: impl Into<String>) -> Self {
        Self::new(Span::empty(at), new_text)
    }

    pub fn delete(range: Span) -> Self {
        Self::new(range, String::new())
    }
}

/// Applies byte-offset text edits and rebases a byte cursor through them.
///
/// The caller must provide non-overlapping edits sorted by `(start, end)`, on character
/// boundaries of `source`. Edits are applied in descending order to avoid shifting later
/// offsets.
///
/// Cursor rules:
/// - edits fully before the cursor shift it by the byte delta
/// - a cursor strictly inside a replaced range snaps to the edit `start`
pub fn apply_text_edits_with_cursor(
    source: &str,
    edits: &[TextEdit],
    cursor: usize,
) -> (String, usize) {
    let mut updated = source.to_string();
    let mut cursor = cursor;

    for edit in edits.iter().rev() {
        let Span { start, end } = edit.range;

        if end <= cursor {
            cursor = cursor - (end - start) + edit.new_text.len();
        } else if start < cursor {
            cursor = start;
        }

        updated.replace_range(start..end, &edit.new_text);
    }

    (updated, cursor)
}
