use crate::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Equal,
    Insert,
    Delete,
    /// Only produced by [`coalesce`](crate::coalesce).
    Replace,
}

impl EditKind {
    /// Kind of a change with the given extents: both sides non-empty is a `Replace`.
    pub fn of_change(old: Span, new: Span) -> EditKind {
        match (old.is_empty(), new.is_empty()) {
            (true, _) => EditKind::Insert,
            (false, true) => EditKind::Delete,
            (false, false) => EditKind::Replace,
        }
    }
}

/// One tagged span of an [`EditScript`].
///
/// `old` and `new` are element spans into the old and new [`Sequence`](crate::Sequence).
/// `old` is empty for `Insert`, `new` is empty for `Delete`; both still carry the
/// position where the op sits in that sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditOp {
    pub kind: EditKind,
    pub old: Span,
    pub new: Span,
}

impl EditOp {
    pub fn equal(old: Span, new: Span) -> Self {
        Self {
            kind: EditKind::Equal,
            old,
            new,
        }
    }

    pub fn insert(at_old: usize, new: Span) -> Self {
        Self {
            kind: EditKind::Insert,
            old: Span::empty(at_old),
            new,
        }
    }

    pub fn delete(old: Span, at_new: usize) -> Self {
        Self {
            kind: EditKind::Delete,
            old,
            new: Span::empty(at_new),
        }
    }

    pub fn replace(old: Span, new: Span) -> Self {
        Self {
            kind: EditKind::Replace,
            old,
            new,
        }
    }

    pub fn is_equal(&self) -> bool {
        self.kind == EditKind::Equal
    }

    /// Number of elements this op inserts plus the number it deletes.
    pub fn cost(&self) -> usize {
        match self.kind {
            EditKind::Equal => 0,
            EditKind::Insert => self.new.len(),
            EditKind::Delete => self.old.len(),
            EditKind::Replace => self.old.len() + self.new.len(),
        }
    }

    fn is_noop(&self) -> bool {
        self.old.is_empty() && self.new.is_empty()
    }

    fn precedes(&self, next: &EditOp) -> bool {
        self.old.end == next.old.start && self.new.end == next.new.start
    }
}

/// How the engine arrived at a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Exact minimal script.
    #[default]
    Myers,
    /// The edit distance exceeded the configured ceiling; the differing region is
    /// replaced as a whole. Correct, but not minimal.
    FullReplace,
}

/// Ordered edit ops covering both sequences.
///
/// Holds only offsets; it stays valid after the sequences are dropped as long as it is
/// not reinterpreted against different text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditScript {
    ops: Vec<EditOp>,
    strategy: Strategy,
}

impl EditScript {
    pub fn new(ops: Vec<EditOp>) -> Self {
        Self {
            ops,
            strategy: Strategy::Myers,
        }
    }

    pub(crate) fn with_strategy(ops: Vec<EditOp>, strategy: Strategy) -> Self {
        Self { ops, strategy }
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<EditOp> {
        self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Non-`Equal` ops in order.
    pub fn changes(&self) -> impl Iterator<Item = &EditOp> + '_ {
        self.ops.iter().filter(|op| !op.is_equal())
    }

    /// Total inserted plus deleted elements. For a `Myers` script this is the edit distance D.
    pub fn distance(&self) -> usize {
        self.ops.iter().map(EditOp::cost).sum()
    }

    /// True when the script changes nothing.
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(EditOp::is_equal)
    }

    /// The script turning `new` back into `old`: spans swapped, inserts and deletes exchanged.
    pub fn inverted(&self) -> EditScript {
        let ops = self
            .ops
            .iter()
            .map(|op| EditOp {
                kind: match op.kind {
                    EditKind::Insert => EditKind::Delete,
                    EditKind::Delete => EditKind::Insert,
                    kind => kind,
                },
                old: op.new,
                new: op.old,
            })
            .collect();
        EditScript::with_strategy(ops, self.strategy)
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Appends `op`, extending the last op instead when it has the same kind and is contiguous.
/// Ops with two empty spans are dropped.
pub(crate) fn push_op(ops: &mut Vec<EditOp>, op: EditOp) {
    if op.is_noop() {
        return;
    }
    match ops.last_mut() {
        Some(last) if last.kind == op.kind && last.precedes(&op) => {
            last.old.end = op.old.end;
            last.new.end = op.new.end;
        }
        _ => ops.push(op),
    }
}

/// Like [`push_op`], but any contiguous run of changes collapses into one op whose kind
/// is recomputed from its extents.
pub(crate) fn push_coalesced(ops: &mut Vec<EditOp>, op: EditOp) {
    if op.is_noop() {
        return;
    }
    if op.is_equal() {
        push_op(ops, op);
        return;
    }
    match ops.last_mut() {
        Some(last) if !last.is_equal() && last.precedes(&op) => {
            last.old.end = op.old.end;
            last.new.end = op.new.end;
            last.kind = EditKind::of_change(last.old, last.new);
        }
        _ => ops.push(EditOp {
            kind: EditKind::of_change(op.old, op.new),
            ..op
        }),
    }
}
