//! Rebuilds the new text from an edit script.
//!
//! Applying is also the structural self-check for engine output: every op must start where
//! the previous one ended, in both sequences, and the ops must reach the end of both.

use crate::{DiffError, EditKind, EditOp, EditScript, MalformedReason, Sequence};

/// Reconstructs `new` from `old`, copying `Equal` elements from `old` and
/// `Insert`/`Replace` elements from `new`.
///
/// Fails with [`DiffError::MalformedScript`] if the ops are out of order, overlap, leave a
/// gap, reach out of bounds, contradict their kind, or stop short of either sequence.
pub fn apply(
    old: &Sequence<'_>,
    new: &Sequence<'_>,
    script: &EditScript,
) -> Result<Vec<u8>, DiffError> {
    let mut out = Vec::with_capacity(new.as_bytes().len());
    let (mut old_pos, mut new_pos) = (0, 0);

    for (index, op) in script.iter().enumerate() {
        let malformed = |reason| DiffError::MalformedScript { reason, index };

        check_placement(op, old_pos, new_pos).map_err(malformed)?;
        if op.old.end > old.len() || op.new.end > new.len() {
            return Err(malformed(MalformedReason::OutOfBounds));
        }
        if !kind_matches(op) {
            return Err(malformed(MalformedReason::KindMismatch));
        }

        match op.kind {
            EditKind::Equal => out.extend_from_slice(old.slice(op.old)),
            EditKind::Insert | EditKind::Replace => out.extend_from_slice(new.slice(op.new)),
            EditKind::Delete => {}
        }
        old_pos = op.old.end;
        new_pos = op.new.end;
    }

    if old_pos != old.len() || new_pos != new.len() {
        return Err(DiffError::MalformedScript {
            reason: MalformedReason::Incomplete,
            index: script.len(),
        });
    }
    Ok(out)
}

/// Checks that `script` is well-formed and that applying it to `old` yields exactly `new`.
pub fn verify(old: &Sequence<'_>, new: &Sequence<'_>, script: &EditScript) -> Result<(), DiffError> {
    apply(old, new, script)?;
    // With the tiling checked, the result equals `new` iff every `Equal` op matches.
    for (index, op) in script.iter().enumerate() {
        if op.is_equal() && old.slice(op.old) != new.slice(op.new) {
            return Err(DiffError::MalformedScript {
                reason: MalformedReason::Mismatch,
                index,
            });
        }
    }
    Ok(())
}

fn check_placement(op: &EditOp, old_pos: usize, new_pos: usize) -> Result<(), MalformedReason> {
    if op.old.start > op.old.end || op.new.start > op.new.end {
        return Err(MalformedReason::OutOfBounds);
    }
    if op.old.end < old_pos || op.new.end < new_pos {
        return Err(MalformedReason::OutOfOrder);
    }
    if op.old.start < old_pos || op.new.start < new_pos {
        return Err(MalformedReason::Overlapping);
    }
    if op.old.start > old_pos || op.new.start > new_pos {
        return Err(MalformedReason::Gap);
    }
    Ok(())
}

fn kind_matches(op: &EditOp) -> bool {
    match op.kind {
        EditKind::Equal => op.old.len() == op.new.len(),
        EditKind::Insert => op.old.is_empty(),
        EditKind::Delete => op.new.is_empty(),
        EditKind::Replace => true,
    }
}
