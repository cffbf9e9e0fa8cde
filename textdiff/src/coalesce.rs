use crate::script::push_coalesced;
use crate::{EditScript, Strategy};

/// Merges adjacent ops into the fewest ops with the same effect.
///
/// Contiguous `Equal` ops become one `Equal`. Every contiguous run of changes becomes one
/// op: `Replace` when it both deletes and inserts, otherwise `Delete` or `Insert`.
/// Ops that are not contiguous with their predecessor are left alone, so a malformed
/// script stays malformed for [`apply`](crate::apply) to report.
///
/// Idempotent, and never returns more ops than it was given.
pub fn coalesce(script: &EditScript) -> EditScript {
    let mut ops = Vec::with_capacity(script.len());
    for op in script {
        push_coalesced(&mut ops, *op);
    }
    tracing::trace!(before = script.len(), after = ops.len(), "coalesced edit script");
    EditScript::with_strategy(ops, script.strategy())
}

impl EditScript {
    /// Shorthand for [`coalesce`].
    pub fn coalesced(&self) -> EditScript {
        coalesce(self)
    }

    pub fn is_fallback(&self) -> bool {
        self.strategy() == Strategy::FullReplace
    }
}
