//! Minimal edit scripts between two versions of a text.
//!
//! Pipeline: sequence → myers → coalesce → apply/verify.
//! Script spans are element indices into a [`Sequence`], half-open `[start, end)`;
//! [`Sequence::byte_span`] turns them into UTF-8 byte offsets.
//! Line/column and UTF-16 coordinates for editors live in the `ide` crate.
mod apply;
mod coalesce;
mod config;
mod error;
mod myers;
mod script;
mod sequence;
mod span;
mod tests;
mod unified;

pub use apply::{apply, verify};
pub use coalesce::coalesce;
pub use config::{DiffConfig, EditCeiling, MAX_AUTO_CEILING, MIN_AUTO_CEILING, WORK_BUDGET};
pub use error::{DiffError, MalformedReason};
pub use myers::compute_edits;
pub use script::{EditKind, EditOp, EditScript, Strategy};
pub use sequence::{Sequence, Unit};
pub use span::Span;
pub use unified::{DEFAULT_CONTEXT, unified};

/// Diffs two buffers in the given unit and coalesces the result.
///
/// Fails only when `unit` needs UTF-8 and a buffer is not.
pub fn diff(old: &[u8], new: &[u8], unit: Unit, config: &DiffConfig) -> Result<EditScript, DiffError> {
    let old = Sequence::new(old, unit)?;
    let new = Sequence::new(new, unit)?;
    Ok(coalesce(&compute_edits(&old, &new, config)))
}
