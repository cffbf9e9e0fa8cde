use std::fmt;

use crate::Unit;

/// Why [`apply`](crate::apply) or [`verify`](crate::verify) rejected a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// A span ends before the previous span ended.
    OutOfOrder,
    /// A span starts before the previous span ended.
    Overlapping,
    /// A span starts after the previous span ended, leaving elements uncovered.
    Gap,
    /// A span is inverted or reaches past the end of its sequence.
    OutOfBounds,
    /// The spans stop before covering both sequences.
    Incomplete,
    /// Span extents contradict the op kind, e.g. an `Insert` that consumes old elements.
    KindMismatch,
    /// An `Equal` span covers elements that differ between old and new.
    Mismatch,
}

impl MalformedReason {
    pub fn message(self) -> &'static str {
        match self {
            MalformedReason::OutOfOrder => "span out of order",
            MalformedReason::Overlapping => "overlapping spans",
            MalformedReason::Gap => "gap between spans",
            MalformedReason::OutOfBounds => "span out of bounds",
            MalformedReason::Incomplete => "script does not cover the input",
            MalformedReason::KindMismatch => "span extents do not match the edit kind",
            MalformedReason::Mismatch => "equal span covers different elements",
        }
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// The script does not tile the input. Always an upstream defect.
    #[error("malformed edit script at op {index}: {reason}")]
    MalformedScript {
        reason: MalformedReason,
        index: usize,
    },

    /// The buffer had to be read as text but is not valid UTF-8.
    #[error("input is not valid UTF-8 for {unit} units (first invalid byte at {offset})")]
    Encoding { unit: Unit, offset: usize },
}
