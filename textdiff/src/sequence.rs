//! Indexable views over a byte buffer.
//!
//! A [`Sequence`] never copies the buffer: runes and lines are described by a table of
//! element boundaries (byte offsets), bytes need no table at all.

use std::fmt;

use crate::{DiffError, Span};

/// Atomic unit the engine compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// Raw bytes. Never fails, but spans may split a UTF-8 scalar.
    Byte,
    /// Unicode scalar values.
    #[default]
    Rune,
    /// Lines, each keeping its terminator (`\n`, `\r\n` or a lone `\r`).
    Line,
}

impl Unit {
    pub fn name(self) -> &'static str {
        match self {
            Unit::Byte => "byte",
            Unit::Rune => "rune",
            Unit::Line => "line",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only, 0-indexed view of `bytes` as a sequence of [`Unit`]s.
#[derive(Debug, Clone)]
pub struct Sequence<'a> {
    bytes: &'a [u8],
    unit: Unit,
    /// Byte offset of every element boundary, `len() + 1` entries. Empty for [`Unit::Byte`].
    bounds: Vec<usize>,
}

impl<'a> Sequence<'a> {
    /// Wraps a raw buffer. Rune and line units require valid UTF-8.
    pub fn new(bytes: &'a [u8], unit: Unit) -> Result<Self, DiffError> {
        if unit != Unit::Byte {
            std::str::from_utf8(bytes).map_err(|e| DiffError::Encoding {
                unit,
                offset: e.valid_up_to(),
            })?;
        }
        Ok(Self::build(bytes, unit))
    }

    /// Wraps text that is already known to be UTF-8.
    pub fn from_text(text: &'a str, unit: Unit) -> Self {
        Self::build(text.as_bytes(), unit)
    }

    fn build(bytes: &'a [u8], unit: Unit) -> Self {
        let bounds = match unit {
            Unit::Byte => Vec::new(),
            Unit::Rune => rune_bounds(bytes),
            Unit::Line => line_bounds(bytes),
        };
        Self {
            bytes,
            unit,
            bounds,
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        match self.unit {
            Unit::Byte => self.bytes.len(),
            _ => self.bounds.len().saturating_sub(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte offset of element boundary `index` (`0..=len()`).
    pub fn byte_offset(&self, index: usize) -> usize {
        match self.unit {
            Unit::Byte => index,
            _ => self.bounds[index],
        }
    }

    /// Converts an element span into a byte span, or `None` if it reaches past the end.
    pub fn byte_span(&self, span: Span) -> Option<Span> {
        if span.start > span.end || span.end > self.len() {
            return None;
        }
        Some(Span::new(
            self.byte_offset(span.start),
            self.byte_offset(span.end),
        ))
    }

    /// Bytes of element `index`.
    pub fn element(&self, index: usize) -> &'a [u8] {
        &self.bytes[self.byte_offset(index)..self.byte_offset(index + 1)]
    }

    /// Bytes covered by an element span. The span must be in bounds.
    pub fn slice(&self, span: Span) -> &'a [u8] {
        &self.bytes[self.byte_offset(span.start)..self.byte_offset(span.end)]
    }

    /// Element equality between `self[i]` and `other[j]`.
    pub fn eq_at(&self, i: usize, other: &Sequence<'_>, j: usize) -> bool {
        match (self.unit, other.unit) {
            (Unit::Byte, Unit::Byte) => self.bytes[i] == other.bytes[j],
            _ => self.element(i) == other.element(j),
        }
    }
}

fn rune_bounds(bytes: &[u8]) -> Vec<usize> {
    let mut bounds: Vec<usize> = (0..bytes.len())
        .filter(|&i| !is_continuation(bytes[i]))
        .collect();
    bounds.push(bytes.len());
    bounds
}

fn is_continuation(b: u8) -> bool {
    (b as i8) < -0x40
}

/// Element boundaries for [`Unit::Line`]. A trailing line without terminator is its own element.
pub(crate) fn line_bounds(bytes: &[u8]) -> Vec<usize> {
    let mut bounds = vec![0];
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => bounds.push(i + 1),
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                bounds.push(i + 1);
            }
            _ => {}
        }
        i += 1;
    }
    if bounds.last() != Some(&bytes.len()) {
        bounds.push(bytes.len());
    }
    bounds
}
