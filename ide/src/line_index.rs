use crate::offsets::{offset_of_width, width};
use crate::{IdeError, Position, PositionEncoding};

/// Byte offset of every line start in a text, for offset ↔ line/column lookups.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`; the terminator belongs to the line it ends.
/// A text ending in a terminator has a final empty line.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    line_starts.push(i + 2);
                    i += 1;
                }
                b'\r' => line_starts.push(i + 1),
                _ => {}
            }
            i += 1;
        }
        Self { text, line_starts }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns `(line, byte column)`, both 0-based. Offsets past the end clamp to it.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        (line, offset - self.line_starts[line])
    }

    /// Line content without its terminator.
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());
        let line_text = &self.text[start..end];
        Some(line_text.trim_end_matches(['\n', '\r']))
    }

    /// Protocol position of byte `offset`.
    ///
    /// Fails with [`IdeError::InvalidPosition`] past the end, inside a UTF-8 character,
    /// or between the `\r` and `\n` of a line break.
    pub fn position(&self, offset: usize, encoding: PositionEncoding) -> Result<Position, IdeError> {
        if !self.text.is_char_boundary(offset) || splits_crlf(self.text, offset) {
            return Err(IdeError::InvalidPosition);
        }
        let (line, col) = self.line_col(offset);
        let start = self.line_starts[line];
        let character = width(&self.text[start..start + col], encoding);
        Ok(Position {
            line: to_u32(line)?,
            character: to_u32(character)?,
        })
    }

    /// Byte offset of `position`.
    ///
    /// Columns past the end of the line clamp to the start of its terminator. Lines past
    /// the last one, and columns inside a character, are [`IdeError::InvalidPosition`].
    pub fn offset(&self, position: Position, encoding: PositionEncoding) -> Result<usize, IdeError> {
        let line = position.line as usize;
        let content = self.line_text(line).ok_or(IdeError::InvalidPosition)?;
        let col = offset_of_width(content, position.character as usize, encoding)
            .ok_or(IdeError::InvalidPosition)?;
        Ok(self.line_starts[line] + col)
    }
}

pub(crate) fn splits_crlf(text: &str, offset: usize) -> bool {
    let bytes = text.as_bytes();
    offset > 0 && bytes.get(offset - 1) == Some(&b'\r') && bytes.get(offset) == Some(&b'\n')
}

fn to_u32(value: usize) -> Result<u32, IdeError> {
    u32::try_from(value).map_err(|_| IdeError::InvalidPosition)
}
