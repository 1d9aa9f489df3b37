use thiserror::Error;

/// Error constructing a cursor at an arbitrary offset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("offset {offset} is past the end of the source ({len} bytes)")]
    OutOfBounds { offset: usize, len: usize },
    #[error("offset {offset} is not on a UTF-8 character boundary")]
    NotCharBoundary { offset: usize },
}

/// A byte cursor over source text with line-column tracking.
///
/// The classifier works byte-wise: every lexical cue it cares about
/// (spaces, lowercase ASCII, `:`/`.`/`(`) is a single byte, and non-ASCII
/// bytes simply fail those checks.
#[derive(Clone, PartialEq, Eq)]
pub struct Cursor<'a> {
    /// The source being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Creates a cursor mid-text. `offset` past the end of `s` or inside
    /// a multi-byte character is an error.
    pub fn at(s: &'a str, offset: usize) -> Result<Self, CursorError> {
        if offset > s.len() {
            return Err(CursorError::OutOfBounds {
                offset,
                len: s.len(),
            });
        }
        if !s.is_char_boundary(offset) {
            return Err(CursorError::NotCharBoundary { offset });
        }
        Ok(Self { s, i: offset })
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns the column within the current line (0 at each line start).
    pub fn column(&self) -> usize {
        let before = &self.s.as_bytes()[..self.i];
        match before.iter().rposition(|&b| b == b'\n' || b == b'\r') {
            Some(p) => self.i - (p + 1),
            None => self.i,
        }
    }

    /// Returns true if at end of input.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// The unconsumed remainder of the source as bytes.
    pub fn rest(&self) -> &'a [u8] {
        &self.s.as_bytes()[self.i..]
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.i)
            .field("column", &self.column())
            .finish()
    }
}
