//! Immutable byte cursor.
//!
//! Every read returns the consumed bytes together with a new cursor. The
//! original is never mutated.

/// NUL byte: terminator for identifiers, names and text values.
pub const NUL: u8 = 0x00;

/// A read position into a borrowed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Absolute offset into the underlying buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Next byte without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consume one byte.
    #[must_use]
    pub fn take_byte(self) -> Option<(u8, Self)> {
        let byte = self.peek()?;
        Some((byte, self.advance(1)))
    }

    /// Consume exactly `len` bytes.
    #[must_use]
    pub fn take(self, len: usize) -> Option<(&'a [u8], Self)> {
        let end = self.pos.checked_add(len)?;
        let bytes = self.data.get(self.pos..end)?;
        Some((bytes, self.advance(len)))
    }

    /// Consume the longest prefix whose bytes satisfy `pred`.
    #[must_use]
    pub fn take_while(self, pred: impl Fn(u8) -> bool) -> (&'a [u8], Self) {
        let len = self
            .remaining()
            .iter()
            .position(|&b| !pred(b))
            .unwrap_or(self.remaining().len());
        (&self.remaining()[..len], self.advance(len))
    }

    /// Consume bytes up to and including the next NUL.
    ///
    /// The returned slice excludes the terminator. `None` if no NUL remains.
    #[must_use]
    pub fn take_until_nul(self) -> Option<(&'a [u8], Self)> {
        let len = self.remaining().iter().position(|&b| b == NUL)?;
        Some((&self.remaining()[..len], self.advance(len + 1)))
    }

    /// Like [`Cursor::take_until_nul`], but runs to the end when no NUL remains.
    #[must_use]
    pub fn take_until_nul_or_end(self) -> (&'a [u8], Self) {
        match self.take_until_nul() {
            Some(found) => found,
            None => {
                let rest = self.remaining();
                (rest, self.advance(rest.len()))
            }
        }
    }

    fn advance(self, len: usize) -> Self {
        Self {
            data: self.data,
            pos: (self.pos + len).min(self.data.len()),
        }
    }
}
