//! Code-point cursor over a borrowed string.
//!
//! The scanner steps one `char` at a time and only ever slices the source at
//! the cursor's byte offset, which always sits on a code point boundary.
//! This keeps multi-byte glyphs intact without decoding the input into a
//! separate buffer.

/// The escape character.
pub(crate) const ESCAPE: char = '\\';

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    src: &'src str,
    /// Byte offset of the next unread code point.
    pos: usize,
    /// Number of code points consumed so far.
    char_idx: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            pos: 0,
            char_idx: 0,
        }
    }

    /// The next code point, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next code point.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        self.char_idx += 1;
        Some(ch)
    }

    /// Consumes a backslash together with the code point it escapes.
    ///
    /// A backslash at the very end of the input is consumed alone.
    pub fn skip_escape(&mut self) {
        debug_assert_eq!(self.peek(), Some(ESCAPE));
        self.bump();
        self.bump();
    }

    /// Byte offset of the next unread code point.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Code point index of the next unread code point.
    #[inline]
    pub fn char_index(&self) -> usize {
        self.char_idx
    }

    /// The unread tail of the source.
    #[inline]
    pub fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }
}
