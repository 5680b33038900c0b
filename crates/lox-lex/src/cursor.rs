//! Character cursor for traversing source code.
//!
//! The cursor owns the read position into the source buffer and keeps the
//! line/column bookkeeping in one place: every consumed `'\n'` bumps the line
//! no matter which sub-scanner consumed it.

/// A cursor for traversing source code character by character.
///
/// Positions are byte offsets, so slices taken between two positions are
/// always valid `&str` ranges. Lookahead past the end yields `'\0'`.
///
/// # Example
///
/// ```
/// use lox_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
/// assert_eq!(cursor.current_char(), 'v');
/// assert_eq!(cursor.advance(), 'v');
/// assert_eq!(cursor.current_char(), 'a');
/// assert_eq!(cursor.peek_char(1), 'r');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the first character.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters past the cursor without
    /// consuming anything.
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("12.5");
    /// assert_eq!(cursor.peek_char(2), '.');
    /// assert_eq!(cursor.peek_char(4), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII lookahead
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes and returns the current character.
    ///
    /// Returns `'\0'` without moving when already at the end.
    #[inline]
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return '\0';
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Consumes the current character only if it equals `expected`.
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source text from `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Unconsumed remainder of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The whole source buffer.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
