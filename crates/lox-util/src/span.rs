//! Span module - Source location tracking.
//!
//! A [`Span`] records where a lexeme came from: the byte range in the source
//! buffer plus the human-readable line and column of its first character.
//!
//! # Examples
//!
//! ```
//! use lox_util::span::Span;
//!
//! let source = "var answer = 42;";
//! let span = Span::new(4, 10, 1, 5);
//! assert_eq!(span.slice(source), Some("answer"));
//! ```

use std::fmt;

/// Source location span
///
/// Byte offsets are half-open: `start` is the first byte of the lexeme and
/// `end` is one past its last byte. `line` and `column` are 1-based and
/// describe `start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for diagnostics without a location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single line/column point with no byte extent
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::span::Span;
    ///
    /// assert!(Span::new(10, 10, 1, 5).is_empty());
    /// assert!(!Span::new(10, 20, 1, 5).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// Line and column come from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::span::Span;
    ///
    /// let left = Span::new(0, 3, 1, 1);
    /// let right = Span::new(6, 9, 2, 2);
    /// let both = left.to(right);
    /// assert_eq!((both.start, both.end, both.line), (0, 9, 1));
    /// ```
    #[inline]
    pub fn to(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Returns the text this span covers in `source`.
    ///
    /// `None` when the range is inverted, out of bounds, or does not fall on
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
