//! Character classification for the Lox lexer.
//!
//! The grammar is deliberately ASCII-only outside string literals: letters
//! are `a-z`/`A-Z`, digits are `0-9`. Anything else that is not punctuation
//! or whitespace is an unexpected character, including non-ASCII letters.

/// Checks if a character may start an identifier: `[A-Za-z_]`.
///
/// ```
/// use lox_lex::chars::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('_'));
/// assert!(!is_alpha('1'));
/// assert!(!is_alpha('α'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character is a decimal digit `[0-9]`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character may continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Whitespace that is skipped without effect on the line counter.
///
/// Newline is handled separately because it advances the line.
#[inline]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha() {
        for c in ['a', 'z', 'A', 'Z', '_'] {
            assert!(is_alpha(c), "{c:?}");
        }
        for c in ['0', '9', '-', ' ', 'é', '\0'] {
            assert!(!is_alpha(c), "{c:?}");
        }
    }

    #[test]
    fn test_digit() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('a'));
        assert!(!is_digit('٣'));
    }

    #[test]
    fn test_alpha_numeric() {
        assert!(is_alpha_numeric('x'));
        assert!(is_alpha_numeric('7'));
        assert!(is_alpha_numeric('_'));
        assert!(!is_alpha_numeric('.'));
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(' '));
        assert!(is_blank('\t'));
        assert!(is_blank('\r'));
        assert!(!is_blank('\n'));
        assert!(!is_blank('\u{a0}'));
    }
}
