//! Diagnostic codes for categorizing front-end errors and warnings.
//!
//! # Examples
//!
//! ```
//! use lox_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` where the prefix is "E" for
/// errors or "W" for warnings and the number is zero-padded to four digits.
/// The thousands digit names the phase: 1xxx for the lexer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// A character that starts no lexeme.
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// A string literal still open at end of input.
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let code = DiagnosticCode::new("W", 7);
        assert_eq!(code.prefix(), "W");
        assert_eq!(code.number(), 7);
        assert_eq!(code.as_str(), "W0007");
    }

    #[test]
    fn test_lexer_codes() {
        assert_eq!(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR.as_str(), "E1001");
        assert_eq!(DiagnosticCode::E_LEXER_UNTERMINATED_STRING.as_str(), "E1002");
        assert_ne!(
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING
        );
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
        assert_eq!(format!("{}", code), "E1001");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1001)");
    }
}
