//! Lexical errors.
//!
//! Both kinds are local and non-fatal: the lexer records them and carries on
//! with the next lexeme. A failed lexeme never produces a token.

use lox_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

/// An error found while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no lexeme.
    #[error("Unexpected character.")]
    UnexpectedCharacter {
        /// The offending character, already consumed.
        ch: char,
        /// Where it was found.
        span: Span,
    },

    /// End of input reached inside a string literal.
    #[error("Unterminated string.")]
    UnterminatedString {
        /// The opening quote.
        opened: Span,
        /// Empty span at the end of input, where the error is reported.
        span: Span,
    },
}

impl LexError {
    /// Line the error is reported at.
    pub fn line(&self) -> u32 {
        self.span().line
    }

    /// Where the error is reported.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedString { span, .. } => *span,
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }
}

impl From<&LexError> for Diagnostic {
    fn from(err: &LexError) -> Self {
        let diag = Diagnostic::error(err.to_string(), err.span()).with_code(err.code());
        match err {
            LexError::UnexpectedCharacter { ch, .. } => diag.with_note(format!("found {:?}", ch)),
            LexError::UnterminatedString { opened, .. } => diag
                .with_note(format!("string opened at {}", opened))
                .with_help("add a closing `\"` to end the string"),
        }
    }
}
