//! String literal lexing.
//!
//! Strings run from `"` to the next `"` with no escape sequences. They may
//! span lines; each embedded newline advances the line counter, and the
//! token reports the line of its closing quote.

use lox_util::Span;

use crate::error::LexError;
use crate::token::{Literal, Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal. The opening quote has already been consumed.
    ///
    /// Returns `None` and records an error when input ends before the
    /// closing quote.
    pub(crate) fn lex_string(&mut self) -> Option<Token> {
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            let start = self.lexeme_span();
            let end = self.cursor.position();
            let opened = Span::new(start.start, start.start + 1, start.line, start.column);
            self.report(LexError::UnterminatedString {
                opened,
                span: Span::new(end, end, self.cursor.line(), self.cursor.column()),
            });
            return None;
        }

        // closing quote
        self.cursor.advance();

        let lexeme = self.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        Some(self.make_literal_token(TokenType::String, Some(Literal::Str(value.to_string()))))
    }
}
