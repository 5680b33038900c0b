//! One- and two-character operators.
//!
//! Each function runs after the first character has been consumed and
//! greedily takes a trailing `=` when one follows.

use crate::token::TokenType;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> TokenType {
        self.pick_with_equal(TokenType::BangEqual, TokenType::Bang)
    }

    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> TokenType {
        self.pick_with_equal(TokenType::EqualEqual, TokenType::Equal)
    }

    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> TokenType {
        self.pick_with_equal(TokenType::LessEqual, TokenType::Less)
    }

    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> TokenType {
        self.pick_with_equal(TokenType::GreaterEqual, TokenType::Greater)
    }

    #[inline]
    fn pick_with_equal(&mut self, with_equal: TokenType, alone: TokenType) -> TokenType {
        if self.cursor.match_char('=') {
            with_equal
        } else {
            alone
        }
    }
}
