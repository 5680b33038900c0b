//! Identifier and keyword lexing.

use crate::chars::is_alpha_numeric;
use crate::token::{keyword_from_ident, Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or reserved word. The first character has
    /// already been consumed.
    ///
    /// The whole word is taken before the keyword lookup, so `classy` is an
    /// identifier and not `class` followed by `y`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_alpha_numeric);

        let kind = keyword_from_ident(self.lexeme()).unwrap_or(TokenType::Identifier);
        self.make_token(kind)
    }
}
