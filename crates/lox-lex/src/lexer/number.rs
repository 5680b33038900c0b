//! Number literal lexing.
//!
//! Grammar: `digit+ ( '.' digit+ )?`. There is no sign, no exponent, and no
//! leading or trailing dot; a `.` not followed by a digit is left for the
//! next lexeme.

use crate::chars::is_digit;
use crate::token::{Literal, Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal. The first digit has already been consumed.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(is_digit);

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        // digits with at most one interior dot always parse
        let value = self.lexeme().parse::<f64>().unwrap_or(f64::NAN);
        self.make_literal_token(TokenType::Number, Some(Literal::Number(value)))
    }
}
