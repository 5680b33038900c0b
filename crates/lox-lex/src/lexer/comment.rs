//! Comment handling.
//!
//! Lox only has line comments. A `//` runs to the end of the line; the
//! newline itself is left for the driver loop so line counting stays in one
//! place.

use crate::token::{Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a slash or skips a line comment.
    ///
    /// Handles: `/`, `// ...`
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            return None;
        }
        Some(self.make_token(TokenType::Slash))
    }

    /// Skips to the next `'\n'` or the end of input.
    fn skip_line_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}
