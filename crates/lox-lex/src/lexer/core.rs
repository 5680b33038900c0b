//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the per-lexeme bookkeeping and the
//! top-level dispatch on the first character of each lexeme.

use lox_util::Span;
use tracing::{debug, trace};

use crate::chars::{is_alpha, is_blank, is_digit};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::output::ScanOutput;
use crate::token::{Literal, Token, TokenType};

/// Lexer for the Lox scripting language.
///
/// A lexer is built for one source unit, driven to the end once, and
/// dropped. It never stops on an error: failed lexemes are recorded and
/// skipped, and the token stream always ends with exactly one `EOF`.
///
/// # Example
///
/// ```
/// use lox_lex::{Lexer, TokenType};
///
/// let output = Lexer::new("print 1 + 2;").scan_tokens();
/// let kinds: Vec<TokenType> = output.tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenType::Print,
///         TokenType::Number,
///         TokenType::Plus,
///         TokenType::Number,
///         TokenType::Semicolon,
///         TokenType::Eof,
///     ]
/// );
/// assert!(output.errors.is_empty());
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Errors recorded so far, in source order.
    errors: Vec<LexError>,

    /// Byte offset of the first character of the lexeme being recognized.
    token_start: usize,

    /// Line where the current lexeme starts (1-based).
    token_start_line: u32,

    /// Column where the current lexeme starts (1-based).
    token_start_column: u32,

    /// Set once the `EOF` token has been handed out.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            errors: Vec::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Scans the whole source and returns every token plus every error.
    pub fn scan_tokens(mut self) -> ScanOutput {
        let tokens: Vec<Token> = self.by_ref().collect();

        debug!(
            bytes = self.cursor.source().len(),
            tokens = tokens.len(),
            errors = self.errors.len(),
            "scan finished"
        );

        ScanOutput {
            tokens,
            errors: self.errors,
        }
    }

    /// Returns the next token, skipping whitespace, comments and failed
    /// lexemes. Once input is exhausted this returns `EOF` on every call.
    pub fn next_token(&mut self) -> Token {
        while !self.cursor.is_at_end() {
            self.begin_lexeme();
            if let Some(token) = self.scan_token() {
                return token;
            }
        }

        self.begin_lexeme();
        Token::eof(self.cursor.line(), self.lexeme_span())
    }

    /// Recognizes exactly one lexeme. `None` when the lexeme yields no
    /// token: whitespace, a comment, or an error.
    fn scan_token(&mut self) -> Option<Token> {
        let c = self.cursor.advance();

        let kind = match c {
            '(' => TokenType::LeftParen,
            ')' => TokenType::RightParen,
            '{' => TokenType::LeftBrace,
            '}' => TokenType::RightBrace,
            ',' => TokenType::Comma,
            '.' => TokenType::Dot,
            '-' => TokenType::Minus,
            '+' => TokenType::Plus,
            ';' => TokenType::Semicolon,
            '*' => TokenType::Star,
            '!' => self.lex_bang(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => return self.lex_slash(),
            // the cursor has already counted the newline
            '\n' => return None,
            c if is_blank(c) => return None,
            '"' => return self.lex_string(),
            c if is_digit(c) => return Some(self.lex_number()),
            c if is_alpha(c) => return Some(self.lex_identifier()),
            c => {
                self.report(LexError::UnexpectedCharacter {
                    ch: c,
                    span: self.lexeme_span(),
                });
                return None;
            },
        };

        Some(self.make_token(kind))
    }

    /// Marks the cursor position as the start of a new lexeme.
    pub(crate) fn begin_lexeme(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Source text of the current lexeme.
    pub(crate) fn lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Span of the current lexeme.
    pub(crate) fn lexeme_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    pub(crate) fn make_token(&self, kind: TokenType) -> Token {
        self.make_literal_token(kind, None)
    }

    pub(crate) fn make_literal_token(&self, kind: TokenType, literal: Option<Literal>) -> Token {
        Token::new(
            kind,
            self.lexeme(),
            literal,
            self.cursor.line(),
            self.lexeme_span(),
        )
    }

    /// Records a lexical error; scanning continues.
    pub(crate) fn report(&mut self, error: LexError) {
        trace!(line = error.line(), %error, "lexical error");
        self.errors.push(error);
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Yields every token up to and including the single `EOF`, then `None`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}
