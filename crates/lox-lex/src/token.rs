//! Token definitions for the Lox lexer.
//!
//! A [`Token`] is a classified lexeme: its [`TokenType`] tag, the exact source
//! text, an optional decoded [`Literal`], and where it came from. The tag set
//! is closed; the parser can match on it exhaustively.

use std::fmt;

use lazy_static::lazy_static;
use lox_util::Span;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Every kind of token the lexer can produce.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenType {
    /// Upper-case tag name, e.g. `BANG_EQUAL`.
    pub const fn name(self) -> &'static str {
        use TokenType::*;
        match self {
            LeftParen => "LEFT_PAREN",
            RightParen => "RIGHT_PAREN",
            LeftBrace => "LEFT_BRACE",
            RightBrace => "RIGHT_BRACE",
            Comma => "COMMA",
            Dot => "DOT",
            Minus => "MINUS",
            Plus => "PLUS",
            Semicolon => "SEMICOLON",
            Slash => "SLASH",
            Star => "STAR",
            Bang => "BANG",
            BangEqual => "BANG_EQUAL",
            Equal => "EQUAL",
            EqualEqual => "EQUAL_EQUAL",
            Greater => "GREATER",
            GreaterEqual => "GREATER_EQUAL",
            Less => "LESS",
            LessEqual => "LESS_EQUAL",
            Identifier => "IDENTIFIER",
            String => "STRING",
            Number => "NUMBER",
            And => "AND",
            Class => "CLASS",
            Else => "ELSE",
            False => "FALSE",
            Fun => "FUN",
            For => "FOR",
            If => "IF",
            Nil => "NIL",
            Or => "OR",
            Print => "PRINT",
            Return => "RETURN",
            Super => "SUPER",
            This => "THIS",
            True => "TRUE",
            Var => "VAR",
            While => "WHILE",
            Eof => "EOF",
        }
    }

    /// Returns true for reserved words.
    pub const fn is_keyword(self) -> bool {
        use TokenType::*;
        matches!(
            self,
            And | Class
                | Else
                | False
                | Fun
                | For
                | If
                | Nil
                | Or
                | Print
                | Return
                | Super
                | This
                | True
                | Var
                | While
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static! {
    /// Reserved-word spellings. Built on first use and never written again.
    static ref KEYWORDS: FxHashMap<&'static str, TokenType> = {
        let mut map = FxHashMap::default();
        map.insert("and", TokenType::And);
        map.insert("class", TokenType::Class);
        map.insert("else", TokenType::Else);
        map.insert("false", TokenType::False);
        map.insert("for", TokenType::For);
        map.insert("fun", TokenType::Fun);
        map.insert("if", TokenType::If);
        map.insert("nil", TokenType::Nil);
        map.insert("or", TokenType::Or);
        map.insert("print", TokenType::Print);
        map.insert("return", TokenType::Return);
        map.insert("super", TokenType::Super);
        map.insert("this", TokenType::This);
        map.insert("true", TokenType::True);
        map.insert("var", TokenType::Var);
        map.insert("while", TokenType::While);
        map
    };
}

/// Looks up a reserved word. Matching is exact and case-sensitive.
///
/// ```
/// use lox_lex::{keyword_from_ident, TokenType};
///
/// assert_eq!(keyword_from_ident("class"), Some(TokenType::Class));
/// assert_eq!(keyword_from_ident("Class"), None);
/// assert_eq!(keyword_from_ident("classy"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenType> {
    KEYWORDS.get(text).copied()
}

/// Decoded value carried by `STRING` and `NUMBER` tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// Text between the quotes, verbatim.
    Str(String),
    /// Every number literal is a 64-bit float.
    Number(f64),
}

impl Literal {
    /// The string payload, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(s) => Some(s),
            Literal::Number(_) => None,
        }
    }

    /// The numeric payload, if this is a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::Str(_) => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => f.write_str(s),
            // `{:?}` keeps the fractional part: 123.0, not 123
            Literal::Number(n) => write!(f, "{:?}", n),
        }
    }
}

/// A classified lexeme.
///
/// `lexeme` is the exact source slice the token was recognized from (empty
/// for `EOF`). `span` locates that slice in the source buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Token tag.
    #[serde(rename = "type")]
    pub kind: TokenType,
    /// Raw source text of the token.
    pub lexeme: String,
    /// Decoded value for `STRING` and `NUMBER`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<Literal>,
    /// Line the token ended on (1-based).
    pub line: u32,
    /// Byte range and start position of the lexeme.
    #[serde(skip)]
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(
        kind: TokenType,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: u32,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The end-of-input sentinel.
    pub fn eof(line: u32, span: Span) -> Self {
        Self::new(TokenType::Eof, "", None, line, span)
    }

    /// Returns true for the end-of-input sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {}", literal)?;
        }
        Ok(())
    }
}
