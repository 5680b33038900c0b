//! lox-lex - Lexical Analyzer for the Lox scripting language
//!
//! This crate turns Lox source text into a flat sequence of tokens ending in
//! a single `EOF`. Scanning never stops early: characters that start no
//! lexeme and strings that never close are recorded as [`LexError`]s and
//! returned next to the tokens.
//!
//! # Example Usage
//!
//! ```
//! use lox_lex::{scan, Literal, TokenType};
//!
//! let output = scan("var x = 12.5; // comment\n\"hi\"");
//! assert!(!output.has_errors());
//!
//! let number = &output.tokens[3];
//! assert_eq!(number.kind, TokenType::Number);
//! assert_eq!(number.literal, Some(Literal::Number(12.5)));
//!
//! let string = &output.tokens[5];
//! assert_eq!(string.lexeme, "\"hi\"");
//! assert_eq!(string.line, 2);
//! assert!(output.tokens.last().unwrap().is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, tag, and literal definitions plus the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! - **Punctuation**: `(` `)` `{` `}` `,` `.` `-` `+` `;` `*` `/`
//! - **Operators**: `!` `!=` `=` `==` `<` `<=` `>` `>=`
//! - **Literals**: strings (`"..."`, no escapes, may span lines) and
//!   numbers (`123`, `12.5`)
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Keywords**: `and class else false for fun if nil or print return
//!   super this true var while`
//! - **EOF**: end of input marker

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
mod output;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use output::ScanOutput;
pub use token::{keyword_from_ident, Literal, Token, TokenType};

static_assertions::assert_impl_all!(Token: Send, Sync, Clone);
static_assertions::assert_impl_all!(ScanOutput: Send, Sync);
static_assertions::assert_impl_all!(LexError: Send, Sync, std::error::Error);

/// Scans `source` into tokens and errors.
///
/// Shorthand for `Lexer::new(source).scan_tokens()`.
pub fn scan(source: &str) -> ScanOutput {
    Lexer::new(source).scan_tokens()
}
