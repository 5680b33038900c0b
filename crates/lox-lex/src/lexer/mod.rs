//! Lexer module.
//!
//! The implementation is split by sub-scanner:
//! - `core` - Lexer struct, driver loop, single-character dispatch
//! - `operator` - one/two-character operators
//! - `comment` - line comments
//! - `number` - number literals
//! - `string` - string literals
//! - `identifier` - identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
