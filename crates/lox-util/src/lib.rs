//! lox-util - Shared foundation types for the Lox front end.
//!
//! This crate holds the pieces every phase of the front end needs but that
//! belong to none of them:
//!
//! - [`span`] - byte/line/column locations of lexemes in a source unit
//! - [`diagnostic`] - the diagnostic sink phases report into
//!
//! Phases never print and never decide exit codes. They record structured
//! diagnostics into a [`Handler`] and the driver decides what to do with them.
//!
//! # Example
//!
//! ```
//! use lox_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character.")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].to_string(), "[line 1] Error: Unexpected character.");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);
static_assertions::assert_impl_all!(Diagnostic: Clone, Send, Sync);
