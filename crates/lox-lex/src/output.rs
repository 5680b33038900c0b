//! Result of scanning a whole source unit.

use lox_util::{Diagnostic, Handler};

use crate::error::LexError;
use crate::token::Token;

/// Tokens and errors from one scan.
///
/// `tokens` always ends with exactly one `EOF`, even when `errors` is not
/// empty. Both lists are in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanOutput {
    /// Every recognized token, `EOF` last.
    pub tokens: Vec<Token>,
    /// Every lexical error, in the order found.
    pub errors: Vec<LexError>,
}

impl ScanOutput {
    /// Returns true if at least one lexical error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Converts every error into a [`Diagnostic`].
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(Diagnostic::from).collect()
    }

    /// Emits every error into `handler`.
    pub fn emit_into(&self, handler: &Handler) {
        for diag in self.diagnostics() {
            handler.emit_diagnostic(diag);
        }
    }
}
