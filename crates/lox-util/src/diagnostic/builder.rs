//! Fluent construction of diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use lox_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use lox_util::Span;
///
/// let diag = DiagnosticBuilder::error("Unterminated string.")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 4, 1, 1))
///     .help("add a closing `\"`")
///     .build();
///
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.line(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set only the line, for diagnostics with no byte range
    pub fn line(mut self, line: u32) -> Self {
        self.span = Span::point(line, 0);
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
