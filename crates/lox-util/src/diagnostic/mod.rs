//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Front-end phases record [`Diagnostic`]s into a [`Handler`]. The handler
//! only collects: it never prints and never terminates the process. The
//! caller inspects it afterwards and decides how to present the results and
//! whether to continue.
//!
//! # Examples
//!
//! ```
//! use lox_util::diagnostic::{Diagnostic, Handler};
//! use lox_util::Span;
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::error("Unterminated string.", Span::point(3, 1)));
//!
//! if handler.has_errors() {
//!     for diag in handler.diagnostics() {
//!         eprintln!("{}", diag);
//!     }
//! }
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error; the input should not be handed to later phases
    Error,
    /// A warning that doesn't block later phases
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true for [`Level::Error`].
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Level::Error)
    }

    /// Capitalised label used in report lines.
    pub const fn title(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Note => "Note",
            Level::Help => "Help",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Source line the diagnostic points at (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }
}

/// Renders the classic one-line report: `[line 3] Error: Unexpected character.`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] {}: {}",
            self.span.line,
            self.level.title(),
            self.message
        )
    }
}

/// Handler for collecting diagnostics
///
/// Diagnostics are kept in emission order. The handler can be configured to
/// panic on errors, which is handy in tests that expect clean input.
///
/// # Examples
///
/// ```
/// use lox_util::diagnostic::{Diagnostic, Handler};
/// use lox_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("Unexpected character.", Span::point(1, 1)));
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level.is_error() {
            panic!("Diagnostic error: {}", diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Create a diagnostic builder for a warning at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
