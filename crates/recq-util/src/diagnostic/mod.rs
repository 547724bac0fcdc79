//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and reporting
//! diagnostics produced while scanning recq source.
//!
//! # Examples
//!
//! ```
//! use recq_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use recq_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(8, 9, 1, 9))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::{Cell, RefCell};
use std::fmt;

/// Diagnostic severity level
///
/// Scanning only ever fails hard, so errors are the one severity.
///
/// # Examples
///
/// ```
/// use recq_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error in the input
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic with no code, help or snippet
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Render the diagnostic the way it is shown to a user.
    ///
    /// ```text
    /// error[E1001]: unexpected character '#'
    ///  --> 1:9
    ///   1 | let x = # 42;
    ///     |         ^
    /// ```
    pub fn render(&self) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };
        if self.span != Span::DUMMY {
            out.push_str(&format!(" --> {}:{}\n", self.span.line, self.span.column));
        }
        for snippet in &self.snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics behind a shared reference so that
/// several producers can report into it. It can be configured to panic on
/// errors for testing.
///
/// # Examples
///
/// ```
/// use recq_util::diagnostic::{DiagnosticBuilder, Handler};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected character").emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: Cell<bool>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: Cell::new(false),
        }
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: Cell::new(true),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error.get() && diagnostic.level == Level::Error {
            panic!("Diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
