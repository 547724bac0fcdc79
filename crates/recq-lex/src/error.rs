//! Error types for the recq scanner.
//!
//! [`LexError`] describes a malformed lexeme found while scanning.
//! [`ConfigError`] covers loading and saving a [`ScanConfig`](crate::ScanConfig).

use std::path::PathBuf;

use recq_util::span::line_at;
use recq_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet, Span};
use thiserror::Error;

/// A lexical error.
///
/// Every variant records where the offending lexeme starts. The scanner has
/// already consumed the bad input when it returns one of these, so the next
/// call to [`Scanner::next_token`](crate::Scanner::next_token) picks up after it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unexpected character {ch:?}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Location of the character.
        span: Span,
    },

    /// A string literal still open at end of input.
    #[error("unterminated string literal")]
    UnterminatedString {
        /// The quote character that would have closed the literal.
        quote: char,
        /// From the opening quote to end of input.
        span: Span,
    },

    /// A `(*` comment still open at end of input.
    #[error("unterminated block comment")]
    UnterminatedComment {
        /// From the opening `(*` to end of input.
        span: Span,
    },
}

impl LexError {
    /// Returns the location of the offending lexeme.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span, .. }
            | LexError::UnterminatedComment { span } => *span,
        }
    }

    /// Returns the diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedChar { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnterminatedComment { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LexError::UnexpectedChar { .. } => "not valid here",
            LexError::UnterminatedString { .. } => "string starts here",
            LexError::UnterminatedComment { .. } => "comment starts here",
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            LexError::UnexpectedChar { .. } => None,
            LexError::UnterminatedString { quote, .. } => {
                Some(format!("close the literal with `{}`", quote))
            }
            LexError::UnterminatedComment { .. } => Some("close the comment with `*)`".to_string()),
        }
    }

    /// Builds an error diagnostic for this error.
    ///
    /// `source` is the text that was scanned; when the error's line can be
    /// found in it, the diagnostic carries a snippet of that line.
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let span = self.span();
        let mut builder = DiagnosticBuilder::error(self.to_string())
            .code(self.code())
            .span(span);

        if let Some(line) = line_at(source, span.line) {
            let column = span.column as usize;
            builder = builder.snippet(SourceSnippet::new(
                line,
                span.line as usize,
                column,
                column + 1,
                Some(self.label()),
            ));
        }

        if let Some(help) = self.help() {
            builder = builder.help(help);
        }

        builder.build()
    }
}

/// Result type for scanner operations.
pub type LexResult<T> = std::result::Result<T, LexError>;

/// Error raised while loading or saving a scanner configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing the file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for a `ScanConfig`.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
