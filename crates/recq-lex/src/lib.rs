//! recq-lex - Lexical Analyzer for the recq language
//!
//! This crate turns recq source text into a stream of tokens for a parser.
//! recq mixes imperative statements (`if`, `while`, `function`, `let`),
//! typed record declarations (`type`, `record`, `array`) and query clauses
//! (`select`, `from`, `where`, `between`, `like`).
//!
//! # Example Usage
//!
//! ```
//! use recq_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("select name from people;");
//!
//! // Get tokens one at a time
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Select);
//!
//! // Or iterate through the rest
//! for result in &mut scanner {
//!     let token = result.unwrap();
//!     println!("{}:{} {}", token.line, token.column, token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens and the keyword table
//! - [`scanner`] - The scanner itself
//! - [`cursor`] - Character cursor for source traversal
//! - [`config`] - Scanner options and their TOML form
//! - [`error`] - Lexical and configuration errors
//! - [`unicode`] - Character classes
//!
//! # Lexical Structure
//!
//! - **Trivia**: spaces, tabs, `\r`, `\n` and `(* ... *)` block comments
//!   (not nested). Never emitted.
//! - **Identifiers**: a letter or `_`, then letters, digits or `_`.
//! - **Keywords**: matched without regard to case; the token text keeps the
//!   case as written.
//! - **Integers**: runs of ASCII digits. There are no float literals.
//! - **Strings**: `"..."` or `'...'`, no escapes, may span lines.
//! - **Operators**: `+ - * / = == != <> < <= > >= -> <- !`
//! - **Delimiters**: `( ) [ ] ; : , .`
//!
//! # Errors
//!
//! By default the scanner is strict: unexpected characters and unterminated
//! strings or comments come back as [`LexError`]. [`ScanConfig::legacy`]
//! reproduces the older permissive behaviour instead.

pub mod config;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use config::ScanConfig;
pub use cursor::Cursor;
pub use error::{ConfigError, LexError, LexResult};
pub use scanner::Scanner;
pub use token::{keyword_from_ident, Token, TokenKind};

use rayon::prelude::*;
use recq_util::Handler;

/// Scans `source` to the end with a fresh scanner.
///
/// Returns every token except the final `Eof`, and every error met on the
/// way. Scanning continues past errors.
///
/// # Example
///
/// ```
/// use recq_lex::{scan_all, ScanConfig};
///
/// let (tokens, errors) = scan_all("a # b", &ScanConfig::default());
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(errors.len(), 1);
/// ```
pub fn scan_all<'src>(source: &'src str, config: &ScanConfig) -> (Vec<Token<'src>>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for result in Scanner::with_config(source, *config) {
        match result {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }

    (tokens, errors)
}

/// Scans `source` to the end, reporting errors to `handler`.
///
/// Each [`LexError`] becomes an error diagnostic carrying its code and a
/// snippet of the offending line.
pub fn tokenize<'src>(source: &'src str, config: &ScanConfig, handler: &Handler) -> Vec<Token<'src>> {
    let (tokens, errors) = scan_all(source, config);

    for err in &errors {
        handler.emit_diagnostic(err.to_diagnostic(source));
    }

    tokens
}

/// Scans independent sources in parallel.
///
/// Each source gets its own scanner. Results are in input order.
pub fn scan_batch<'src>(
    sources: &[&'src str],
    config: &ScanConfig,
) -> Vec<(Vec<Token<'src>>, Vec<LexError>)> {
    let span = tracing::debug_span!("scan_batch", sources = sources.len());
    let _enter = span.enter();

    sources
        .par_iter()
        .map(|&source| scan_all(source, config))
        .collect()
}
