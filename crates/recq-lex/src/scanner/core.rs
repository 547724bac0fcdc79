//! Core scanner implementation.
//!
//! This module contains the Scanner struct, token dispatch and the
//! `Iterator` implementation.

use recq_util::Span;
use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// Scanner for recq source text.
///
/// The scanner turns source text into a stream of tokens, one per call to
/// [`next_token`](Scanner::next_token). It skips whitespace and `(* ... *)`
/// comments, and classifies identifiers, keywords, integers, strings,
/// operators and delimiters.
///
/// # Example
///
/// ```
/// use recq_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("let x = 10;");
/// let token = scanner.next_token().unwrap();
/// assert_eq!(token.kind, TokenKind::Let);
/// assert_eq!((token.line, token.column), (1, 1));
/// ```
///
/// The cursor only moves through `next_token`; trivia cannot be skipped on
/// its own from outside:
///
/// ```compile_fail
/// use recq_lex::Scanner;
///
/// let mut scanner = Scanner::new("  x");
/// scanner.skip_trivia().unwrap();
/// ```
pub struct Scanner<'src> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'src>,

    /// Active configuration.
    pub(super) config: ScanConfig,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over `source` with the default configuration.
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, ScanConfig::default())
    }

    /// Creates a scanner over `source` with an explicit configuration.
    pub fn with_config(source: &'src str, config: ScanConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character. Once the input is exhausted, this keeps returning an
    /// `Eof` token with empty text at the final position.
    ///
    /// # Errors
    ///
    /// In strict mode, returns a [`LexError`] for an unexpected character,
    /// an unterminated string or an unterminated comment. The bad input has
    /// been consumed, so calling again continues after it.
    pub fn next_token(&mut self) -> LexResult<Token<'src>> {
        let result = self.scan_token();

        match &result {
            Ok(token) => trace!(
                kind = ?token.kind,
                line = token.line,
                column = token.column,
                "token"
            ),
            Err(err) => debug!(
                error = %err,
                line = err.span().line,
                column = err.span().column,
                "lexical error"
            ),
        }

        result
    }

    fn scan_token(&mut self) -> LexResult<Token<'src>> {
        self.skip_trivia()?;
        self.mark_token_start();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof));
        }

        let kind = match self.cursor.current_char() {
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            '"' | '\'' => return self.lex_string(),
            ':' => return Ok(self.lex_colon()),
            '-' => self.lex_minus(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '!' => self.lex_bang(),
            '+' => self.single(TokenKind::Plus),
            '*' => self.single(TokenKind::Star),
            '/' => self.single(TokenKind::Slash),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            '[' => match self.lex_bracket(TokenKind::LBracket) {
                Some(kind) => kind,
                None => return self.lex_unknown(),
            },
            ']' => match self.lex_bracket(TokenKind::RBracket) {
                Some(kind) => kind,
                None => return self.lex_unknown(),
            },
            _ => return self.lex_unknown(),
        };

        Ok(self.make_token(kind))
    }

    /// Consumes one character that nothing else claimed.
    ///
    /// Strict mode reports it as an error. Permissive mode returns it as an
    /// `Eof`-kind token whose text is the character.
    fn lex_unknown(&mut self) -> LexResult<Token<'src>> {
        let ch = self.cursor.current_char();
        self.cursor.advance();
        let token = self.make_token(TokenKind::Eof);

        if self.config.strict {
            Err(LexError::UnexpectedChar {
                ch,
                span: token.span,
            })
        } else {
            debug!(ch = ?ch, line = token.line, column = token.column, "unknown character");
            Ok(token)
        }
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the start of the current token to the cursor.
    pub(super) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Builds a token whose text is the source consumed since the token start.
    pub(super) fn make_token(&self, kind: TokenKind) -> Token<'src> {
        let text = self.cursor.slice_from(self.token_start);
        Token::new(kind, text, self.token_span())
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Returns the current line number (1-based).
    ///
    /// # Returns
    /// The line number of the next character to be scanned.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once every character of the source has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = LexResult<Token<'src>>;

    /// Yields results until the true end of input.
    ///
    /// Permissive-mode unknown characters are yielded, since they carry text.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            other => Some(other),
        }
    }
}
