//! Operator and punctuation lexing.
//!
//! Each lexer consumes its first character and at most one more. The longest
//! match wins, so `<=` is one token rather than `<` followed by `=`.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'src> Scanner<'src> {
    /// Consumes one character and returns `kind`.
    pub(super) fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Lexes minus or right arrow.
    ///
    /// Handles: `-`, `->`
    pub(super) fn lex_minus(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('>') {
            TokenKind::RightArrow
        } else {
            TokenKind::Minus
        }
    }

    /// Lexes assignment or equality.
    ///
    /// Handles: `=`, `==`
    pub(super) fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::Equal
        } else {
            TokenKind::Assign
        }
    }

    /// Lexes less-than and its compounds.
    ///
    /// Handles: `<`, `<=`, `<>`, `<-`
    pub(super) fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::LessEqual
        } else if self.cursor.match_char('>') {
            TokenKind::NotEqual
        } else if self.cursor.match_char('-') {
            TokenKind::LeftArrow
        } else {
            TokenKind::Less
        }
    }

    /// Lexes greater-than.
    ///
    /// Handles: `>`, `>=`
    pub(super) fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        }
    }

    /// Lexes logical not or inequality.
    ///
    /// Handles: `!`, `!=`
    pub(super) fn lex_bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::NotEqual
        } else {
            TokenKind::Not
        }
    }

    /// Lexes `:`, which is a `Dot` with text `.` under `colon_as_dot`.
    pub(super) fn lex_colon(&mut self) -> Token<'src> {
        self.cursor.advance();
        if self.config.colon_as_dot {
            Token::new(TokenKind::Dot, ".", self.token_span())
        } else {
            self.make_token(TokenKind::Colon)
        }
    }

    /// Lexes `[` or `]` as `kind`.
    ///
    /// Under `bracket_requires_eq` the bracket must be directly followed by
    /// `=`, and both characters are consumed. Returns `None`, consuming
    /// nothing, when that guard fails.
    pub(super) fn lex_bracket(&mut self, kind: TokenKind) -> Option<TokenKind> {
        if self.config.bracket_requires_eq {
            if self.cursor.peek_char(1) != '=' {
                return None;
            }
            self.cursor.advance_n(2);
        } else {
            self.cursor.advance();
        }
        Some(kind)
    }
}
