//! String literal lexing.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'src> Scanner<'src> {
    /// Lexes a string literal opened by `"` or `'`.
    ///
    /// The token text is the content between the quotes; the span covers
    /// the quotes too. Backslashes are ordinary characters. With
    /// `symmetric_quotes` off, only `"` closes a literal, whichever quote
    /// opened it.
    ///
    /// # Errors
    ///
    /// In strict mode, a literal still open at end of input is an
    /// [`LexError::UnterminatedString`]. Permissive mode returns the content
    /// up to end of input as a normal string token.
    pub(super) fn lex_string(&mut self) -> LexResult<Token<'src>> {
        let opener = self.cursor.current_char();
        let closer = if self.config.symmetric_quotes { opener } else { '"' };

        self.cursor.advance();
        let content_start = self.cursor.position();

        while !self.cursor.is_at_end() && self.cursor.current_char() != closer {
            self.cursor.advance();
        }

        let content = self.cursor.slice_from(content_start);

        if self.cursor.is_at_end() {
            if self.config.strict {
                return Err(LexError::UnterminatedString {
                    quote: closer,
                    span: self.token_span(),
                });
            }
        } else {
            self.cursor.advance();
        }

        Ok(Token::new(TokenKind::String, content, self.token_span()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{LexError, ScanConfig, Scanner, TokenKind};
    use recq_util::Span;

    #[test]
    fn test_double_quoted() {
        let mut scanner = Scanner::new("\"hello\"");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, "hello");
        assert_eq!(token.span, Span::new(0, 7, 1, 1));
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_single_quoted_closes_on_single_quote() {
        let mut scanner = Scanner::new("'abc' x");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.text, "abc");
        assert_eq!(scanner.next_token().unwrap().text, "x");
    }

    #[test]
    fn test_other_quote_inside_is_content() {
        let token = Scanner::new("\"it's\"").next_token().unwrap();
        assert_eq!(token.text, "it's");
    }

    #[test]
    fn test_legacy_single_quote_closes_on_double() {
        let mut scanner = Scanner::with_config("'abc' \"x", ScanConfig::legacy());
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, "abc' ");
        assert_eq!(scanner.next_token().unwrap().text, "x");
    }

    #[test]
    fn test_empty_string() {
        let token = Scanner::new("\"\"").next_token().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, "");
        assert!(!token.is_eof());
    }

    #[test]
    fn test_backslash_is_literal() {
        let token = Scanner::new(r#""a\nb""#).next_token().unwrap();
        assert_eq!(token.text, r"a\nb");
    }

    #[test]
    fn test_multiline_string_position() {
        let mut scanner = Scanner::new("  \"one\ntwo\" x");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.text, "one\ntwo");
        assert_eq!((token.line, token.column), (1, 3));

        let next = scanner.next_token().unwrap();
        assert_eq!((next.line, next.column), (2, 6));
    }

    #[test]
    fn test_unterminated_strict() {
        let mut scanner = Scanner::new("x = \"open");
        scanner.next_token().unwrap();
        scanner.next_token().unwrap();

        let err = scanner.next_token().unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedString {
                quote: '"',
                span: Span::new(4, 9, 1, 5),
            }
        );
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_unterminated_single_quote_expects_its_closer() {
        let err = Scanner::new("'abc").next_token().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { quote: '\'', .. }));
    }

    #[test]
    fn test_unterminated_asymmetric_expects_double_quote() {
        let config = ScanConfig {
            symmetric_quotes: false,
            ..ScanConfig::default()
        };
        let mut scanner = Scanner::with_config("'abc'", config);
        let err = scanner.next_token().unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedString {
                quote: '"',
                span: Span::new(0, 5, 1, 1),
            }
        );

        let diag = err.to_diagnostic("'abc'");
        assert_eq!(diag.helps, vec!["close the literal with `\"`".to_string()]);
    }

    #[test]
    fn test_unterminated_permissive() {
        let config = ScanConfig {
            strict: false,
            ..ScanConfig::default()
        };
        let mut scanner = Scanner::with_config("'open", config);
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, "open");
        assert!(scanner.next_token().unwrap().is_eof());
    }
}
