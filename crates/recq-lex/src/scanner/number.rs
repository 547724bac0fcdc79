//! Number literal lexing.

use crate::token::TokenKind;
use crate::Scanner;

impl<'src> Scanner<'src> {
    /// Lexes an integer literal: a run of ASCII decimal digits.
    ///
    /// There is no sign, fraction or exponent, so `3.14` is three tokens.
    /// The value is left as text; the literal is never range-checked.
    pub(super) fn lex_number(&mut self) -> TokenKind {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        TokenKind::Number
    }
}

#[cfg(test)]
mod tests {
    use crate::{Scanner, TokenKind};

    #[test]
    fn test_integer() {
        let token = Scanner::new("12345").next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.text, "12345");
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        let token = Scanner::new("007").next_token().unwrap();
        assert_eq!(token.text, "007");
    }

    #[test]
    fn test_decimal_point_splits() {
        let tokens: Vec<_> = Scanner::new("3.14").map(Result::unwrap).collect();
        let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.text)).collect();
        assert_eq!(
            summary,
            vec![
                (TokenKind::Number, "3"),
                (TokenKind::Dot, "."),
                (TokenKind::Number, "14"),
            ]
        );
    }

    #[test]
    fn test_negative_is_minus_then_number() {
        let mut scanner = Scanner::new("-5");
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Minus);
        assert_eq!(scanner.next_token().unwrap().text, "5");
    }

    #[test]
    fn test_digits_then_letters() {
        let mut scanner = Scanner::new("10px");
        assert_eq!(scanner.next_token().unwrap().text, "10");
        let ident = scanner.next_token().unwrap();
        assert_eq!(ident.kind, TokenKind::Identifier);
        assert_eq!(ident.column, 3);
    }

    #[test]
    fn test_huge_literal_stays_text() {
        let digits = "9".repeat(64);
        let token = Scanner::new(&digits).next_token().unwrap();
        assert_eq!(token.text.len(), 64);
    }
}
