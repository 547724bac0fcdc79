//! Edge case tests for recq-lex

#[cfg(test)]
mod tests {
    use crate::token::KEYWORDS;
    use crate::{scan_all, LexError, ScanConfig, Scanner, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let (tokens, errors) = scan_all(source, &ScanConfig::default());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_trivia_only() {
        let mut scanner = Scanner::new(" \t(* c *)\r\n\n (* d\n*)  ");
        let token = scanner.next_token().unwrap();
        assert!(token.is_eof());
        assert_eq!((token.line, token.column), (4, 5));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("let {} = 1;", name);
        let tokens = lex_all(&source);
        assert_eq!(tokens[1].text, name);
        assert_eq!(tokens[2].column, 10006);
    }

    #[test]
    fn test_edge_nul_character_is_unexpected() {
        let (tokens, errors) = scan_all("a\0b", &ScanConfig::default());
        assert_eq!(tokens.len(), 2);
        assert!(matches!(errors[0], LexError::UnexpectedChar { ch: '\0', .. }));
    }

    #[test]
    fn test_edge_reserved_kinds_never_produced() {
        let source = "float 1.5 true date time foreach \r\n boolean";
        for token in lex_all(source) {
            assert!(!token.kind.is_reserved(), "{:?}", token);
        }
    }

    #[test]
    fn test_edge_record_declaration() {
        assert_eq!(
            kinds("type Person = record name: string; age: number; end;"),
            vec![
                TokenKind::Type,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Record,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::StringType,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::NumberType,
                TokenKind::Semicolon,
                TokenKind::End,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_query_clause() {
        assert_eq!(
            kinds("SELECT * FROM orders WHERE total BETWEEN 10 AND 20 AND name LIKE 'A'"),
            vec![
                TokenKind::Select,
                TokenKind::Star,
                TokenKind::From,
                TokenKind::Identifier,
                TokenKind::Where,
                TokenKind::Identifier,
                TokenKind::Between,
                TokenKind::Number,
                TokenKind::Identifier,
                TokenKind::Number,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Like,
                TokenKind::String,
            ]
        );
    }

    #[test]
    fn test_edge_action_block() {
        assert_eq!(
            kinds("action start do x <- x + 1 stop"),
            vec![
                TokenKind::Action,
                TokenKind::Start,
                TokenKind::Do,
                TokenKind::Identifier,
                TokenKind::LeftArrow,
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::Stop,
            ]
        );
    }

    #[test]
    fn test_edge_legacy_reproduces_old_scanner() {
        let (tokens, errors) = scan_all("a:b [1] [=x 'q\" #", &ScanConfig::legacy());
        assert!(errors.is_empty());

        let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.text)).collect();
        assert_eq!(
            summary,
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Dot, "."),
                (TokenKind::Identifier, "b"),
                (TokenKind::Eof, "["),
                (TokenKind::Number, "1"),
                (TokenKind::Eof, "]"),
                (TokenKind::LBracket, "[="),
                (TokenKind::Identifier, "x"),
                (TokenKind::String, "q"),
                (TokenKind::Eof, "#"),
            ]
        );
    }

    #[test]
    fn test_edge_positions_monotonic() {
        let source = "function f(a, b)\n  return a <> b;\n(* done *)\nend";
        let tokens = lex_all(source);
        for pair in tokens.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
            assert!((pair[0].line, pair[0].column) < (pair[1].line, pair[1].column));
        }
    }

    // ==================== PROPERTY TESTS ====================

    #[test]
    fn test_property_identifiers() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].text, input.as_str());

            let expected = crate::keyword_from_ident(&input).unwrap_or(TokenKind::Identifier);
            prop_assert_eq!(tokens[0].kind, expected);
        });
    }

    #[test]
    fn test_property_digit_runs() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,30}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Number);
            prop_assert_eq!(tokens[0].text, input.as_str());
        });
    }

    #[test]
    fn test_property_keyword_any_case() {
        use proptest::prelude::*;

        proptest!(|(index in 0..KEYWORDS.len(), mask in any::<u16>())| {
            let (spelling, kind) = KEYWORDS[index];
            let mixed: String = spelling
                .chars()
                .enumerate()
                .map(|(i, c)| if mask & (1 << i) != 0 { c.to_ascii_uppercase() } else { c })
                .collect();

            let tokens = lex_all(&mixed);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, kind);
            prop_assert_eq!(tokens[0].text, mixed.as_str());
        });
    }

    #[test]
    fn test_property_texts_rebuild_source() {
        use proptest::prelude::*;

        // No quotes, no `(` (comments), no unknown characters
        proptest!(|(input in "[a-z0-9_+*/=<>!;,.:\\[\\]) \n\t-]{0,60}")| {
            let tokens = lex_all(&input);
            let rebuilt: String = tokens.iter().map(|t| t.text).collect();
            let collapsed: String = input.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(rebuilt, collapsed);
        });
    }

    #[test]
    fn test_property_never_panics_and_terminates() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,80}")| {
            for config in [ScanConfig::default(), ScanConfig::legacy()] {
                let mut scanner = Scanner::with_config(&input, config);
                let mut last = 0;
                // Each call consumes at least one character until Eof
                for _ in 0..=input.chars().count() {
                    match scanner.next_token() {
                        Ok(token) if token.is_eof() => break,
                        _ => {}
                    }
                    prop_assert!(scanner.position() > last);
                    last = scanner.position();
                }
                prop_assert!(scanner.next_token().map(|t| t.is_eof()).unwrap_or(false));
            }
        });
    }

    #[test]
    fn test_property_positions_match_source() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 \n=<;]{0,60}")| {
            for token in lex_all(&input) {
                let before = &input[..token.span.start];
                let line = before.matches('\n').count() as u32 + 1;
                let column = before
                    .rsplit('\n')
                    .next()
                    .map(|s| s.chars().count())
                    .unwrap_or(0) as u32 + 1;

                prop_assert_eq!(token.line, line);
                prop_assert_eq!(token.column, column);
                prop_assert_eq!(&input[token.span.start..token.span.end], token.text);
            }
        });
    }
}
