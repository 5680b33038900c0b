//! Edge case tests for lox-lex

#[cfg(test)]
mod tests {
    use crate::{scan, LexError, Literal, Token, TokenType, TokenType::*};

    fn kinds(source: &str) -> Vec<TokenType> {
        scan(source).tokens.iter().map(|t| t.kind).collect()
    }

    fn check_stream(source: &str, tokens: &[Token]) {
        let last = tokens.last().expect("stream is never empty");
        assert!(last.is_eof());
        assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        assert_eq!(last.lexeme, "");

        for tok in &tokens[..tokens.len() - 1] {
            assert_eq!(tok.span.slice(source), Some(tok.lexeme.as_str()), "{tok:?}");
        }
        for pair in tokens.windows(2) {
            assert!(pair[0].line <= pair[1].line);
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let out = scan("");
        assert_eq!(out.tokens.len(), 1);
        assert_eq!(out.tokens[0].line, 1);
        assert!(out.errors.is_empty());
    }

    #[test]
    fn test_edge_operator_sequence() {
        assert_eq!(
            kinds("! = == <= >= != < >"),
            vec![Bang, Equal, EqualEqual, LessEqual, GreaterEqual, BangEqual, Less, Greater, Eof]
        );
    }

    #[test]
    fn test_edge_comment_then_number() {
        let out = scan("// header\n123");
        assert_eq!(out.tokens.len(), 2);
        assert_eq!(out.tokens[0].kind, Number);
        assert_eq!(out.tokens[0].line, 2);
        assert_eq!(out.tokens[0].literal, Some(Literal::Number(123.0)));
    }

    #[test]
    fn test_edge_multiline_string_counts_lines() {
        let src = "\"a\nb\nc\" x";
        let out = scan(src);
        assert_eq!(out.tokens[0].line, 3);
        assert_eq!(out.tokens[1].kind, Identifier);
        assert_eq!(out.tokens[1].line, 3);
        check_stream(src, &out.tokens);
    }

    #[test]
    fn test_edge_number_dot_number_dot() {
        let out = scan("12.5.");
        assert_eq!(kinds("12.5."), vec![Number, Dot, Eof]);
        assert_eq!(out.tokens[0].lexeme, "12.5");
    }

    #[test]
    fn test_edge_unterminated_string_is_last_thing() {
        let out = scan("print \"never closed;\nvar x");
        assert_eq!(
            out.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![Print, Eof]
        );
        assert_eq!(out.errors.len(), 1);
        assert!(matches!(out.errors[0], LexError::UnterminatedString { .. }));
        assert_eq!(out.errors[0].line(), 2);
    }

    #[test]
    fn test_edge_error_then_recovery() {
        let out = scan("@foo");
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].line(), 1);
        assert_eq!(out.tokens[0].kind, Identifier);
        assert_eq!(out.tokens[0].lexeme, "foo");
    }

    #[test]
    fn test_edge_keyword_prefix() {
        assert_eq!(kinds("classy = 1"), vec![Identifier, Equal, Number, Eof]);
        assert_eq!(kinds("class y"), vec![Class, Identifier, Eof]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let out = scan(&format!("var {} = 1;", name));
        assert_eq!(out.tokens[1].lexeme, name);
    }

    #[test]
    fn test_edge_errors_keep_source_order() {
        let out = scan("# \n $ \n \"x");
        let lines: Vec<u32> = out.errors.iter().map(|e| e.line()).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let out = scan("a\r\nb\r\n");
        let lines: Vec<u32> = out.tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
        assert!(out.errors.is_empty());
    }

    #[test]
    fn test_edge_scan_is_repeatable() {
        let src = "fun f(a, b) { return a >= b; } // done\n@ \"open";
        assert_eq!(scan(src), scan(src));
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_any_input_ends_in_eof() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,200}")| {
            let out = scan(&input);
            check_stream(&input, &out.tokens);
        });
    }

    #[test]
    fn test_property_lox_alphabet() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9_ .,;(){}+*/<>=!\"\\n-]{0,200}")| {
            let out = scan(&input);
            check_stream(&input, &out.tokens);
            let only_unterminated = out
                .errors
                .iter()
                .all(|e| matches!(e, LexError::UnterminatedString { .. }));
            prop_assert!(only_unterminated);
            prop_assert_eq!(out.tokens.last().map(|t| t.line), Some(1 + input.matches('\n').count() as u32));
        });
    }

    #[test]
    fn test_property_identifiers() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,50}")| {
            let out = scan(&input);
            prop_assert_eq!(out.tokens.len(), 2);
            let expected = crate::keyword_from_ident(&input).unwrap_or(Identifier);
            prop_assert_eq!(out.tokens[0].kind, expected);
            prop_assert_eq!(&out.tokens[0].lexeme, &input);
        });
    }

    #[test]
    fn test_property_numbers() {
        use proptest::prelude::*;

        proptest!(|(whole in "[0-9]{1,12}", frac in proptest::option::of("[0-9]{1,6}"))| {
            let input = match &frac {
                Some(f) => format!("{}.{}", whole, f),
                None => whole.clone(),
            };
            let out = scan(&input);
            prop_assert_eq!(out.tokens.len(), 2);
            prop_assert_eq!(out.tokens[0].kind, Number);
            let expected: f64 = input.parse().unwrap();
            prop_assert_eq!(out.tokens[0].literal.clone(), Some(Literal::Number(expected)));
        });
    }

    #[test]
    fn test_property_string_literals() {
        use proptest::prelude::*;

        proptest!(|(body in "[^\"]{0,100}")| {
            let source = format!("\"{}\"", body);
            let out = scan(&source);
            prop_assert!(out.errors.is_empty());
            prop_assert_eq!(out.tokens[0].kind, String);
            prop_assert_eq!(out.tokens[0].literal.clone(), Some(Literal::Str(body.clone())));
        });
    }
}
