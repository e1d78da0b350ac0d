//! # Integration Tests for the SQL Tokenizer
//!
//! End-to-end tests exercising the public tokenizer surface. Tests are
//! organized by feature area and verify observable behavior only: token
//! kinds, lexeme bytes, and span positions.
//!
//! ## Test Categories
//!
//! 1. **Scenario Tests**: whole statements tokenized into exact sequences
//! 2. **Boundary Tests**: empty input, lone delimiters, lexemes cut off at
//!    the end of the buffer
//! 3. **Invariant Tests**: properties that must hold for every input:
//!    exact coverage, strict progress, determinism, byte round-trip, and
//!    totality over arbitrary bytes
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test --test tokenize_sql
//! ```

use sqltok::{tokenize, Lexer, Token, TokenKind, Tokens};

fn lex(input: &[u8]) -> Vec<(TokenKind, &[u8])> {
    Tokens::new(input).map(|token| (token.kind, token.text)).collect()
}

mod scenario_tests {
    use super::*;

    #[test]
    fn select_constant() {
        assert_eq!(
            lex(b"SELECT 1"),
            vec![
                (TokenKind::BareWord, b"SELECT".as_slice()),
                (TokenKind::Whitespace, b" ".as_slice()),
                (TokenKind::Number, b"1".as_slice()),
            ]
        );
    }

    #[test]
    fn qualified_column() {
        assert_eq!(
            lex(b"a.b"),
            vec![
                (TokenKind::BareWord, b"a".as_slice()),
                (TokenKind::Dot, b".".as_slice()),
                (TokenKind::BareWord, b"b".as_slice()),
            ]
        );
    }

    #[test]
    fn line_comment_between_words() {
        assert_eq!(
            lex(b"x -- c\ny"),
            vec![
                (TokenKind::BareWord, b"x".as_slice()),
                (TokenKind::Whitespace, b" ".as_slice()),
                (TokenKind::Comment, b"-- c".as_slice()),
                (TokenKind::Whitespace, b"\n".as_slice()),
                (TokenKind::BareWord, b"y".as_slice()),
            ]
        );
    }

    #[test]
    fn concatenation_with_escaped_string() {
        assert_eq!(
            lex(b"a || 'b''c'"),
            vec![
                (TokenKind::BareWord, b"a".as_slice()),
                (TokenKind::Whitespace, b" ".as_slice()),
                (TokenKind::Concatenation, b"||".as_slice()),
                (TokenKind::Whitespace, b" ".as_slice()),
                (TokenKind::StringLiteral, b"'b''c'".as_slice()),
            ]
        );
    }

    #[test]
    fn angle_bracket_inequality() {
        assert_eq!(
            lex(b"1 <> 2"),
            vec![
                (TokenKind::Number, b"1".as_slice()),
                (TokenKind::Whitespace, b" ".as_slice()),
                (TokenKind::NotEquals, b"<>".as_slice()),
                (TokenKind::Whitespace, b" ".as_slice()),
                (TokenKind::Number, b"2".as_slice()),
            ]
        );
    }

    #[test]
    fn unterminated_block_comment_spans_the_tail() {
        let mut lexer = Lexer::new(b"/* unterminated");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::ErrorMultilineCommentIsNotClosed);
        assert_eq!(token.text, b"/* unterminated");
        assert_eq!(token.span.start(), 0);
        assert_eq!(token.span.end(), 15);
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfStream);
    }

    #[test]
    fn full_select_statement() {
        let kinds: Vec<_> = Tokens::new(b"SELECT id, name FROM users WHERE active = true;")
            .filter(Token::is_significant)
            .map(|token| token.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::BareWord,
                TokenKind::BareWord,
                TokenKind::Comma,
                TokenKind::BareWord,
                TokenKind::BareWord,
                TokenKind::BareWord,
                TokenKind::BareWord,
                TokenKind::BareWord,
                TokenKind::Equals,
                TokenKind::BareWord,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn tokenize_accepts_well_formed_statements() {
        let tokens =
            tokenize(b"INSERT INTO t (a, b) VALUES (1, 'x -> y'), (2.5e3, `q``q`);").unwrap();
        assert!(tokens.iter().all(|token| !token.is_error()));
    }

    #[test]
    fn tokenize_rejects_malformed_statements() {
        let message = tokenize(b"SELECT `broken").unwrap_err().to_string();
        assert!(message.contains("back-quoted identifier is not closed"));
        assert!(message.contains("byte offset 7"));
    }
}

mod boundary_tests {
    use super::*;

    #[test]
    fn empty_input_yields_only_end_of_stream() {
        let mut lexer = Lexer::new(b"");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EndOfStream);
        assert_eq!(token.span.start(), 0);
        assert!(token.span.is_empty());
        assert!(token.text.is_empty());
    }

    #[test]
    fn whitespace_only_input_is_one_token() {
        assert_eq!(
            lex(b" \t\n\r\x0c\x0b"),
            vec![(TokenKind::Whitespace, b" \t\n\r\x0c\x0b".as_slice())]
        );
    }

    #[test]
    fn lone_dot_is_a_number() {
        assert_eq!(lex(b"."), vec![(TokenKind::Number, b".".as_slice())]);
    }

    #[test]
    fn dot_after_closing_bracket_or_alphanumeric_is_a_qualifier() {
        assert_eq!(lex(b").")[1], (TokenKind::Dot, b".".as_slice()));
        assert_eq!(lex(b"].")[1], (TokenKind::Dot, b".".as_slice()));
        assert_eq!(lex(b"a.")[1], (TokenKind::Dot, b".".as_slice()));
        assert_eq!(lex(b"x1.")[1], (TokenKind::Dot, b".".as_slice()));
        // a digit to the left of the dot never gets here: the number
        // scanner claims its own trailing dot
        assert_eq!(lex(b"1."), vec![(TokenKind::Number, b"1.".as_slice())]);
    }

    #[test]
    fn numeric_literal_forms() {
        assert_eq!(lex(b"0b10"), vec![(TokenKind::Number, b"0b10".as_slice())]);
        assert_eq!(
            lex(b"123.45e-6"),
            vec![(TokenKind::Number, b"123.45e-6".as_slice())]
        );
        assert_eq!(lex(b".5"), vec![(TokenKind::Number, b".5".as_slice())]);
        assert_eq!(lex(b"1."), vec![(TokenKind::Number, b"1.".as_slice())]);
        assert_eq!(lex(b"1p+2"), vec![(TokenKind::Number, b"1p+2".as_slice())]);
        // delimiting is not validating: the scanner stops where the lexeme
        // rules stop, and whatever abuts falls out separately
        assert_eq!(
            lex(b"0x1F"),
            vec![
                (TokenKind::Number, b"0x1".as_slice()),
                (TokenKind::ErrorWordWithoutWhitespace, b"F".as_slice()),
            ]
        );
        assert_eq!(
            lex(b"1e"),
            vec![
                (TokenKind::Number, b"1".as_slice()),
                (TokenKind::ErrorWordWithoutWhitespace, b"e".as_slice()),
            ]
        );
    }

    #[test]
    fn doubled_quote_escape_is_one_literal() {
        assert_eq!(
            lex(b"'it''s'"),
            vec![(TokenKind::StringLiteral, b"'it''s'".as_slice())]
        );
    }

    #[test]
    fn backslash_at_end_of_buffer_is_unterminated() {
        let mut lexer = Lexer::new(b"'tail\\");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::ErrorSingleQuoteIsNotClosed);
        assert_eq!(token.span.end(), 6);
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfStream);
    }

    #[test]
    fn word_abutting_digits_recovers_after_one_error() {
        assert_eq!(
            lex(b"123abc"),
            vec![
                (TokenKind::Number, b"123".as_slice()),
                (TokenKind::ErrorWordWithoutWhitespace, b"a".as_slice()),
                (TokenKind::BareWord, b"bc".as_slice()),
            ]
        );
    }
}

mod invariant_tests {
    use super::*;
    use proptest::prelude::*;

    /// Drive a lexer to the end, checking coverage and progress along the
    /// way.
    fn lex_checked(input: &[u8]) {
        let mut lexer = Lexer::new(input);
        let mut offset = 0;
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::EndOfStream {
                assert_eq!(token.span.start(), input.len());
                assert!(token.span.is_empty());
                break;
            }
            assert_eq!(token.span.start(), offset, "gap or overlap at {}", offset);
            assert!(token.span.end() > offset, "no progress at {}", offset);
            assert!(token.span.end() <= input.len());
            assert_eq!(token.text, &input[token.span.start()..token.span.end()]);
            offset = token.span.end();
        }
        assert_eq!(offset, input.len(), "input not fully covered");
    }

    /// Bytes weighted towards the interesting dispatch branches.
    fn sqlish_bytes() -> impl Strategy<Value = Vec<u8>> {
        let alphabet = b" \t\n'\"`\\aZ_059.xbep+-*/%=!<>|?:,;()[]#\xff".to_vec();
        proptest::collection::vec(proptest::sample::select(alphabet), 0..128)
    }

    proptest! {
        #[test]
        fn arbitrary_bytes_are_covered_exactly_once(
            input in proptest::collection::vec(any::<u8>(), 0..256)
        ) {
            lex_checked(&input);
        }

        #[test]
        fn sqlish_bytes_are_covered_exactly_once(input in sqlish_bytes()) {
            lex_checked(&input);
        }

        #[test]
        fn tokenization_is_deterministic(input in sqlish_bytes()) {
            let first: Vec<_> = Tokens::new(&input).collect();
            let second: Vec<_> = Tokens::new(&input).collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn lexemes_concatenate_back_to_the_input(input in sqlish_bytes()) {
            let rebuilt: Vec<u8> = Tokens::new(&input)
                .flat_map(|token| token.text.iter().copied())
                .collect();
            prop_assert_eq!(rebuilt, input);
        }

        #[test]
        fn end_of_stream_is_terminal(input in sqlish_bytes()) {
            let mut lexer = Lexer::new(&input);
            while lexer.next_token().kind != TokenKind::EndOfStream {}
            for _ in 0..4 {
                let token = lexer.next_token();
                prop_assert_eq!(token.kind, TokenKind::EndOfStream);
                prop_assert_eq!(token.span.start(), input.len());
            }
        }
    }
}
