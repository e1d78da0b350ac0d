//! Fuzz testing for the tokenizer.
//!
//! This fuzz target feeds arbitrary byte sequences to the lexer and checks
//! the structural guarantees that must hold for every input: no panics,
//! strict forward progress, token spans tiling the buffer exactly, lexemes
//! matching their spans, and an idempotent terminal state.

#![no_main]

use libfuzzer_sys::fuzz_target;

use sqltok::{Lexer, TokenKind};

fuzz_target!(|data: &[u8]| {
    let mut lexer = Lexer::new(data);
    let mut offset = 0;

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EndOfStream {
            assert_eq!(token.span.start(), data.len());
            assert!(token.span.is_empty());
            break;
        }

        assert_eq!(token.span.start(), offset);
        assert!(token.span.end() > offset);
        assert!(token.span.end() <= data.len());
        assert_eq!(token.text, &data[token.span.start()..token.span.end()]);
        offset = token.span.end();
    }

    assert_eq!(offset, data.len());

    // the terminal state must hold
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfStream);
});
