//! # sqltok - Zero-Copy SQL Tokenizer
//!
//! sqltok turns a byte buffer of SQL-family source text into a stream of
//! typed tokens. It is the lexical front end of a query-processing
//! pipeline: each token is a borrowed, contiguous slice of the input, and
//! the full token sequence tiles the buffer exactly, so the source can be
//! reconstructed byte-for-byte from the stream.
//!
//! ## Guarantees
//!
//! - **Zero-copy**: tokens alias the caller's buffer; the scanner performs
//!   no allocation and no I/O
//! - **Total**: tokenization never fails; malformed input produces typed
//!   error tokens and scanning continues where recovery is possible
//! - **Exact coverage**: token spans are adjacent and non-overlapping, and
//!   together cover the whole input
//! - **Single pass**: work is linear in the input length
//!
//! ## Quick Start
//!
//! ```ignore
//! use sqltok::{tokenize, Tokens, TokenKind};
//!
//! // pull tokens one at a time
//! for token in Tokens::new(b"SELECT id FROM users WHERE id = 42") {
//!     if token.is_significant() {
//!         println!("{:?} {:?}", token.kind, token.text);
//!     }
//! }
//!
//! // or collect the whole buffer, failing on the first malformed lexeme
//! let tokens = tokenize(b"SELECT 1 + 2")?;
//! assert_eq!(tokens.first().map(|t| t.kind), Some(TokenKind::BareWord));
//! ```
//!
//! ## Scope
//!
//! The tokenizer delimits lexemes; it does not interpret them. Keywords
//! stay `BareWord`s, numeric text is not converted to values, and escape
//! sequences inside quoted lexemes are recognized but not decoded. All of
//! that is the parser's territory.
//!
//! ## Module Overview
//!
//! - [`token`]: `Span`, `TokenKind`, and the borrowed `Token` carrier
//! - [`lexer`]: the scanning state machine, the `Tokens` iterator, and the
//!   `tokenize` convenience entry point

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer, Tokens};
pub use token::{Span, Token, TokenKind};
