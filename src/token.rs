//! Token and span definitions.
//!
//! A token is a typed, contiguous byte range of the input buffer. Tokens
//! never own storage: the lexeme is a borrowed slice of the caller's input,
//! and the span records where in the buffer that slice came from.

/// Byte range of a token within the input buffer.
///
/// Spans are half-open: `[start, end)`. The terminal end-of-stream token
/// carries an empty span positioned at the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: usize,
    len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Lexical classification of a token.
///
/// The enumeration is closed: every byte of input maps to exactly one of
/// these kinds, malformed input included. Alphabetic runs are always
/// `BareWord`; telling keywords from identifiers is the parser's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Maximal run of ASCII whitespace. Emitted, never skipped, so the
    /// token stream can reproduce the source text exactly.
    Whitespace,
    /// Line comment (`--`, `//`) or block comment (`/* ... */`).
    Comment,
    /// Terminal marker with an empty span at the end of the buffer.
    EndOfStream,

    /// Identifier-shaped run: letters, digits, underscores, starting with
    /// a letter or underscore.
    BareWord,
    /// Numeric lexeme, delimited but not validated: `42`, `0x1F`, `.5`,
    /// `1.e-3`. Value parsing happens downstream.
    Number,
    /// Single-quoted string literal, quotes included in the lexeme.
    StringLiteral,
    /// Double- or back-quoted identifier, quotes included in the lexeme.
    QuotedIdentifier,

    OpeningRoundBracket,
    ClosingRoundBracket,
    OpeningSquareBracket,
    ClosingSquareBracket,
    Comma,
    Semicolon,
    Dot,
    QuestionMark,
    Colon,

    Plus,
    Minus,
    Asterisk,
    Division,
    Modulo,
    /// `=` or `==`; both spellings compare for equality.
    Equals,
    /// `!=` or `<>`.
    NotEquals,
    Less,
    Greater,
    LessOrEquals,
    GreaterOrEquals,
    /// String concatenation `||`.
    Concatenation,
    /// Lambda arrow `->`.
    Arrow,

    /// Byte that no other rule claims.
    Error,
    ErrorMultilineCommentIsNotClosed,
    ErrorSingleQuoteIsNotClosed,
    ErrorDoubleQuoteIsNotClosed,
    ErrorBackQuoteIsNotClosed,
    /// A `!` not followed by `=`.
    ErrorSingleExclamationMark,
    /// A `|` not followed by a second `|`.
    ErrorSinglePipeMark,
    /// Word character abutting a previous word-character run, e.g. the `a`
    /// in `123abc`. One byte long; scanning continues after it.
    ErrorWordWithoutWhitespace,
}

impl TokenKind {
    /// Whether a parser should look at this token. Whitespace and comments
    /// are carried in the stream for exact source reconstruction but carry
    /// no syntactic meaning.
    pub fn is_significant(self) -> bool {
        !matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    pub fn is_error(self) -> bool {
        self.error_description().is_some()
    }

    pub fn is_end(self) -> bool {
        matches!(self, TokenKind::EndOfStream)
    }

    /// Human-readable description of the failure for error kinds, `None`
    /// otherwise. Each malformed construct gets its own wording so
    /// diagnostics can name the exact offending delimiter.
    pub fn error_description(self) -> Option<&'static str> {
        match self {
            TokenKind::Error => Some("unrecognized character"),
            TokenKind::ErrorMultilineCommentIsNotClosed => {
                Some("multiline comment is not closed")
            }
            TokenKind::ErrorSingleQuoteIsNotClosed => {
                Some("single-quoted string is not closed")
            }
            TokenKind::ErrorDoubleQuoteIsNotClosed => {
                Some("double-quoted identifier is not closed")
            }
            TokenKind::ErrorBackQuoteIsNotClosed => {
                Some("back-quoted identifier is not closed")
            }
            TokenKind::ErrorSingleExclamationMark => {
                Some("exclamation mark can only occur in the != operator")
            }
            TokenKind::ErrorSinglePipeMark => {
                Some("pipe character can only occur in the || operator")
            }
            TokenKind::ErrorWordWithoutWhitespace => {
                Some("word is not separated from the previous lexeme")
            }
            _ => None,
        }
    }
}

/// A classified slice of the input buffer.
///
/// `text` aliases the caller's input over exactly `[span.start(),
/// span.end())`; the buffer must outlive every token produced from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a [u8],
    pub span: Span,
}

impl Token<'_> {
    pub fn is_significant(&self) -> bool {
        self.kind.is_significant()
    }

    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    pub fn is_end(&self) -> bool {
        self.kind.is_end()
    }
}
