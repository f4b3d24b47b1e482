//! Parse error types.

use monkey_ir::{Span, TokenKind};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The grammar required a specific token next.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },

    /// No expression can start with this token.
    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),

    /// Digit run that does not fit in a signed 64-bit integer.
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
}

/// A recoverable syntax error with the location of the offending token.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }
}
