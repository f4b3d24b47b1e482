//! Token navigation for the parser.
//!
//! Provides advancing, lookahead checks, and the `expect_peek` helper that
//! records an error when the next token is not the one the grammar needs.

use monkey_ir::{Token, TokenKind};
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser, Precedence};

impl Parser<'_> {
    /// Shift the lookahead into the current slot and pull a new lookahead.
    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(kind = %self.current.kind, literal = %self.current.literal, "advance");
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance if the lookahead is `kind`; otherwise record an error and
    /// stay put.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    /// Binding power of the lookahead token.
    #[inline]
    pub(crate) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    /// Binding power of the current token.
    #[inline]
    pub(crate) fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    pub(crate) fn peek_error(&mut self, expected: TokenKind) {
        let kind = ParseErrorKind::UnexpectedToken {
            expected,
            found: self.peek.kind,
        };
        self.push_error(ParseError::new(kind, self.peek.span));
    }

    /// Same message as [`Self::peek_error`], for checks made on the current
    /// token after an unconditional advance.
    pub(crate) fn current_error(&mut self, expected: TokenKind) {
        let kind = ParseErrorKind::UnexpectedToken {
            expected,
            found: self.current.kind,
        };
        self.push_error(ParseError::new(kind, self.current.span));
    }

    pub(crate) fn push_error(&mut self, error: ParseError) {
        tracing::debug!(%error, span = %error.span, "parse error");
        self.errors.push(error);
    }
}
