//! Expression parsing.
//!
//! Precedence climbing (Pratt parsing): every token kind that can start an
//! expression has a prefix handler, and every token kind that can continue
//! one has an infix handler. [`Precedence`] decides when the loop in
//! `parse_expression` stops absorbing infix operators, which yields both
//! operator precedence and left associativity without a production per
//! level.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point and the two dispatch tables
//! - `primary.rs`: Prefix handlers (literals, identifiers, grouping, `if`, `fn`)
//! - `postfix.rs`: Infix handlers (binary operators, call, index)

mod postfix;
mod primary;

use monkey_ir::{Expr, TokenKind};
use monkey_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser, Precedence};

/// Handler for a token in prefix position.
type PrefixParseFn<'src> = fn(&mut Parser<'src>) -> Option<Expr>;

/// Handler for a token in infix position; receives the left operand.
type InfixParseFn<'src> = fn(&mut Parser<'src>, Expr) -> Option<Expr>;

impl<'src> Parser<'src> {
    /// Parse an expression whose infix operators all bind tighter than
    /// `precedence`.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Option<Expr> {
        let Some(prefix) = Self::prefix_rule(self.current().kind) else {
            let kind = ParseErrorKind::NoPrefixParseFn(self.current().kind);
            let span = self.current().span;
            self.push_error(ParseError::new(kind, span));
            return None;
        };

        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_rule(self.peek.kind) else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    /// Prefix dispatch table.
    fn prefix_rule(kind: TokenKind) -> Option<PrefixParseFn<'src>> {
        let rule: PrefixParseFn<'src> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::String => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::LBracket => Self::parse_array_literal,
            TokenKind::LBrace => Self::parse_hash_literal,
            _ => return None,
        };
        Some(rule)
    }

    /// Infix dispatch table.
    fn infix_rule(kind: TokenKind) -> Option<InfixParseFn<'src>> {
        let rule: InfixParseFn<'src> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => Self::parse_infix_expression,
            TokenKind::LParen => Self::parse_call_expression,
            TokenKind::LBracket => Self::parse_index_expression,
            _ => return None,
        };
        Some(rule)
    }

    /// Comma-separated expressions up to `end`, used by array literals and
    /// call arguments.
    ///
    /// Expects the current token to be the opening delimiter; leaves the
    /// cursor on `end`.
    pub(crate) fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        if self.peek_is(end) {
            self.next_token();
            return Some(Vec::new());
        }

        self.next_token();
        let mut items = vec![self.parse_expression(Precedence::Lowest)];

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest));
        }

        if !self.expect_peek(end) {
            return None;
        }

        items.into_iter().collect()
    }
}
