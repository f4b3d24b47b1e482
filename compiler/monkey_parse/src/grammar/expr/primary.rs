//! Prefix handlers.

use std::rc::Rc;

use monkey_ir::{Expr, FunctionLiteral, Identifier, PrefixOp, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser, Precedence};

impl Parser<'_> {
    pub(super) fn parse_identifier(&mut self) -> Option<Expr> {
        Some(Expr::Identifier(Identifier::new(&self.current().literal)))
    }

    pub(super) fn parse_integer_literal(&mut self) -> Option<Expr> {
        let literal = &self.current().literal;
        match literal.parse::<i64>() {
            Ok(value) => Some(Expr::Integer(value)),
            Err(_) => {
                let kind = ParseErrorKind::InvalidInteger(literal.clone());
                let span = self.current().span;
                self.push_error(ParseError::new(kind, span));
                None
            }
        }
    }

    pub(super) fn parse_string_literal(&mut self) -> Option<Expr> {
        Some(Expr::String(Rc::from(self.current().literal.as_str())))
    }

    pub(super) fn parse_boolean(&mut self) -> Option<Expr> {
        Some(Expr::Boolean(self.current_is(TokenKind::True)))
    }

    /// `!<expr>` or `-<expr>`; the operand binds at `Prefix`.
    pub(super) fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let op = if self.current_is(TokenKind::Bang) {
            PrefixOp::Not
        } else {
            PrefixOp::Neg
        };
        self.next_token();

        let operand = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix {
            op,
            operand: Box::new(operand),
        })
    }

    /// `( <expr> )`
    pub(super) fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest);
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        expr
    }

    /// `if ( <cond> ) { ... } [else { ... }]`
    pub(super) fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest);
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If {
            condition: Box::new(condition?),
            consequence,
            alternative,
        })
    }

    /// `fn ( <params> ) { ... }`
    pub(super) fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let params = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expr::Function(Rc::new(FunctionLiteral { params, body })))
    }

    /// Identifiers between `(` and `)`; leaves the cursor on `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();
        self.next_token();

        if self.current_is(TokenKind::RParen) {
            return Some(params);
        }

        params.push(self.expect_current_identifier()?);
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            params.push(self.expect_current_identifier()?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(params)
    }

    fn expect_current_identifier(&mut self) -> Option<Identifier> {
        if self.current_is(TokenKind::Ident) {
            Some(Identifier::new(&self.current().literal))
        } else {
            self.current_error(TokenKind::Ident);
            None
        }
    }

    /// `[ <expr>, ... ]`
    pub(super) fn parse_array_literal(&mut self) -> Option<Expr> {
        self.parse_expression_list(TokenKind::RBracket)
            .map(Expr::Array)
    }

    /// `{ <key> : <value>, ... }`
    pub(super) fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();
        let mut complete = true;

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest);
            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest);
            match (key, value) {
                (Some(key), Some(value)) => pairs.push((key, value)),
                _ => complete = false,
            }

            if !self.peek_is(TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }

        complete.then_some(Expr::Hash(pairs))
    }
}
