//! Infix handlers: binary operators, calls and indexing.

use monkey_ir::{Expr, InfixOp, TokenKind};

use crate::{Parser, Precedence};

impl Parser<'_> {
    /// `<left> <op> <right>`
    ///
    /// The right operand is parsed at the operator's own precedence, so an
    /// equal-precedence operator that follows ends the right side and
    /// associates left.
    pub(super) fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let op = match self.current().kind {
            TokenKind::Plus => InfixOp::Add,
            TokenKind::Minus => InfixOp::Sub,
            TokenKind::Star => InfixOp::Mul,
            TokenKind::Slash => InfixOp::Div,
            TokenKind::Eq => InfixOp::Eq,
            TokenKind::NotEq => InfixOp::NotEq,
            TokenKind::Lt => InfixOp::Lt,
            TokenKind::Gt => InfixOp::Gt,
            _ => return None,
        };
        let precedence = self.current_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// `<callee> ( <args> )`
    pub(super) fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let args = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::Call {
            callee: Box::new(callee),
            args,
        })
    }

    /// `<collection> [ <index> ]`
    pub(super) fn parse_index_expression(&mut self, collection: Expr) -> Option<Expr> {
        self.next_token();

        let index = self.parse_expression(Precedence::Lowest);
        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Expr::Index {
            collection: Box::new(collection),
            index: Box::new(index?),
        })
    }
}
