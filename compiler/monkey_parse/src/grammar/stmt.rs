//! Statement parsing.
//!
//! A trailing semicolon is optional after every statement kind.

use monkey_ir::{Block, Identifier, Statement, TokenKind};

use crate::{Parser, Precedence};

impl Parser<'_> {
    /// Parse one statement starting at the current token.
    ///
    /// Returns `None` when the statement was malformed; the error has been
    /// recorded and the caller moves on to the next token.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current().kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr> ;?`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(&self.current().literal);

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_optional_semicolon();

        Some(Statement::Let { name, value: value? })
    }

    /// `return <expr> ;?`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_optional_semicolon();

        value.map(Statement::Return)
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest);
        self.skip_optional_semicolon();

        expr.map(Statement::Expression)
    }

    /// Parse statements after a `{` until the matching `}` or end of input.
    ///
    /// Expects the current token to be the opening brace; leaves the cursor
    /// on the closing brace.
    pub(crate) fn parse_block(&mut self) -> Block {
        let mut block = Block::default();
        self.next_token();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                block.statements.push(stmt);
            }
            self.next_token();
        }

        block
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
