//! Pratt parser for Monkey.
//!
//! Turns the lexer's token stream into a [`Program`]. Errors are collected
//! rather than returned early: a malformed statement is dropped and parsing
//! resumes at the following token, so one pass reports every problem it can
//! find. Callers must check [`ParseOutput::has_errors`] before evaluating.

mod cursor;
mod error;
mod grammar;
mod precedence;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};
pub use precedence::Precedence;

use monkey_ir::{Program, Token, TokenKind};
use monkey_lexer::Lexer;

/// Parser state: the current token, one token of lookahead, and the
/// errors accumulated so far.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

/// Result of parsing a whole source.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// Returns `true` if any error was recorded. The program is then partial
    /// and must not be evaluated.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error messages in the order they were recorded.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl<'src> Parser<'src> {
    /// Create a parser and prime the current and lookahead tokens.
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        tracing::debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        ParseOutput {
            program,
            errors: self.errors,
        }
    }
}

/// Lex and parse `source`.
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(Lexer::new(source)).parse_program()
}
