//! Lexer for Monkey using logos.
//!
//! Pull-based: the parser asks for one [`Token`] at a time through
//! [`Lexer::next_token`]. Once the input is exhausted every further call
//! returns an EOF token.

use logos::Logos;
use monkey_ir::{Span, Token, TokenKind};


/// Raw token from logos (before literal extraction).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    #[regex("[a-zA-Z_]+")]
    Ident,
    #[regex("[0-9]+")]
    Int,
    #[regex(r#""[^"]*""#)]
    String,
    /// Opening quote with no closing quote before end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    #[token("==")]
    Eq,
    #[token("=")]
    Assign,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}

/// Tokenizer over a source string.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
    /// Set once EOF has been handed out through the `Iterator` impl.
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
            finished: false,
        }
    }

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            let end = u32::try_from(self.inner.source().len()).unwrap_or(u32::MAX);
            return Token::eof(end);
        };

        let span = Span::from_range(self.inner.span());
        let slice = self.inner.slice();

        match result {
            Ok(raw) => {
                let (kind, literal) = convert_token(raw, slice);
                Token::new(kind, literal, span)
            }
            Err(()) => Token::new(TokenKind::Illegal, slice, span),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the first EOF.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

/// Convert a raw token to its kind and literal text.
fn convert_token(raw: RawToken, slice: &str) -> (TokenKind, &str) {
    let kind = match raw {
        RawToken::String => return (TokenKind::String, &slice[1..slice.len() - 1]),
        RawToken::UnterminatedString => return (TokenKind::String, &slice[1..]),

        RawToken::Function => TokenKind::Function,
        RawToken::Let => TokenKind::Let,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,
        RawToken::Ident => TokenKind::Ident,
        RawToken::Int => TokenKind::Int,

        RawToken::Eq => TokenKind::Eq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,

        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
    };
    (kind, slice)
}

/// Lex a whole source string.
///
/// The returned list always ends with exactly one EOF token.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
