//! Debug commands: `lex` and `parse` for inspecting the front end.

use monkey_ir::{Token, TokenKind};

use super::{format_parse_errors, read_file};

/// Lex a file and print one token per line.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    for line in lex_source(&content) {
        println!("{line}");
    }
}

/// Tokens of `source` as `<KIND> <literal>`, ending with `EOF`.
pub fn lex_source(source: &str) -> Vec<String> {
    monkey_lexer::lex(source).iter().map(render_token).collect()
}

fn render_token(token: &Token) -> String {
    if token.literal.is_empty() || token.kind == TokenKind::Eof {
        token.kind.to_string()
    } else {
        token.to_string()
    }
}

/// Parse a file and print each top-level statement, or its errors.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    match parse_source(&content) {
        Ok(statements) => {
            for statement in statements {
                println!("{statement}");
            }
        }
        Err(errors) => {
            for error in errors {
                eprintln!("{error}");
            }
            std::process::exit(1);
        }
    }
}

/// Canonical rendering of each top-level statement of `source`.
pub fn parse_source(source: &str) -> Result<Vec<String>, Vec<String>> {
    let output = monkey_parse::parse(source);
    if output.has_errors() {
        return Err(format_parse_errors(source, &output.errors));
    }
    Ok(output
        .program
        .statements
        .iter()
        .map(ToString::to_string)
        .collect())
}
