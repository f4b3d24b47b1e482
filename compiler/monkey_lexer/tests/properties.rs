//! Property tests for the lexer.

use monkey_ir::TokenKind;
use monkey_lexer::lex;
use proptest::prelude::*;

proptest! {
    #[test]
    fn always_ends_with_single_eof(source in "\\PC{0,64}") {
        let tokens = lex(&source);
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(source in "\\PC{0,64}") {
        let tokens = lex(&source);
        let mut last_end = 0u32;
        for token in &tokens {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end as usize <= source.len());
            last_end = token.span.end;
        }
    }

    #[test]
    fn integer_runs_lex_to_one_token(digits in "[0-9]{1,18}") {
        let tokens = lex(&digits);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Int);
        prop_assert_eq!(&tokens[0].literal, &digits);
    }

    #[test]
    fn identifiers_round_trip(name in "[a-zA-Z_]{1,12}") {
        let tokens = lex(&name);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].literal, &name);
        prop_assert!(tokens[0].kind == TokenKind::Ident || tokens[0].kind.is_keyword());
    }
}
