//! Printing a parsed program yields source that parses to the same tree.

use monkey_parse::parse;
use proptest::prelude::*;

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        "[a-z]{1,6}".prop_filter("keywords are not identifiers", |s| {
            !matches!(s.as_str(), "fn" | "let" | "true" | "false" | "if" | "else" | "return")
        }),
        Just("true".to_string()),
    ]
}

fn expression() -> impl Strategy<Value = String> {
    operand().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), "[-+*/<>]|==|!=", inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("-{e}")),
            inner.clone().prop_map(|e| format!("!({e})")),
            inner.clone().prop_map(|e| format!("f({e}, 1)")),
            (inner.clone(), inner).prop_map(|(a, b)| format!("[{a}, {b}][0]")),
        ]
    })
}

proptest! {
    #[test]
    fn display_is_a_fixed_point(source in expression()) {
        let first = parse(&source);
        prop_assert!(!first.has_errors(), "{:?}", first.error_messages());

        let printed = first.program.to_string();
        let second = parse(&printed);
        prop_assert!(!second.has_errors(), "{:?}", second.error_messages());
        prop_assert_eq!(second.program, first.program);
    }
}
