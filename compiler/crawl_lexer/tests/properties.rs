//! Robustness properties of the tokenizer.

use crawl_lexer::{lex, TokenKind};
use proptest::prelude::*;

proptest! {
    /// Any input terminates with exactly one `End` and balanced blocks.
    #[test]
    fn lexing_never_panics_and_balances_blocks(lines in prop::collection::vec("[ -~]{0,40}", 0..12)) {
        let output = lex(&lines);
        let ends = output.tokens.iter().filter(|t| t.kind == TokenKind::End).count();
        prop_assert_eq!(ends, 1);
        prop_assert_eq!(output.tokens.last().map(|t| &t.kind), Some(&TokenKind::End));

        let starts = output.tokens.iter().filter(|t| t.kind == TokenKind::BlockStart).count();
        let closes = output.tokens.iter().filter(|t| t.kind == TokenKind::BlockEnd).count();
        prop_assert_eq!(starts, closes);
    }

    /// Errors are reported at most once per line, in line order.
    #[test]
    fn errors_are_ordered_and_unique_per_line(lines in prop::collection::vec("[ -~]{0,40}", 0..12)) {
        let output = lex(&lines);
        for pair in output.errors.windows(2) {
            prop_assert!(pair[0].line < pair[1].line);
        }
    }

    #[test]
    fn decimal_literals_round_trip(n in 0..=i64::MAX) {
        let line = n.to_string();
        let output = lex(&[line]);
        prop_assert!(output.errors.is_empty());
        prop_assert_eq!(&output.tokens[0].kind, &TokenKind::Int(n));
    }
}
