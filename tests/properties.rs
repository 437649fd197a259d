use proptest::prelude::*;
use zrc::{
    lex,
    lexer::tokens::{Token, TokenKind},
};

/// Sources built from characters that exercise every classifier and issue.
const SOURCE: &str = "[a-zA-Z0-9_ xb./*\"\\\\+=<>!&|$(){};\n-]{0,48}";

fn chars_at(source: &str, token: &Token) -> String {
    token.interval.lookup(source)
}

proptest! {
    #[test]
    fn lexing_always_terminates(source in any::<String>()) {
        let _ = lex(&source);
    }

    #[test]
    fn tokens_are_ordered_and_disjoint(source in SOURCE) {
        if let Ok(tokens) = lex(&source) {
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].interval.end() < pair[1].interval.start());
            }
        }
    }

    #[test]
    fn raw_text_is_a_slice_of_the_source(source in SOURCE) {
        if let Ok(tokens) = lex(&source) {
            for token in &tokens {
                prop_assert_eq!(&token.raw, &chars_at(&source, token));
            }
        }
    }

    #[test]
    fn relexing_a_token_reproduces_it(source in SOURCE) {
        if let Ok(tokens) = lex(&source) {
            for token in &tokens {
                let relexed = lex(&token.raw).expect("a token's raw text lexes cleanly");
                prop_assert_eq!(relexed.len(), 1);
                prop_assert_eq!(&relexed[0].kind, &token.kind);
                prop_assert_eq!(relexed[0].value(), token.value());
            }
        }
    }

    #[test]
    fn issues_are_in_source_order(source in SOURCE) {
        if let Err(issues) = lex(&source) {
            prop_assert!(!issues.is_empty());
            for pair in issues.windows(2) {
                prop_assert!(pair[0].interval.end() < pair[1].interval.start());
            }
        }
    }

    #[test]
    fn names_are_their_own_value(name in "[a-zA-Z_][a-zA-Z0-9_]{0,16}") {
        let tokens = lex(&name).expect("names always lex");
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Name(name.clone()));
    }
}

#[test]
fn empty_source_has_no_tokens() {
    assert_eq!(lex(""), Ok(vec![]));
}

#[test]
fn whitespace_and_comments_are_the_only_gaps() {
    let source = "a /* b */ c // d\n\"e\"";
    let tokens = lex(source).expect("source lexes cleanly");

    let kinds: Vec<&TokenKind> = tokens.iter().map(|t| &t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            &TokenKind::Name("a".to_string()),
            &TokenKind::Name("c".to_string()),
            &TokenKind::String("e".to_string()),
        ]
    );
    for token in &tokens {
        assert_eq!(token.raw, chars_at(source, token));
    }
}
