use proptest::prelude::*;
use ratus::{Token, TokenKind, TokeniserError, tokenise};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenise(source).unwrap_or_else(|e| panic!("Failed to tokenise {source:?}: {e}"))
                    .into_iter()
                    .map(|t| t.kind)
                    .collect()
}

fn assert_error(source: &str, fragment: &str) {
    match tokenise(source) {
        Ok(tokens) => panic!("Tokenising {source:?} succeeded but was expected to fail: {tokens:?}"),
        Err(e) => assert!(e.to_string().contains(fragment),
                          "Error for {source:?} was {e:?}, expected it to mention {fragment:?}"),
    }
}

#[test]
fn literals() {
    assert_eq!(tokenise("1").unwrap(), vec![Token::new(TokenKind::Integer(1), "1", 0)]);
    assert_eq!(tokenise("1.0").unwrap(), vec![Token::new(TokenKind::Float(1.0), "1.0", 0)]);
    assert_eq!(tokenise("'test'").unwrap(),
               vec![Token::new(TokenKind::String("test".to_string()), "'test'", 0)]);
    assert_eq!(tokenise("\"test\"").unwrap(),
               vec![Token::new(TokenKind::String("test".to_string()), "\"test\"", 0)]);
}

#[test]
fn signs_are_separate_tokens() {
    assert_eq!(kinds("-1"), vec![TokenKind::Minus, TokenKind::Integer(1)]);
    assert_eq!(kinds("-1.0"), vec![TokenKind::Minus, TokenKind::Float(1.0)]);
    assert_eq!(kinds("!1"), vec![TokenKind::Bang, TokenKind::Integer(1)]);
}

#[test]
fn arithmetic_expressions() {
    assert_eq!(kinds("1 + 1"),
               vec![TokenKind::Integer(1), TokenKind::Plus, TokenKind::Integer(1)]);
    assert_eq!(kinds("1 - 1"),
               vec![TokenKind::Integer(1), TokenKind::Minus, TokenKind::Integer(1)]);
    assert_eq!(kinds("1 + 3 * 2"),
               vec![TokenKind::Integer(1),
                    TokenKind::Plus,
                    TokenKind::Integer(3),
                    TokenKind::Star,
                    TokenKind::Integer(2)]);
}

#[test]
fn two_character_operators_win_over_prefixes() {
    assert_eq!(kinds("1 >= 2"),
               vec![TokenKind::Integer(1), TokenKind::GreaterEqual, TokenKind::Integer(2)]);
    assert_eq!(kinds("1<=2"),
               vec![TokenKind::Integer(1), TokenKind::LessEqual, TokenKind::Integer(2)]);
    assert_eq!(kinds("1 != 2"),
               vec![TokenKind::Integer(1), TokenKind::BangEqual, TokenKind::Integer(2)]);
    assert_eq!(kinds("1 = 2"),
               vec![TokenKind::Integer(1), TokenKind::Equal, TokenKind::Integer(2)]);
    assert_eq!(kinds("> <"), vec![TokenKind::Greater, TokenKind::Less]);
}

#[test]
fn function_call() {
    assert_eq!(kinds("if(1 > 2, 10, 5)"),
               vec![TokenKind::Identifier("if".to_string()),
                    TokenKind::LeftParen,
                    TokenKind::Integer(1),
                    TokenKind::Greater,
                    TokenKind::Integer(2),
                    TokenKind::Comma,
                    TokenKind::Integer(10),
                    TokenKind::Comma,
                    TokenKind::Integer(5),
                    TokenKind::RightParen]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("1 and 2 or 3"),
               vec![TokenKind::Integer(1),
                    TokenKind::And,
                    TokenKind::Integer(2),
                    TokenKind::Or,
                    TokenKind::Integer(3)]);
    assert_eq!(kinds("android order _x1"),
               vec![TokenKind::Identifier("android".to_string()),
                    TokenKind::Identifier("order".to_string()),
                    TokenKind::Identifier("_x1".to_string())]);
}

#[test]
fn whitespace_is_skipped_and_positions_are_byte_offsets() {
    let tokens = tokenise("  1\t+\n 'é' + 2").unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();

    assert_eq!(positions, vec![2, 4, 7, 12, 14]);
    assert_eq!(tokens[2].lexeme, "'é'");
    assert!(tokenise(" \r\n\t").unwrap().is_empty());
    assert!(tokenise("").unwrap().is_empty());
}

#[test]
fn strings_keep_the_other_quote_and_operators() {
    assert_eq!(kinds(r#"'say "hi"'"#), vec![TokenKind::String("say \"hi\"".to_string())]);
    assert_eq!(kinds("\"1 + (2\""), vec![TokenKind::String("1 + (2".to_string())]);
    assert_eq!(kinds("''"), vec![TokenKind::String(String::new())]);
}

#[test]
fn unterminated_strings() {
    assert_error("'test", "Unterminated string");
    assert_error("\"test", "Unterminated string");
    assert_error("1 + 'a", "Unterminated string");
}

#[test]
fn malformed_numbers() {
    assert_error("1.", "cannot end with '.'");
    assert_error("1.a", "Expected digit after '.'");
    assert_eq!(tokenise("12.x").unwrap_err(),
               TokeniserError::ExpectedDigitAfterDot { lexeme:   "12.".to_string(),
                                                       found:    Some('x'),
                                                       position: 0, });
}

#[test]
fn unexpected_characters() {
    assert_error("1 # 2", "Unexpected character '#'");
    assert_eq!(tokenise("1 ^ 2").unwrap_err().position(), 2);
    assert_error("a.b", "Unexpected character");
}

#[test]
fn integer_overflow_is_an_error() {
    assert_eq!(kinds("9223372036854775807"), vec![TokenKind::Integer(i64::MAX)]);
    assert!(matches!(tokenise("9223372036854775808"),
                     Err(TokeniserError::LiteralTooLarge { position: 0, .. })));
}

proptest! {
    #[test]
    fn integers_decode_to_their_value(n in 0..=i64::MAX) {
        let tokens = tokenise(&n.to_string()).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Integer(n));
    }

    #[test]
    fn floats_decode_to_the_nearest_value(whole in 0u32..1_000_000, frac in 0u32..1_000_000) {
        let lexeme = format!("{whole}.{frac:06}");
        let expected: f64 = lexeme.parse().unwrap();
        let tokens = tokenise(&lexeme).unwrap();
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Float(expected));
    }

    #[test]
    fn tokenising_never_panics(source in "\\PC{0,40}") {
        let _ = tokenise(&source);
    }
}
