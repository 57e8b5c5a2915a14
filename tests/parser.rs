use ratus::{
    BinaryOperator::{self, Add, Div, Greater, Less, Mul, Sub},
    Error, Expression, LiteralValue, Parser, ParserError,
    UnaryOperator::{Negate, Not},
    Value, evaluate, parse, tokenise,
};

fn parse_source(source: &str) -> Result<Expression, ParserError> {
    let tokens = tokenise(source).unwrap_or_else(|e| panic!("Failed to tokenise {source:?}: {e}"));
    parse(&tokens)
}

fn assert_parses(source: &str, expected: Expression) {
    match parse_source(source) {
        Ok(expression) => assert_eq!(expression, expected, "Unexpected tree for {source:?}"),
        Err(e) => panic!("Parsing {source:?} failed: {e}"),
    }
}

fn assert_error(source: &str, fragment: &str) {
    match parse_source(source) {
        Ok(expression) => panic!("Parsing {source:?} succeeded with {expression} but was expected to fail"),
        Err(e) => assert!(e.to_string().contains(fragment),
                          "Error for {source:?} was {e:?}, expected it to mention {fragment:?}"),
    }
}

fn bin(op: BinaryOperator, left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    Expression::binary(op, left, right)
}

#[test]
fn literals() {
    assert_parses("1", 1_i64.into());
    assert_parses("1.0", 1.0_f64.into());
    assert_parses("\"test\"", "test".into());
    assert_parses("'test'", Expression::Literal(LiteralValue::String("test".to_string())));
}

#[test]
fn signed_literals() {
    assert_parses("-1", Expression::unary(Negate, 1_i64));
    assert_parses("-1.0", Expression::unary(Negate, 1.0_f64));
    assert_parses("!1", Expression::unary(Not, 1_i64));
    assert_parses("2 * -3", bin(Mul, 2_i64, Expression::unary(Negate, 3_i64)));
}

#[test]
fn binary_operators() {
    assert_parses("1 + 1", bin(Add, 1_i64, 1_i64));
    assert_parses("1 > 2", bin(Greater, 1_i64, 2_i64));
    assert_parses("1 != 2", bin(BinaryOperator::NotEqual, 1_i64, 2_i64));
    assert_parses("1 and 0", bin(BinaryOperator::And, 1_i64, 0_i64));
    assert_parses("1 or 0", bin(BinaryOperator::Or, 1_i64, 0_i64));
}

#[test]
fn multiplication_binds_tighter() {
    assert_parses("1 + 3 * 2", bin(Add, 1_i64, bin(Mul, 3_i64, 2_i64)));
    assert_parses("1 * 3 + 2", bin(Add, bin(Mul, 1_i64, 3_i64), 2_i64));
    assert_eq!(parse_source("1 + 3 * 2").unwrap().to_string(), "(+ 1 (* 3 2))");
}

#[test]
fn chains_are_flat_and_left_associative() {
    assert_parses("1 - 2 - 3", bin(Sub, bin(Sub, 1_i64, 2_i64), 3_i64));
    assert_parses("8 / 4 / 2", bin(Div, bin(Div, 8_i64, 4_i64), 2_i64));
    assert_parses("1 < 2 + 3", bin(Add, bin(Less, 1_i64, 2_i64), 3_i64));
    assert_parses("1 = 1 and 2 > 1",
                  bin(Greater,
                      bin(BinaryOperator::And, bin(BinaryOperator::Equal, 1_i64, 1_i64), 2_i64),
                      1_i64));
}

#[test]
fn grouping() {
    assert_parses("(1 + 2) * 3", bin(Mul, bin(Add, 1_i64, 2_i64), 3_i64));
    assert_parses("((1))", 1_i64.into());
    assert_parses("1 < (2 + 3)", bin(Less, 1_i64, bin(Add, 2_i64, 3_i64)));
    assert_parses("('a')", "a".into());
    assert_parses("(f(1))", Expression::call("f", vec![1_i64.into()]));
}

#[test]
fn function_calls() {
    assert_parses("if(1 > 2, 1, 2)",
                  Expression::call("if", vec![bin(Greater, 1_i64, 2_i64), 1_i64.into(), 2_i64.into()]));
    assert_parses("if(if(1 > 2, 1, 0), 0, 1)",
                  Expression::call("if",
                                   vec![Expression::call("if",
                                                         vec![bin(Greater, 1_i64, 2_i64),
                                                              1_i64.into(),
                                                              0_i64.into()]),
                                        0_i64.into(),
                                        1_i64.into()]));
    assert_parses("f()", Expression::call("f", vec![]));
    assert_parses("lookup(\"rating\")", Expression::call("lookup", vec!["rating".into()]));
    assert_parses("f((1 + 2) * 3, g(4, 5))",
                  Expression::call("f",
                                   vec![bin(Mul, bin(Add, 1_i64, 2_i64), 3_i64),
                                        Expression::call("g", vec![4_i64.into(), 5_i64.into()])]));
}

#[test]
fn empty_expressions() {
    assert_eq!(parse(&[]), Err(ParserError::EmptyExpression));
    assert_error("", "Expression cannot be empty");
    assert_error("   ", "Expression cannot be empty");
    assert_error("()", "Expression cannot be empty");
    assert_error("f(1,)", "Expression cannot be empty");
    assert_error("f(,1)", "Expression cannot be empty");
}

#[test]
fn malformed_function_calls() {
    assert_error("f", "do not form a valid function call");
    assert_error("f(", "do not form a valid function call");
    assert_error("f 1 , )", "Expected left paren ('(') following call to function 'f'. Found '1'");
    assert_error("f((1)", "Unbalanced parentheses in call to function 'f'");
    assert_error("f(1", "Unbalanced parentheses in call to function 'f'");
    assert_error("f((1, 2), 3)", "Expected operator");
}

#[test]
fn missing_operator_after_term() {
    assert_error("1 (",
                 "Unexpected token '(' at position 2 after term 1. Expected operator '+', '-', \
                  '>', '>=', '<', '<=', '=', '!=', 'and', 'or'.");
    assert_error("1 2", "after term 1");
    assert_error("1 + 2 )", "after term (+ 1 2)");
    assert_error("1 * 2 3", "after term (* 1 2)");
}

#[test]
fn operands_must_be_numbers_or_groups() {
    assert_error("+ 1", "Unexpected token '+' at position 0. Expected an int or float");
    assert_error("1 + 'a'", "Unexpected token ''a''");
    assert_error("1 + f(2)", "Unexpected token 'f'");
    assert_error("1 +", "Expected int or float token but none were found");
    assert_error("(1 *)", "Expected int or float token but none were found");
}

#[test]
fn at_most_one_sign() {
    assert_eq!(parse_source("--1"),
               Err(ParserError::ExpectedNumber { token:    Some("-".to_string()),
                                                 position: 1, }));
    assert_error("!-1", "Unexpected token '-'");
    assert_error("-!1", "Unexpected token '!'");
    assert_error("-(1)", "Unexpected token '('");
}

#[test]
fn strings_and_calls_take_the_whole_expression() {
    assert_eq!(parse_source("'a' + 1"),
               Err(ParserError::UnexpectedTrailingToken { token:    "+".to_string(),
                                                          position: 4, }));
    assert_error("f(1) + 1", "Unexpected token '+' at position 5 after a complete expression");
    assert_error("if(1, 2, 3) 4", "after a complete expression");
}

#[test]
fn unbalanced_grouping() {
    assert_eq!(parse_source("1 + (2 * 3"), Err(ParserError::UnbalancedGrouping { position: 4 }));
}

#[test]
fn nesting_depth_is_bounded() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let parser = Parser::default();

    assert_eq!(parser.depth_limit(), ratus::DEFAULT_MAX_DEPTH);
    assert!(parser.parse(&tokenise(&nested(128)).unwrap()).is_ok());
    assert!(matches!(parser.parse(&tokenise(&nested(129)).unwrap()),
                     Err(ParserError::NestingTooDeep { max_depth: 128, .. })));
    assert!(matches!(parser.parse(&tokenise(&nested(100_000)).unwrap()),
                     Err(ParserError::NestingTooDeep { .. })));
}

#[test]
fn function_calls_count_towards_nesting() {
    let parser = Parser::new().max_depth(2);

    assert!(parser.parse(&tokenise("f(g(1))").unwrap()).is_ok());
    assert!(matches!(parser.parse(&tokenise("f(g(h(1)))").unwrap()),
                     Err(ParserError::NestingTooDeep { max_depth: 2, .. })));
    assert!(matches!(parser.parse(&tokenise("f((g(1)))").unwrap()),
                     Err(ParserError::NestingTooDeep { max_depth: 2, .. })));
}

fn chain(terms: usize, op: &str) -> String {
    format!("1{}", format!(" {op} 1").repeat(terms - 1))
}

#[test]
fn long_chains_are_rejected_before_execution() {
    let source = chain(200_000, "+");

    assert!(matches!(parse_source(&source),
                     Err(ParserError::TreeTooDeep { max_tree_depth: 1024, .. })));
    assert!(matches!(evaluate(&source, None),
                     Err(Error::Parser(ParserError::TreeTooDeep { max_tree_depth: 1024, .. }))));
    assert!(matches!(parse_source(&chain(200_000, "*")),
                     Err(ParserError::TreeTooDeep { .. })));
}

#[test]
fn tree_depth_is_bounded() {
    let parser = Parser::default();

    assert_eq!(parser.tree_depth_limit(), ratus::DEFAULT_MAX_TREE_DEPTH);
    assert!(parser.parse(&tokenise(&chain(1024, "+")).unwrap()).is_ok());
    // The 1024th `+` sits at byte 4 * 1024 - 2.
    assert_eq!(parser.parse(&tokenise(&chain(1025, "+")).unwrap()),
               Err(ParserError::TreeTooDeep { max_tree_depth: 1024,
                                              position:       4094, }));
    assert_eq!(evaluate(&chain(1024, "+"), None).unwrap(), Value::Integer(1024));
}

#[test]
fn every_node_counts_towards_tree_depth() {
    let depth_error = |source: &str, limit: usize| {
        let result = Parser::new().max_tree_depth(limit)
                                  .parse(&tokenise(source).unwrap());
        match result {
            Err(ParserError::TreeTooDeep { position, .. }) => Some(position),
            Err(e) => panic!("Unexpected error for {source:?}: {e}"),
            Ok(_) => None,
        }
    };

    assert_eq!(depth_error("1 + 2 * 3", 3), None);
    assert_eq!(depth_error("1 + 2 * 3", 2), Some(2));
    assert_eq!(depth_error("-1", 1), Some(0));
    assert_eq!(depth_error("f()", 1), None);
    assert_eq!(depth_error("f(1)", 1), Some(0));
    assert_eq!(depth_error("f(1 + 2)", 2), Some(0));
    assert_eq!(depth_error("((1 + 2))", 2), None);
}

#[test]
fn display_is_prefix_form() {
    assert_eq!(parse_source("-1").unwrap().to_string(), "(- 1)");
    assert_eq!(parse_source("if(1, \"a\", 2.5)").unwrap().to_string(), "if(1, \"a\", 2.5)");
    assert_eq!(parse_source("2.0 / !0").unwrap().to_string(), "(/ 2.0 (! 0))");
    assert_eq!(parse_source("f()").unwrap().to_string(), "f()");
}

#[test]
fn parsing_is_repeatable() {
    let tokens = tokenise("if(1 < 2 + 3, 'a', 'b')").unwrap();
    assert_eq!(parse(&tokens), parse(&tokens));
}
