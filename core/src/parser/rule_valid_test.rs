// Tests with valid expressions for each rule in the grammar.

use crate::parser::{ExpressionParser, Rule};
use pest::Parser;
use pest::iterators::Pair;

fn contains_rule(pair: Pair<Rule>, target: Rule) -> bool {
    if pair.as_rule() == target {
        return true;
    }
    for inner in pair.into_inner() {
        if contains_rule(inner, target) {
            return true;
        }
    }
    false
}

macro_rules! rule_examples {
    ( $($rule:ident => [$($expr:expr),* $(,)?]),* $(,)? ) => {
        $(
            #[test]
            fn $rule() {
                let inputs = vec![$($expr),*];
                for input in inputs {
                    let result = ExpressionParser::parse(Rule::start, input)
                        .unwrap_or_else(|e| panic!("Failed to parse '{}': {}", input, e));
                    let root = result.into_iter().next().unwrap();
                    assert!(
                        contains_rule(root.clone(), Rule::$rule),
                        "Expected to find rule {:?} in parse tree for input '{}'",
                        Rule::$rule,
                        input
                    );
                }
            }
        )*
    };
}

rule_examples! {
    number => ["0", "42", "007", "123456789012345678901234567890"],
    add => ["1 + 2", "(1 + 2) * 3"],
    sub => ["3 - 1", "10 - 2 - 3"],
    mul => ["2 * 3", "2 * (3 + 4)"],
    grouped => ["(1)", "((((1))))", "2 * (3 + 4)"],
    factor => ["7", "(7)"],
    term => ["2 * 3 * 4", "5"],
    expression => ["1", "1 + 2 * 3"],
}

#[test]
fn test_valid_expressions() {
    let examples = [
        "2 * (3 + 4)",
        "10 - 2 - 3",
        "9 - 3 - 2",
        "2 * 3 * 4",
        "((((1))))",
        "1+2*3",
        "  1  +  2  ",
        "1 +\n 2",
        "\t(1)\r\n* 2",
        "(1 + (2 * (3 - 4))) * 5",
    ];

    for expr in examples {
        ExpressionParser::parse(Rule::start, expr)
            .unwrap_or_else(|e| panic!("Failed to parse '{}': {}", expr, e));
    }
}

#[test]
fn test_invalid_expressions() {
    let examples = [
        "",
        "   ",
        "1 +",
        "+ 1",
        "-1",         // no unary minus
        "1 / 2",      // no division
        "1.5",        // integers only
        "1e3",
        "x + 1",      // no variables
        "f(1)",       // no function calls
        "()",         // empty group
        "(1 + 2",     // unbalanced
        "1 + 2)",     // unbalanced
        "1 2",        // missing operator
        "1 ** 2",
        "1 $ 2",      // unrecognized token
        "eval(1+1)",
    ];

    for expr in examples {
        assert!(
            ExpressionParser::parse(Rule::start, expr).is_err(),
            "Expected failure parsing '{}'",
            expr
        );
    }
}
