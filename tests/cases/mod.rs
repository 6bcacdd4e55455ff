#![allow(dead_code)]

use mical::{Engine, Outcome};
use once_cell::sync::Lazy;

/// Shared engine with default options; engines hold no per-call state.
pub static ENGINE: Lazy<Engine> = Lazy::new(Engine::default);

pub fn run(input: &str) -> Outcome {
    ENGINE.run(input)
}

pub struct TestCase {
    pub name: &'static str,
    pub expr: &'static str,
    pub value: i64,
}

/// Reference inputs and the values the reference tool prints for them.
pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "reference_example",
            expr: "2 * (3 + 4)",
            value: 14,
        },
        TestCase {
            name: "subtraction_left_assoc",
            expr: "10 - 2 - 3",
            value: 5,
        },
        TestCase {
            name: "subtraction_left_assoc_2",
            expr: "9 - 3 - 2",
            value: 4,
        },
        TestCase {
            name: "multiplication_chain",
            expr: "2 * 3 * 4",
            value: 24,
        },
        TestCase {
            name: "nested_parens",
            expr: "((((1))))",
            value: 1,
        },
        TestCase {
            name: "precedence",
            expr: "1 + 2 * 3",
            value: 7,
        },
    ]
});

/// `test_case!(name, input: "...", value: n)` expects `Outcome::Ok(n)`;
/// `test_case!(name, input: "...", outcome: Pattern)` matches the outcome.
macro_rules! test_case {
    ($name:ident, input: $input:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(
                crate::cases::run($input),
                mical::Outcome::Ok($value)
            );
        }
    };
    ($name:ident, input: $input:expr, outcome: $pattern:pat $(,)?) => {
        #[test]
        fn $name() {
            let outcome = crate::cases::run($input);
            assert!(
                matches!(outcome, $pattern),
                "{:?} gave {:?}",
                $input,
                outcome
            );
        }
    };
}
