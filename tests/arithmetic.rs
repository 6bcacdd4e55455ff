#[macro_use]
mod cases;

use cases::{TEST_CASES, run};
use mical::Outcome;
use pretty_assertions::assert_eq;

#[test]
fn test_reference_table() {
    for case in TEST_CASES.iter() {
        assert_eq!(run(case.expr), Outcome::Ok(case.value), "{}", case.name);
    }
}

test_case!(
    single_literal,
    input: "42",
    value: 42,
);

test_case!(
    leading_zeros,
    input: "007",
    value: 7,
);

test_case!(
    whitespace_everywhere,
    input: " \t( 1 +\n2 )\r\n* 3 ",
    value: 9,
);

test_case!(
    no_whitespace,
    input: "2*(3+4)-1",
    value: 13,
);

test_case!(
    mixed_additive_left_to_right,
    input: "10 - 2 + 3",
    value: 11,
);

test_case!(
    grouping_overrides_left_assoc,
    input: "10 - (2 - 3)",
    value: 11,
);

test_case!(
    negative_result,
    input: "3 - 10",
    value: -7,
);

test_case!(
    product_of_negatives,
    input: "(0 - 2) * (0 - 3)",
    value: 6,
);

test_case!(
    i64_max,
    input: "9223372036854775807",
    value: i64::MAX,
);

test_case!(
    i64_min_by_subtraction,
    input: "0 - 9223372036854775807 - 1",
    value: i64::MIN,
);

test_case!(
    deep_but_allowed_nesting,
    input: "((((((((((1 + 1))))))))))",
    value: 2,
);

#[test]
fn test_flat_chain_equals_left_grouped_chain() {
    let inputs = [
        ("20 - 5 - 3 - 2", "(((20 - 5) - 3) - 2)"),
        ("2 * 3 * 4 * 5", "(((2 * 3) * 4) * 5)"),
        ("1 - 2 + 3 - 4", "(((1 - 2) + 3) - 4)"),
    ];
    for (flat, grouped) in inputs {
        assert_eq!(run(flat), run(grouped), "{}", flat);
    }
}

#[test]
fn test_same_input_same_outcome() {
    for input in ["2 * (3 + 4)", "(1 + 2", "eval(1)", "9223372036854775807 + 1"] {
        assert_eq!(run(input), run(input), "{}", input);
    }
}
