#[macro_use]
mod cases;

use cases::{ENGINE, run};
use mical::{Diagnostic, EvalError, Outcome, render_error_to_string_no_color};
use pretty_assertions::assert_eq;

test_case!(
    unclosed_paren,
    input: "(1 + 2",
    outcome: Outcome::Diagnostic(Diagnostic::SyntaxError { .. }),
);

test_case!(
    dangling_operator,
    input: "1 +",
    outcome: Outcome::Diagnostic(Diagnostic::SyntaxError { .. }),
);

test_case!(
    unknown_character,
    input: "1 $ 2",
    outcome: Outcome::Diagnostic(Diagnostic::SyntaxError { .. }),
);

test_case!(
    empty_parens,
    input: "()",
    outcome: Outcome::Diagnostic(Diagnostic::SyntaxError { .. }),
);

test_case!(
    empty_input,
    input: "",
    outcome: Outcome::Diagnostic(Diagnostic::SyntaxError { .. }),
);

test_case!(
    division_is_not_supported,
    input: "4 / 2",
    outcome: Outcome::Diagnostic(Diagnostic::SyntaxError { .. }),
);

test_case!(
    unary_minus_is_not_supported,
    input: "-1",
    outcome: Outcome::Diagnostic(Diagnostic::SyntaxError { .. }),
);

test_case!(
    floats_are_not_supported,
    input: "1.5 + 1",
    outcome: Outcome::Diagnostic(Diagnostic::SyntaxError { .. }),
);

test_case!(
    addition_overflow,
    input: "9223372036854775807 + 1",
    outcome: Outcome::NoResult { .. },
);

test_case!(
    literal_too_large,
    input: "99999999999999999999",
    outcome: Outcome::NoResult { .. },
);

#[test]
fn test_syntax_error_position() {
    let Outcome::Diagnostic(Diagnostic::SyntaxError { line, column, .. }) = run("1 +\n*") else {
        panic!("expected a syntax error");
    };
    assert_eq!((line, column), (2, 1));
}

#[test]
fn test_syntax_error_message() {
    let message = run("(1 + 2").to_string();
    assert!(
        message.starts_with("syntax error at line 1, column 7: expected"),
        "{}",
        message
    );
}

#[test]
fn test_first_diagnostic_wins() {
    // Two problems; only the leftmost is reported.
    let Outcome::Diagnostic(Diagnostic::SyntaxError { column, .. }) = run("1 $ 2 $ 3") else {
        panic!("expected a syntax error");
    };
    assert_eq!(column, 3);
}

#[test]
fn test_evaluation_failure_is_typed_through_evaluate() {
    let err = ENGINE.evaluate("99999999999999999999").unwrap_err();
    assert_eq!(err.code(), "E001");
    assert!(matches!(
        err,
        mical::Error::Eval(EvalError::MalformedLiteral { .. })
    ));
}

#[test]
fn test_no_result_message() {
    assert_eq!(
        run("9223372036854775807 + 1"),
        Outcome::NoResult {
            message: "integer overflow computing 9223372036854775807 + 1 at 0..23".to_string()
        }
    );
}

#[test]
fn test_rendered_report_points_into_source() {
    let source = "2 * (3 + )";
    let err = ENGINE.evaluate(source).unwrap_err();
    let report = render_error_to_string_no_color(source, &err);

    assert!(report.contains("P001"), "{}", report);
    assert!(report.contains(source), "{}", report);
}
