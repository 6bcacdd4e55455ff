#[macro_use]
mod cases;

use mical::{Diagnostic, Engine, EngineOptions, InputGuard, Outcome, SecurityViolation};
use pretty_assertions::assert_eq;

test_case!(
    eval_call,
    input: "eval(1+1)",
    outcome: Outcome::SecurityViolation(SecurityViolation { .. }),
);

test_case!(
    exec_call,
    input: "exec(1)",
    outcome: Outcome::SecurityViolation(SecurityViolation { .. }),
);

test_case!(
    eval_after_valid_prefix,
    input: "1 + eval",
    outcome: Outcome::SecurityViolation(SecurityViolation { .. }),
);

test_case!(
    substring_match,
    input: "2 * evaluate",
    outcome: Outcome::SecurityViolation(SecurityViolation { .. }),
);

test_case!(
    uppercase_is_not_deny_listed,
    input: "EVAL(1)",
    outcome: Outcome::Diagnostic(Diagnostic::SyntaxError { .. }),
);

#[test]
fn test_violation_message() {
    assert_eq!(
        cases::run("eval(1+1)").to_string(),
        "unsafe expression: contains a call to 'eval'"
    );
}

#[test]
fn test_custom_deny_list() {
    let engine = Engine::new(EngineOptions {
        guard: InputGuard::new(["666"]),
        ..Default::default()
    });
    assert!(matches!(
        engine.run("1 + 666"),
        Outcome::SecurityViolation(_)
    ));
    assert!(matches!(engine.run("eval"), Outcome::Diagnostic(_)));
    assert_eq!(engine.run("1 + 665"), Outcome::Ok(666));
}

#[test]
fn test_disabled_guard() {
    let engine = Engine::new(EngineOptions {
        guard: InputGuard::disabled(),
        ..Default::default()
    });
    assert!(matches!(
        engine.run("eval(1+1)"),
        Outcome::Diagnostic(Diagnostic::SyntaxError { .. })
    ));
}
