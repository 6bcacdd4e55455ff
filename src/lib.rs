//! mical - integer arithmetic expressions, parsed and evaluated strictly
//!
//! # Overview
//!
//! mical evaluates expressions built from non-negative integer literals, `+`,
//! `-`, `*` and parentheses. Operators at the same level associate to the
//! left and `*` binds tighter than `+`/`-`. Malformed input is rejected before
//! anything is evaluated, and the first parse anomaly ends the run.
//!
//! Every call goes through the same pipeline:
//!
//! 1. the input guard checks the raw text against a deny list;
//! 2. the pest front-end parses it, reporting anomalies through a
//!    fail-fast [`DiagnosticListener`];
//! 3. the evaluator folds the tree into an `i64` with checked arithmetic.
//!
//! # Quick Start
//!
//! ```
//! use mical::{Engine, EngineOptions, Outcome};
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! assert_eq!(engine.run("2 * (3 + 4)"), Outcome::Ok(14));
//! assert_eq!(engine.run("10 - 2 - 3").value(), Some(5));
//! assert!(matches!(engine.run("eval(1+1)"), Outcome::SecurityViolation(_)));
//! assert!(matches!(engine.run("(1 + 2"), Outcome::Diagnostic(_)));
//! ```
//!
//! # Error reports
//!
//! [`Engine::evaluate`] returns a typed [`Error`]; the `render_*` functions
//! turn one into an `ariadne` report pointing into the source:
//!
//! ```
//! use mical::{Engine, render_error_to_string_no_color};
//!
//! let source = "1 + * 2";
//! let err = Engine::default().evaluate(source).unwrap_err();
//! let report = render_error_to_string_no_color(source, &err);
//! assert!(report.contains("P001"));
//! ```

// Re-export public API from mical_core
pub use mical_core::api::{Engine, EngineOptions, Error, Outcome};

pub use mical_core::evaluator::{EvalError, EvaluatorOptions};
pub use mical_core::guard::{InputGuard, SecurityViolation};
pub use mical_core::parser::{
    self, Diagnostic, DiagnosticListener, FailFastListener, FrontEnd, ParserOptions, PestFrontEnd,
    Span, Start,
};
pub use mical_core::visitor::{self, RecordingListener, TreeListener};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
