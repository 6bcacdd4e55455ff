use core::fmt;

use crate::String;
use crate::api::Error;
use crate::guard::SecurityViolation;
use crate::parser::Diagnostic;

/// Structured result of running one expression.
///
/// Callers choose the presentation; nothing here prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The expression evaluated to this integer.
    Ok(i64),
    /// Parsing failed with the first diagnostic raised.
    Diagnostic(Diagnostic),
    /// Input was rejected by the guard before evaluation.
    SecurityViolation(SecurityViolation),
    /// Evaluation failed; the failure was logged and no result is available.
    NoResult { message: String },
}

impl Outcome {
    pub fn value(&self) -> Option<i64> {
        match self {
            Outcome::Ok(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Process exit code for callers that report failures to the shell.
    ///
    /// 0 on success, 2 for diagnostics, 3 for guard violations, 4 when
    /// evaluation produced no result.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Ok(_) => 0,
            Outcome::Diagnostic(_) => 2,
            Outcome::SecurityViolation(_) => 3,
            Outcome::NoResult { .. } => 4,
        }
    }
}

impl From<Result<i64, Error>> for Outcome {
    fn from(result: Result<i64, Error>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(Error::Parse(diagnostic)) => Outcome::Diagnostic(diagnostic),
            Err(Error::Security(violation)) => Outcome::SecurityViolation(violation),
            Err(Error::Eval(err)) => {
                tracing::error!(error = %err, "evaluation failed");
                Outcome::NoResult {
                    message: crate::ToString::to_string(&err),
                }
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "{}", value),
            Outcome::Diagnostic(diagnostic) => write!(f, "{}", diagnostic),
            Outcome::SecurityViolation(violation) => write!(f, "{}", violation),
            Outcome::NoResult { message } => write!(f, "no result: {}", message),
        }
    }
}
