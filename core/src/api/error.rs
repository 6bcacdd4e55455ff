//! Public error type for the engine API.

use thiserror::Error;

use crate::evaluator::EvalError;
use crate::guard::SecurityViolation;
use crate::parser::{Diagnostic, Span};

/// Every way an evaluation request can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The front-end raised a diagnostic; no tree was produced.
    #[error(transparent)]
    Parse(#[from] Diagnostic),

    /// Raw input matched the deny list; nothing was parsed or evaluated.
    #[error(transparent)]
    Security(#[from] SecurityViolation),

    /// The tree was valid but could not be folded into an integer.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn span(&self) -> Option<&Span> {
        match self {
            Error::Parse(diagnostic) => diagnostic.span(),
            Error::Security(_) => None,
            Error::Eval(err) => err.span(),
        }
    }

    /// Stable short code for reports: `P` parse, `S` guard, `E` evaluation.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Parse(diagnostic) => diagnostic.code(),
            Error::Security(_) => "S001",
            Error::Eval(err) => err.code(),
        }
    }
}
