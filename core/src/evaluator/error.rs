//! Evaluation errors.
//!
//! The evaluator only sees trees the parser accepted, so these cover what the
//! grammar cannot rule out: literals too large for `i64`, arithmetic overflow
//! and runaway nesting in hand-built trees.

use thiserror::Error;

use crate::String;
use crate::parser::{BinaryOp, Span};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A `NUMBER` literal is not representable as a 64-bit signed integer.
    #[error("invalid integer literal '{text}' at {span}")]
    MalformedLiteral { text: String, span: Span },

    /// Checked arithmetic failed.
    #[error("integer overflow computing {left} {op} {right} at {span}")]
    Overflow {
        op: BinaryOp,
        left: i64,
        right: i64,
        span: Span,
    },

    /// Nesting of grouped expressions exceeded the configured limit.
    #[error("evaluation depth {depth} exceeds maximum of {max_depth}")]
    DepthExceeded { depth: usize, max_depth: usize },
}

impl EvalError {
    pub fn span(&self) -> Option<&Span> {
        match self {
            EvalError::MalformedLiteral { span, .. } | EvalError::Overflow { span, .. } => {
                Some(span)
            }
            EvalError::DepthExceeded { .. } => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EvalError::MalformedLiteral { .. } => "E001",
            EvalError::Overflow { .. } => "E002",
            EvalError::DepthExceeded { .. } => "E003",
        }
    }
}
