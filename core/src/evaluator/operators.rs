//! Binary operator implementations.

use crate::{
    evaluator::EvalError,
    parser::{AdditiveOp, BinaryOp, MultiplicativeOp, Span},
};

/// Apply `+` or `-`.
///
/// Uses checked arithmetic; overflow is reported instead of wrapping.
pub(super) fn eval_additive(
    op: AdditiveOp,
    left: i64,
    right: i64,
    span: &Span,
) -> Result<i64, EvalError> {
    let result = match op {
        AdditiveOp::Add => left.checked_add(right),
        AdditiveOp::Sub => left.checked_sub(right),
    };
    result.ok_or_else(|| overflow(op.into(), left, right, span))
}

/// Apply `*` with checked arithmetic.
pub(super) fn eval_multiplicative(
    op: MultiplicativeOp,
    left: i64,
    right: i64,
    span: &Span,
) -> Result<i64, EvalError> {
    let result = match op {
        MultiplicativeOp::Mul => left.checked_mul(right),
    };
    result.ok_or_else(|| overflow(op.into(), left, right, span))
}

fn overflow(op: BinaryOp, left: i64, right: i64, span: &Span) -> EvalError {
    EvalError::Overflow {
        op,
        left,
        right,
        span: span.clone(),
    }
}
