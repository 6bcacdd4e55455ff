//! Tree-walking evaluator for integer arithmetic.
//!
//! The evaluator folds a parsed [`Start`] tree into an `i64`.
//!
//! ## Design Principles
//!
//! - **Never panic**: overflow and oversized literals are reported as errors
//! - **Stack-safe**: depth tracking bounds recursion on hand-built trees
//! - **Stateless between calls**: every call starts from depth zero
//!
//! ## Example
//!
//! ```
//! use mical_core::{evaluator, parser};
//!
//! let tree = parser::parse("2 * (3 + 4)").unwrap();
//! assert_eq!(evaluator::eval(&tree), Ok(14));
//! ```

mod error;
mod eval;
mod operators;


pub use error::EvalError;
pub use eval::Evaluator;

use crate::parser::Start;

/// Default limit on nested expressions during evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Configuration options for evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum expression nesting depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate a parse tree with default limits.
pub fn eval(tree: &Start) -> Result<i64, EvalError> {
    eval_with_options(tree, EvaluatorOptions::default())
}

/// Evaluate a parse tree with custom limits.
///
/// ```
/// use mical_core::{evaluator::{self, EvaluatorOptions, EvalError}, parser};
///
/// let tree = parser::parse("((1))").unwrap();
/// let options = EvaluatorOptions { max_depth: 2 };
/// assert!(matches!(
///     evaluator::eval_with_options(&tree, options),
///     Err(EvalError::DepthExceeded { .. })
/// ));
/// ```
pub fn eval_with_options(tree: &Start, options: EvaluatorOptions) -> Result<i64, EvalError> {
    Evaluator::new(options).eval(tree)
}
