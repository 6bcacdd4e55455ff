//! Configuration options for the engine.

use crate::evaluator::EvaluatorOptions;
use crate::guard::InputGuard;
use crate::parser::ParserOptions;

/// Configuration options for the engine.
///
/// # Example
///
/// ```
/// use mical_core::api::EngineOptions;
/// use mical_core::evaluator::EvaluatorOptions;
/// use mical_core::guard::InputGuard;
///
/// let options = EngineOptions {
///     evaluator: EvaluatorOptions { max_depth: 64 },
///     guard: InputGuard::disabled(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Limits applied by the pest front-end.
    pub parser: ParserOptions,

    /// Limits applied while folding the tree.
    pub evaluator: EvaluatorOptions,

    /// Deny list checked against raw input.
    ///
    /// Default: rejects `eval` and `exec`.
    pub guard: InputGuard,
}
