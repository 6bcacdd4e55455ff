//! Public API: one call from source text to a structured outcome.
//!
//! The pipeline is:
//!
//! 1. the [`InputGuard`](crate::guard::InputGuard) checks the raw text;
//! 2. the front-end parses it, failing on the first diagnostic;
//! 3. the evaluator folds the tree into an integer.
//!
//! [`Engine::evaluate`] returns the first failure as an [`Error`];
//! [`Engine::run`] turns everything into an [`Outcome`] and never fails.

mod engine;
mod error;
mod options;
mod outcome;

pub use engine::Engine;
pub use error::Error;
pub use options::EngineOptions;
pub use outcome::Outcome;
