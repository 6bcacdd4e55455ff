//! Engine that runs the full pipeline: guard, parse, evaluate.

use crate::api::{EngineOptions, Error, Outcome};
use crate::evaluator::Evaluator;
use crate::parser::{FailFastListener, FrontEnd, PestFrontEnd, Start, TracingListener};
use crate::visitor::{self, TreeListener};

/// Runs expressions end to end.
///
/// An `Engine` only holds read-only configuration. Every call builds its own
/// parse tree and evaluator, so one engine can serve any number of calls,
/// from any number of threads.
///
/// # Example
///
/// ```
/// use mical_core::api::{Engine, EngineOptions, Outcome};
///
/// let engine = Engine::new(EngineOptions::default());
/// assert_eq!(engine.run("2 * (3 + 4)"), Outcome::Ok(14));
/// assert_eq!(engine.run("10 - 2 - 3").value(), Some(5));
/// ```
#[derive(Debug, Clone)]
pub struct Engine<F = PestFrontEnd> {
    options: EngineOptions,
    front_end: F,
}

impl Engine<PestFrontEnd> {
    pub fn new(options: EngineOptions) -> Self {
        let front_end = PestFrontEnd::new(options.parser.clone());
        Self { options, front_end }
    }
}

impl Default for Engine<PestFrontEnd> {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl<F: FrontEnd> Engine<F> {
    /// Engine backed by another parser technology.
    ///
    /// `options.parser` is ignored; the front-end carries its own settings.
    pub fn with_front_end(options: EngineOptions, front_end: F) -> Self {
        Self { options, front_end }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Check the guard and parse, without evaluating.
    pub fn parse(&self, source: &str) -> Result<Start, Error> {
        self.options.guard.validate(source)?;
        let tree = self
            .front_end
            .parse(source, &TracingListener(FailFastListener))?;
        tracing::debug!(span = %tree.span, "parsed");
        Ok(tree)
    }

    /// Guard, parse and evaluate, failing with the first error.
    pub fn evaluate(&self, source: &str) -> Result<i64, Error> {
        self.evaluate_tree(source).map(|(_, value)| value)
    }

    /// Guard, parse and evaluate `source`.
    ///
    /// Evaluation failures never escape: they are logged and reported as
    /// [`Outcome::NoResult`].
    pub fn run(&self, source: &str) -> Outcome {
        Outcome::from(self.evaluate(source))
    }

    /// Like [`evaluate`](Self::evaluate), then walk the tree with `listener`
    /// if evaluation succeeded.
    pub fn evaluate_with_walker(
        &self,
        source: &str,
        listener: &mut dyn TreeListener,
    ) -> Result<i64, Error> {
        self.evaluate_tree(source).map(|(tree, value)| {
            visitor::walk(&tree, listener);
            value
        })
    }

    /// Like [`run`](Self::run), then walk the tree with `listener` if
    /// evaluation succeeded.
    pub fn run_with_walker(&self, source: &str, listener: &mut dyn TreeListener) -> Outcome {
        Outcome::from(self.evaluate_with_walker(source, listener))
    }

    fn evaluate_tree(&self, source: &str) -> Result<(Start, i64), Error> {
        let tree = self.parse(source)?;
        let value = Evaluator::new(self.options.evaluator.clone()).eval(&tree)?;
        tracing::debug!(value, "evaluated");
        Ok((tree, value))
    }
}
