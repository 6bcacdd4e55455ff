//! Core evaluation logic.

use crate::{
    ToString,
    evaluator::{EvalError, EvaluatorOptions, operators},
    parser::{Expression, Factor, Span, Start, Term},
};

/// Folds a parse tree into a single integer.
///
/// Both precedence levels are folded strictly left to right: the first operand
/// seeds the accumulator and each `(operator, operand)` pair is applied in
/// source order.
pub struct Evaluator {
    options: EvaluatorOptions,
    depth: usize,
}

impl Evaluator {
    /// Create a new evaluator with the given options.
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Evaluate a whole tree.
    pub fn eval(&mut self, start: &Start) -> Result<i64, EvalError> {
        self.depth = 0;
        self.eval_expression(&start.expression)
    }

    /// Evaluate an expression node, tracking nesting depth.
    pub fn eval_expression(&mut self, expr: &Expression) -> Result<i64, EvalError> {
        if self.depth >= self.options.max_depth {
            return Err(EvalError::DepthExceeded {
                depth: self.depth + 1,
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.eval_expression_inner(expr);
        self.depth -= 1;

        result
    }

    fn eval_expression_inner(&mut self, expr: &Expression) -> Result<i64, EvalError> {
        let mut acc = self.eval_term(expr.first())?;
        for (op, term) in expr.rest() {
            let right = self.eval_term(term)?;
            acc = operators::eval_additive(
                op,
                acc,
                right,
                &Span::combine(expr.first().span(), term.span()),
            )?;
        }
        Ok(acc)
    }

    pub fn eval_term(&mut self, term: &Term) -> Result<i64, EvalError> {
        let mut acc = self.eval_factor(term.first())?;
        for (op, factor) in term.rest() {
            let right = self.eval_factor(factor)?;
            acc = operators::eval_multiplicative(
                op,
                acc,
                right,
                &Span::combine(term.first().span(), factor.span()),
            )?;
        }
        Ok(acc)
    }

    pub fn eval_factor(&mut self, factor: &Factor) -> Result<i64, EvalError> {
        match factor {
            Factor::Number { text, span } => {
                text.parse::<i64>()
                    .map_err(|_| EvalError::MalformedLiteral {
                        text: text.to_string(),
                        span: span.clone(),
                    })
            }
            Factor::Grouped { expression, .. } => self.eval_expression(expression),
            Factor::Empty { span } => {
                tracing::debug!(%span, "degenerate factor evaluates to zero");
                Ok(0)
            }
        }
    }
}
