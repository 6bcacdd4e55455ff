//! Typed parse tree for integer arithmetic.
//!
//! The tree mirrors the grammar rules one to one: a [`Start`] owns a single
//! [`Expression`], which folds [`Term`]s with `+`/`-`, which fold [`Factor`]s
//! with `*`. Nodes own their children; the tree is read-only once built.
//!
//! `Expression` and `Term` keep their operands and operators in separate
//! vectors. The constructors enforce `operators.len() == operands.len() - 1`
//! with at least one operand, so the evaluator can rely on it.

use crate::parser::error::TreeShapeError;
use crate::parser::syntax::{AdditiveOp, MultiplicativeOp, Span};
use crate::{Box, String, Vec};

/// Root of a parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Start {
    pub expression: Expression,
    pub span: Span,
}

impl Start {
    pub fn new(expression: Expression, span: Span) -> Self {
        Self { expression, span }
    }
}

/// `Term (('+' | '-') Term)*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    terms: Vec<Term>,
    operators: Vec<AdditiveOp>,
    span: Span,
}

impl Expression {
    pub fn new(
        terms: Vec<Term>,
        operators: Vec<AdditiveOp>,
        span: Span,
    ) -> Result<Self, TreeShapeError> {
        check_shape("expression", terms.len(), operators.len(), &span)?;
        Ok(Self {
            terms,
            operators,
            span,
        })
    }

    /// Expression with a single term and no operators.
    pub fn single(term: Term) -> Self {
        let span = term.span.clone();
        Self {
            terms: crate::vec![term],
            operators: Vec::new(),
            span,
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn operators(&self) -> &[AdditiveOp] {
        &self.operators
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The leftmost term, which seeds the left-to-right fold.
    pub fn first(&self) -> &Term {
        &self.terms[0]
    }

    /// Remaining `(operator, term)` pairs in source order.
    pub fn rest(&self) -> impl Iterator<Item = (AdditiveOp, &Term)> {
        self.operators.iter().copied().zip(self.terms[1..].iter())
    }
}

/// `Factor ('*' Factor)*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    factors: Vec<Factor>,
    operators: Vec<MultiplicativeOp>,
    span: Span,
}

impl Term {
    pub fn new(
        factors: Vec<Factor>,
        operators: Vec<MultiplicativeOp>,
        span: Span,
    ) -> Result<Self, TreeShapeError> {
        check_shape("term", factors.len(), operators.len(), &span)?;
        Ok(Self {
            factors,
            operators,
            span,
        })
    }

    /// Term with a single factor and no operators.
    pub fn single(factor: Factor) -> Self {
        let span = factor.span().clone();
        Self {
            factors: crate::vec![factor],
            operators: Vec::new(),
            span,
        }
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    pub fn operators(&self) -> &[MultiplicativeOp] {
        &self.operators
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn first(&self) -> &Factor {
        &self.factors[0]
    }

    pub fn rest(&self) -> impl Iterator<Item = (MultiplicativeOp, &Factor)> {
        self.operators.iter().copied().zip(self.factors[1..].iter())
    }
}

/// `NUMBER | '(' Expression ')'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
    /// Integer literal, kept as source text until evaluation.
    Number { text: String, span: Span },
    /// Parenthesised sub-expression.
    Grouped {
        expression: Box<Expression>,
        span: Span,
    },
    /// Degenerate factor that is neither a number nor a grouped expression.
    ///
    /// The pest grammar never produces it. Alternative front-ends may, and
    /// the evaluator treats it as zero.
    Empty { span: Span },
}

impl Factor {
    pub fn number(text: impl Into<String>, span: Span) -> Self {
        Factor::Number {
            text: text.into(),
            span,
        }
    }

    pub fn grouped(expression: Expression, span: Span) -> Self {
        Factor::Grouped {
            expression: Box::new(expression),
            span,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Factor::Number { span, .. } | Factor::Grouped { span, .. } | Factor::Empty { span } => {
                span
            }
        }
    }
}

fn check_shape(
    rule: &'static str,
    operands: usize,
    operators: usize,
    span: &Span,
) -> Result<(), TreeShapeError> {
    if operands == 0 || operators + 1 != operands {
        return Err(TreeShapeError::OperatorCount {
            rule,
            operands,
            operators,
            span: span.clone(),
        });
    }
    Ok(())
}
