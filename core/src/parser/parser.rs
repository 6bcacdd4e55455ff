use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;

use crate::parser::error::{PestFailure, TreeShapeError, convert_pest_error, line_col};
use crate::parser::listener::{DiagnosticListener, FailFastListener};
use crate::parser::syntax::{AdditiveOp, MultiplicativeOp, Span};
use crate::parser::tree::{Expression, Factor, Start, Term};
use crate::parser::Diagnostic;
use crate::{ToString, Vec, format};

#[derive(Parser)]
#[grammar = "parser/expression.pest"]
pub struct ExpressionParser;

/// Default limit on parenthesis nesting accepted by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Configuration options for parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum parenthesis nesting depth.
    ///
    /// Deeper input is rejected with a syntax error before pest sees it, so
    /// pathological input cannot exhaust the stack.
    ///
    /// Default: 500
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A parser technology that produces [`Start`] trees.
///
/// Every anomaly must be routed through `listener`, and the diagnostic it
/// returns must be the error of `parse`.
pub trait FrontEnd {
    fn parse(&self, source: &str, listener: &dyn DiagnosticListener) -> Result<Start, Diagnostic>;
}

/// Front-end backed by the pest grammar in `expression.pest`.
#[derive(Debug, Clone, Default)]
pub struct PestFrontEnd {
    options: ParserOptions,
}

impl PestFrontEnd {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }
}

impl FrontEnd for PestFrontEnd {
    fn parse(&self, source: &str, listener: &dyn DiagnosticListener) -> Result<Start, Diagnostic> {
        parse_with_options(source, listener, &self.options)
    }
}

/// Parse `source` with default options and a fail-fast listener.
pub fn parse(source: &str) -> Result<Start, Diagnostic> {
    parse_with_options(source, &FailFastListener, &ParserOptions::default())
}

/// Parse `source`, reporting anomalies to `listener`.
pub fn parse_with_listener(
    source: &str,
    listener: &dyn DiagnosticListener,
) -> Result<Start, Diagnostic> {
    parse_with_options(source, listener, &ParserOptions::default())
}

pub fn parse_with_options(
    source: &str,
    listener: &dyn DiagnosticListener,
    options: &ParserOptions,
) -> Result<Start, Diagnostic> {
    if let Some(offset) = exceeds_depth(source, options.max_depth) {
        let (line, column) = line_col(source, offset);
        return Err(listener.syntax_error(
            line,
            column,
            format!(
                "expression nesting depth exceeds maximum of {} levels",
                options.max_depth
            ),
            Span::new(offset, offset + 1),
        ));
    }

    let mut pairs = ExpressionParser::parse(Rule::start, source).map_err(|err| {
        let PestFailure {
            line,
            column,
            message,
            span,
        } = convert_pest_error(err);
        listener.syntax_error(line, column, message, span)
    })?;

    let start = match pairs.next() {
        Some(pair) => build_start(pair),
        None => Err(TreeShapeError::MissingChild {
            expected: "start",
            rule: Rule::start,
            span: Span::new(0, source.len()),
        }),
    };

    start.map_err(|err| {
        let span = err.span().clone();
        let (line, column) = line_col(source, span.start());
        listener.syntax_error(line, column, format!("internal: {}", err), span)
    })
}

/// Byte offset of the first `(` that opens a group deeper than `max_depth`.
fn exceeds_depth(source: &str, max_depth: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, c) in source.char_indices() {
        match c {
            '(' => {
                depth += 1;
                if depth > max_depth {
                    return Some(offset);
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}

fn build_start(pair: Pair<Rule>) -> Result<Start, TreeShapeError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner();
    let expression = build_expression(next_child(&mut inner, "expression", Rule::start, &span)?)?;
    Ok(Start::new(expression, span))
}

// Expression and term spans come from their operands: pest's pair span also
// covers whitespace skipped before a failed `(op ~ operand)*` repetition.
fn build_expression(pair: Pair<Rule>) -> Result<Expression, TreeShapeError> {
    expect_rule(&pair, Rule::expression)?;
    let pair_span = Span::from(pair.as_span());
    let mut terms = Vec::new();
    let mut operators = Vec::new();

    for child in pair.into_inner() {
        match child.as_rule() {
            Rule::term => terms.push(build_term(child)?),
            Rule::add => operators.push(AdditiveOp::Add),
            Rule::sub => operators.push(AdditiveOp::Sub),
            rule => {
                return Err(TreeShapeError::UnexpectedRule {
                    rule,
                    span: child.as_span().into(),
                });
            }
        }
    }

    let span = match (terms.first(), terms.last()) {
        (Some(first), Some(last)) => Span::combine(first.span(), last.span()),
        _ => pair_span,
    };
    Expression::new(terms, operators, span)
}

fn build_term(pair: Pair<Rule>) -> Result<Term, TreeShapeError> {
    let pair_span = Span::from(pair.as_span());
    let mut factors = Vec::new();
    let mut operators = Vec::new();

    for child in pair.into_inner() {
        match child.as_rule() {
            Rule::factor => factors.push(build_factor(child)?),
            Rule::mul => operators.push(MultiplicativeOp::Mul),
            rule => {
                return Err(TreeShapeError::UnexpectedRule {
                    rule,
                    span: child.as_span().into(),
                });
            }
        }
    }

    let span = match (factors.first(), factors.last()) {
        (Some(first), Some(last)) => Span::combine(first.span(), last.span()),
        _ => pair_span,
    };
    Term::new(factors, operators, span)
}

fn build_factor(pair: Pair<Rule>) -> Result<Factor, TreeShapeError> {
    let span = Span::from(pair.as_span());
    let mut inner = pair.into_inner();
    let child = next_child(&mut inner, "number or group", Rule::factor, &span)?;

    match child.as_rule() {
        Rule::number => Ok(Factor::number(child.as_str().to_string(), span)),
        Rule::grouped => {
            let mut grouped = child.into_inner();
            let expression = match grouped.next() {
                Some(expr) => build_expression(expr)?,
                // `()` is rejected by the grammar; keep the degenerate form if
                // it ever gets through.
                None => return Ok(Factor::Empty { span }),
            };
            Ok(Factor::grouped(expression, span))
        }
        rule => Err(TreeShapeError::UnexpectedRule {
            rule,
            span: child.as_span().into(),
        }),
    }
}

fn next_child<'i>(
    pairs: &mut Pairs<'i, Rule>,
    expected: &'static str,
    rule: Rule,
    span: &Span,
) -> Result<Pair<'i, Rule>, TreeShapeError> {
    pairs.next().ok_or_else(|| TreeShapeError::MissingChild {
        expected,
        rule,
        span: span.clone(),
    })
}

fn expect_rule(pair: &Pair<Rule>, rule: Rule) -> Result<(), TreeShapeError> {
    if pair.as_rule() != rule {
        return Err(TreeShapeError::UnexpectedRule {
            rule: pair.as_rule(),
            span: pair.as_span().into(),
        });
    }
    Ok(())
}
