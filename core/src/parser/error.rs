use alloc::collections::BTreeSet;
use alloc::string::ToString;

use thiserror::Error;

use crate::parser::{Rule, Span};
use crate::{String, Vec, format};

/// Parse-time anomaly reported through a [`DiagnosticListener`].
///
/// Every variant terminates the parse: the first one raised is returned to the
/// caller and no tree is produced.
///
/// [`DiagnosticListener`]: crate::parser::DiagnosticListener
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Malformed token sequence.
    #[error("syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
        span: Span,
    },

    /// The grammar admits more than one derivation for some input span.
    #[error("ambiguity detected between alternatives {}", format_alternatives(.alternatives))]
    Ambiguity { alternatives: BTreeSet<usize> },

    /// The parser needed full-context lookahead to pick an alternative.
    #[error(
        "full-context analysis attempted between alternatives {}",
        format_alternatives(.alternatives)
    )]
    FullContextAttempt { alternatives: BTreeSet<usize> },

    #[error(
        "context sensitivity detected at {start_index}-{stop_index}, prediction: {prediction}"
    )]
    ContextSensitivity {
        start_index: usize,
        stop_index: usize,
        prediction: usize,
    },
}

impl Diagnostic {
    /// Source span of the anomaly, when it has one.
    pub fn span(&self) -> Option<&Span> {
        match self {
            Diagnostic::SyntaxError { span, .. } => Some(span),
            _ => None,
        }
    }

    /// Short stable code, in the spirit of compiler error codes.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::SyntaxError { .. } => "P001",
            Diagnostic::Ambiguity { .. } => "P002",
            Diagnostic::FullContextAttempt { .. } => "P003",
            Diagnostic::ContextSensitivity { .. } => "P004",
        }
    }
}

fn format_alternatives(alternatives: &BTreeSet<usize>) -> String {
    let items: Vec<String> = alternatives.iter().map(|a| a.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}

/// The tree builder met a parse tree it cannot represent.
///
/// Only reachable when the grammar and the tree builder disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeShapeError {
    #[error("{rule} at {span} has {operands} operand(s) but {operators} operator(s)")]
    OperatorCount {
        rule: &'static str,
        operands: usize,
        operators: usize,
        span: Span,
    },

    #[error("unexpected rule {rule:?} at {span}")]
    UnexpectedRule { rule: Rule, span: Span },

    #[error("missing {expected} in {rule:?} at {span}")]
    MissingChild {
        expected: &'static str,
        rule: Rule,
        span: Span,
    },
}

impl TreeShapeError {
    pub fn span(&self) -> &Span {
        match self {
            TreeShapeError::OperatorCount { span, .. }
            | TreeShapeError::UnexpectedRule { span, .. }
            | TreeShapeError::MissingChild { span, .. } => span,
        }
    }
}

/// A pest error reduced to what the listener needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PestFailure {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub span: Span,
}

/// Convert a pest error into a human-readable failure.
pub(crate) fn convert_pest_error(err: pest::error::Error<Rule>) -> PestFailure {
    use pest::error::{ErrorVariant, InputLocation, LineColLocation};

    let span = match err.location {
        InputLocation::Pos(pos) => Span(pos..pos),
        InputLocation::Span((start, end)) => Span(start..end),
    };
    let (line, column) = match err.line_col {
        LineColLocation::Pos(pos) => pos,
        LineColLocation::Span(start, _) => start,
    };

    let message = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => {
            let expected = format_expected_rules(&positives);
            if negatives.is_empty() {
                format!("expected {}", expected)
            } else {
                format!(
                    "expected {}, found {}",
                    expected,
                    format_found_rules(&negatives)
                )
            }
        }
        ErrorVariant::CustomError { message } => message,
    };

    PestFailure {
        line,
        column,
        message,
        span,
    }
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts: Vec<&'static str> = Vec::new();

    for rule in rules {
        let described: &[&'static str] = match rule {
            Rule::number => &["number"],
            Rule::grouped => &["'('"],
            Rule::factor | Rule::term | Rule::expression => &["number", "'('"],
            Rule::add | Rule::sub | Rule::mul => &["operator"],
            Rule::EOI => &["end of input"],
            _ => &["expression"],
        };
        for concept in described {
            if !concepts.contains(concept) {
                concepts.push(*concept);
            }
        }
    }

    match concepts.len() {
        0 => "something else".to_string(),
        1 => concepts[0].to_string(),
        n => format!("{} or {}", concepts[..n - 1].join(", "), concepts[n - 1]),
    }
}

/// Format found rules in a human-readable way
fn format_found_rules(rules: &[Rule]) -> String {
    match rules.first() {
        None => "unexpected token".to_string(),
        Some(Rule::number) => "number".to_string(),
        Some(Rule::EOI) => "end of input".to_string(),
        Some(Rule::grouped) => "grouped expression".to_string(),
        Some(rule) => format!("{:?}", rule),
    }
}

/// 1-based line and column of a byte offset.
pub(crate) fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let prefix = &source[..offset.min(source.len())];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    let column = prefix[line_start..].chars().count() + 1;
    (line, column)
}
