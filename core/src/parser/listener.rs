//! Fail-fast handling of parse-time anomalies.
//!
//! A front-end reports every anomaly it detects to a [`DiagnosticListener`].
//! The listener turns it into a [`Diagnostic`], and the front-end returns that
//! diagnostic as its error immediately. There is no recovery: the first
//! anomaly ends the parse and no partial tree escapes.

use alloc::collections::BTreeSet;

use crate::String;
use crate::parser::{Diagnostic, Span};

/// Receives parse-time anomalies from a front-end.
///
/// Each callback returns the diagnostic the front-end must fail with. The
/// default implementations build the matching [`Diagnostic`] variant
/// unchanged; implementors can override a callback to enrich the message.
pub trait DiagnosticListener {
    fn syntax_error(&self, line: usize, column: usize, message: String, span: Span) -> Diagnostic {
        Diagnostic::SyntaxError {
            line,
            column,
            message,
            span,
        }
    }

    fn report_ambiguity(&self, alternatives: BTreeSet<usize>) -> Diagnostic {
        Diagnostic::Ambiguity { alternatives }
    }

    fn report_attempting_full_context(&self, conflicting_alternatives: BTreeSet<usize>) -> Diagnostic {
        Diagnostic::FullContextAttempt {
            alternatives: conflicting_alternatives,
        }
    }

    fn report_context_sensitivity(
        &self,
        start_index: usize,
        stop_index: usize,
        prediction: usize,
    ) -> Diagnostic {
        Diagnostic::ContextSensitivity {
            start_index,
            stop_index,
            prediction,
        }
    }
}

/// Listener that promotes every anomaly to a terminating diagnostic as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFastListener;

impl DiagnosticListener for FailFastListener {}

/// Wraps another listener and logs each anomaly before it is raised.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener<L>(pub L);

impl<L: DiagnosticListener> DiagnosticListener for TracingListener<L> {
    fn syntax_error(&self, line: usize, column: usize, message: String, span: Span) -> Diagnostic {
        tracing::debug!(line, column, %message, "syntax error");
        self.0.syntax_error(line, column, message, span)
    }

    fn report_ambiguity(&self, alternatives: BTreeSet<usize>) -> Diagnostic {
        tracing::debug!(?alternatives, "ambiguity");
        self.0.report_ambiguity(alternatives)
    }

    fn report_attempting_full_context(&self, conflicting_alternatives: BTreeSet<usize>) -> Diagnostic {
        tracing::debug!(?conflicting_alternatives, "attempting full context");
        self.0.report_attempting_full_context(conflicting_alternatives)
    }

    fn report_context_sensitivity(
        &self,
        start_index: usize,
        stop_index: usize,
        prediction: usize,
    ) -> Diagnostic {
        tracing::debug!(start_index, stop_index, prediction, "context sensitivity");
        self.0
            .report_context_sensitivity(start_index, stop_index, prediction)
    }
}
