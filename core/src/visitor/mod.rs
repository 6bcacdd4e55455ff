//! Side-effect traversal of parse trees.
//!
//! [`walk`] visits a finished [`Start`] tree depth first, in source order, and
//! notifies a [`TreeListener`] when it enters and leaves each node. Listeners
//! only observe; nothing they do can change an evaluation result.

use core::fmt;

use crate::parser::{Expression, Factor, Span, Start, Term};
use crate::{String, ToString, Vec};

/// Receives enter/exit notifications from [`walk`].
///
/// All methods default to doing nothing, so implementors override only the
/// events they care about.
pub trait TreeListener {
    fn enter_start(&mut self, _node: &Start) {}
    fn exit_start(&mut self, _node: &Start) {}
    fn enter_expression(&mut self, _node: &Expression) {}
    fn exit_expression(&mut self, _node: &Expression) {}
    fn enter_term(&mut self, _node: &Term) {}
    fn exit_term(&mut self, _node: &Term) {}
    fn enter_factor(&mut self, _node: &Factor) {}
    fn exit_factor(&mut self, _node: &Factor) {}
}

/// Walk `tree` depth first, notifying `listener`.
pub fn walk(tree: &Start, listener: &mut dyn TreeListener) {
    listener.enter_start(tree);
    walk_expression(&tree.expression, listener);
    listener.exit_start(tree);
}

fn walk_expression(node: &Expression, listener: &mut dyn TreeListener) {
    listener.enter_expression(node);
    for term in node.terms() {
        walk_term(term, listener);
    }
    listener.exit_expression(node);
}

fn walk_term(node: &Term, listener: &mut dyn TreeListener) {
    listener.enter_term(node);
    for factor in node.factors() {
        walk_factor(factor, listener);
    }
    listener.exit_term(node);
}

fn walk_factor(node: &Factor, listener: &mut dyn TreeListener) {
    listener.enter_factor(node);
    if let Factor::Grouped { expression, .. } = node {
        walk_expression(expression, listener);
    }
    listener.exit_factor(node);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Start,
    Expression,
    Term,
    Factor,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Enter => write!(f, "enter"),
            Phase::Exit => write!(f, "exit"),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Start => write!(f, "start"),
            NodeKind::Expression => write!(f, "expression"),
            NodeKind::Term => write!(f, "term"),
            NodeKind::Factor => write!(f, "factor"),
        }
    }
}

/// One notification recorded by [`RecordingListener`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEvent {
    pub phase: Phase,
    pub node: NodeKind,
    pub span: Span,
}

impl WalkEvent {
    /// Render the event with the source text the node covers.
    pub fn describe(&self, source: &str) -> String {
        let mut out = self.phase.to_string();
        out.push(' ');
        out.push_str(&self.node.to_string());
        out.push_str(": ");
        out.push_str(source.get(self.span.0.clone()).unwrap_or_default());
        out
    }
}

/// Collects every notification in order.
#[derive(Debug, Default)]
pub struct RecordingListener {
    pub events: Vec<WalkEvent>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, phase: Phase, node: NodeKind, span: &Span) {
        self.events.push(WalkEvent {
            phase,
            node,
            span: span.clone(),
        });
    }
}

impl TreeListener for RecordingListener {
    fn enter_start(&mut self, node: &Start) {
        self.record(Phase::Enter, NodeKind::Start, &node.span);
    }
    fn exit_start(&mut self, node: &Start) {
        self.record(Phase::Exit, NodeKind::Start, &node.span);
    }
    fn enter_expression(&mut self, node: &Expression) {
        self.record(Phase::Enter, NodeKind::Expression, node.span());
    }
    fn exit_expression(&mut self, node: &Expression) {
        self.record(Phase::Exit, NodeKind::Expression, node.span());
    }
    fn enter_term(&mut self, node: &Term) {
        self.record(Phase::Enter, NodeKind::Term, node.span());
    }
    fn exit_term(&mut self, node: &Term) {
        self.record(Phase::Exit, NodeKind::Term, node.span());
    }
    fn enter_factor(&mut self, node: &Factor) {
        self.record(Phase::Enter, NodeKind::Factor, node.span());
    }
    fn exit_factor(&mut self, node: &Factor) {
        self.record(Phase::Exit, NodeKind::Factor, node.span());
    }
}

/// Logs every notification at `trace` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceListener;

impl TreeListener for TraceListener {
    fn enter_start(&mut self, node: &Start) {
        tracing::trace!(span = %node.span, "enter start");
    }
    fn exit_start(&mut self, node: &Start) {
        tracing::trace!(span = %node.span, "exit start");
    }
    fn enter_expression(&mut self, node: &Expression) {
        tracing::trace!(span = %node.span(), terms = node.terms().len(), "enter expression");
    }
    fn exit_expression(&mut self, node: &Expression) {
        tracing::trace!(span = %node.span(), "exit expression");
    }
    fn enter_term(&mut self, node: &Term) {
        tracing::trace!(span = %node.span(), factors = node.factors().len(), "enter term");
    }
    fn exit_term(&mut self, node: &Term) {
        tracing::trace!(span = %node.span(), "exit term");
    }
    fn enter_factor(&mut self, node: &Factor) {
        tracing::trace!(span = %node.span(), "enter factor");
    }
    fn exit_factor(&mut self, node: &Factor) {
        tracing::trace!(span = %node.span(), "exit factor");
    }
}
