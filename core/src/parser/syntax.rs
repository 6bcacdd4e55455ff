// Common syntax structures shared by the parse tree, diagnostics and evaluator.

use core::{fmt, ops::Range};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }
    pub fn start(&self) -> usize {
        self.0.start
    }
    pub fn end(&self) -> usize {
        self.0.end
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.0.start, self.0.end)
    }
}

/// Operators allowed between the terms of an `Expression`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AdditiveOp {
    Add,
    Sub,
}

/// Operators allowed between the factors of a `Term`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MultiplicativeOp {
    Mul,
}

/// Every binary operator, regardless of precedence level.
///
/// Used where the level no longer matters, e.g. when reporting overflow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<AdditiveOp> for BinaryOp {
    fn from(op: AdditiveOp) -> Self {
        match op {
            AdditiveOp::Add => BinaryOp::Add,
            AdditiveOp::Sub => BinaryOp::Sub,
        }
    }
}

impl From<MultiplicativeOp> for BinaryOp {
    fn from(op: MultiplicativeOp) -> Self {
        match op {
            MultiplicativeOp::Mul => BinaryOp::Mul,
        }
    }
}

impl fmt::Display for AdditiveOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        BinaryOp::from(*self).fmt(f)
    }
}

impl fmt::Display for MultiplicativeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        BinaryOp::from(*self).fmt(f)
    }
}
