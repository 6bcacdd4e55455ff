pub mod error;
pub mod listener;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;
pub mod tree;

// Re-export the parser and rule enum for external use
pub use parser::ExpressionParser;
pub use parser::Rule;
pub use parser::{
    DEFAULT_MAX_DEPTH, FrontEnd, ParserOptions, PestFrontEnd, parse, parse_with_listener,
    parse_with_options,
};

pub use error::{Diagnostic, TreeShapeError};
pub use listener::{DiagnosticListener, FailFastListener, TracingListener};
pub use syntax::{AdditiveOp, BinaryOp, MultiplicativeOp, Span};
pub use tree::{Expression, Factor, Start, Term};


#[cfg(test)]
mod rule_valid_test;
