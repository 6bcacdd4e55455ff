//! Textual deny-list check on raw input.
//!
//! The guard looks for literal substrings associated with code-execution
//! primitives (`eval`, `exec`) and rejects any input that contains one. It is
//! a compatibility check, not a sandbox: it inspects text, not structure, and
//! the evaluator only ever runs grammar-constrained arithmetic anyway.

use thiserror::Error;

use crate::{String, ToString, Vec};

/// Substrings rejected by [`InputGuard::default`].
pub const DEFAULT_DENY_LIST: &[&str] = &["eval", "exec"];

/// Raw input contained a deny-listed substring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsafe expression: contains a call to '{pattern}'")]
pub struct SecurityViolation {
    /// The rejected input.
    pub text: String,
    /// The deny-listed substring that was found.
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputGuard {
    deny_list: Vec<String>,
}

impl Default for InputGuard {
    fn default() -> Self {
        Self::new(DEFAULT_DENY_LIST.iter().copied())
    }
}

impl InputGuard {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            deny_list: patterns
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    /// Guard that accepts everything.
    pub fn disabled() -> Self {
        Self {
            deny_list: Vec::new(),
        }
    }

    pub fn deny_list(&self) -> &[String] {
        &self.deny_list
    }

    pub fn is_disabled(&self) -> bool {
        self.deny_list.is_empty()
    }

    /// Fails on the first deny-listed substring found in `text`.
    ///
    /// Matching is case-sensitive; patterns are tried in deny-list order.
    pub fn validate(&self, text: &str) -> Result<(), SecurityViolation> {
        match self.deny_list.iter().find(|p| text.contains(p.as_str())) {
            Some(pattern) => {
                tracing::warn!(%pattern, "input rejected by deny list");
                Err(SecurityViolation {
                    text: text.to_string(),
                    pattern: pattern.clone(),
                })
            }
            None => Ok(()),
        }
    }
}
