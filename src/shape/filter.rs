//! Value-filter predicates
//!
//! Predicates restrict the values flowing out of a shape. A comparison
//! carries an abstract operator and a typed graph value; wildcard and
//! regexp predicates restrict the raw string data.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::Value;

/// Abstract comparison operators over graph values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

/// A regexp predicate failed to compile
#[derive(Debug, Clone, Error)]
#[error("invalid value-filter pattern: {0}")]
pub struct PatternError(#[from] regex::Error);

/// A glob pattern over string data: `*` matches any sequence, `?` matches
/// a single character, everything else is literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wildcard {
    pattern: String,
}

impl Wildcard {
    /// Creates a wildcard predicate
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Returns the glob pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The anchored regular expression equivalent to this glob
    pub fn regexp(&self) -> String {
        let mut re = String::with_capacity(self.pattern.len() + 2);
        re.push('^');
        for ch in self.pattern.chars() {
            match ch {
                '*' => re.push_str(".*"),
                '?' => re.push('.'),
                _ => re.push_str(&regex::escape(&ch.to_string())),
            }
        }
        re.push('$');
        re
    }
}

/// A regular-expression predicate over string data.
///
/// The pattern is validated on construction and kept as source text so
/// shapes stay comparable. With `refs` unset the predicate applies to
/// literal values only; with it set, IRIs and blank nodes may match too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexpFilter {
    pattern: String,
    refs: bool,
}

impl RegexpFilter {
    /// Compiles and wraps a pattern; `refs` permits matching references
    pub fn new(pattern: impl Into<String>, refs: bool) -> Result<Self, PatternError> {
        let pattern = pattern.into();
        Regex::new(&pattern)?;
        Ok(Self { pattern, refs })
    }

    /// Returns the pattern source
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true when references are allowed to match
    pub fn refs(&self) -> bool {
        self.refs
    }
}

/// A predicate over the values produced by a shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValueFilter {
    /// Operator + typed value comparison
    Comparison { op: CompareOp, val: Value },
    /// Glob over string data
    Wildcard(Wildcard),
    /// Regular expression over string data
    Regexp(RegexpFilter),
}

impl ValueFilter {
    /// Creates a comparison predicate
    pub fn compare(op: CompareOp, val: impl Into<Value>) -> Self {
        ValueFilter::Comparison {
            op,
            val: val.into(),
        }
    }

    /// Creates an equality predicate
    pub fn eq(val: impl Into<Value>) -> Self {
        Self::compare(CompareOp::Eq, val)
    }
}
