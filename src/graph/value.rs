//! Typed graph values
//!
//! A `Value` is the unresolved form of a graph node: what a query talks
//! about before node identities are interned. IRIs, blank nodes and plain
//! literals share the same string value space and are told apart by kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A typed graph value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// An IRI reference
    Iri(String),
    /// A blank node label
    BNode(String),
    /// A plain string literal
    Literal(String),
    /// A literal with an explicit datatype IRI
    TypedLiteral {
        value: String,
        datatype: String,
    },
    /// A language-tagged literal
    LangLiteral {
        value: String,
        lang: String,
    },
    /// A signed 64-bit integer literal
    Int(i64),
    /// A 64-bit float literal
    Float(f64),
    /// A timestamp literal
    Time(DateTime<Utc>),
}

impl Value {
    /// Creates an IRI value
    pub fn iri(s: impl Into<String>) -> Self {
        Value::Iri(s.into())
    }

    /// Creates a blank node value
    pub fn bnode(s: impl Into<String>) -> Self {
        Value::BNode(s.into())
    }

    /// Creates a plain literal value
    pub fn literal(s: impl Into<String>) -> Self {
        Value::Literal(s.into())
    }

    /// Returns true for IRI and blank node values (references rather than
    /// literal data)
    pub fn is_ref(&self) -> bool {
        matches!(self, Value::Iri(_) | Value::BNode(_))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Literal(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Literal(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Time(v)
    }
}
