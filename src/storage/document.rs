//! Document model of the backend
//!
//! Nodes and quads are stored in two collections. A node document keeps its
//! value in a nested sub-document: the raw string data, kind flags telling
//! IRIs and blank nodes apart from plain literals, native numeric and time
//! fields, and an auxiliary string holding the sortable integer encoding
//! for backends whose native numeric index is narrower than i64. A quad
//! document holds one node hash per direction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::graph::{Direction, NodeRef};

/// Collection holding one document per node
pub const COLLECTION_NODES: &str = "nodes";

/// Collection holding one document per quad
pub const COLLECTION_QUADS: &str = "quads";

/// Field names inside a node document
pub mod fields {
    /// Sub-document holding the node's value
    pub const VALUE: &str = "val";
    /// Raw string data of the value
    pub const DATA: &str = "str";
    /// Set to true when the value is an IRI
    pub const IRI: &str = "iri";
    /// Set to true when the value is a blank node
    pub const BNODE: &str = "bnode";
    /// Native integer value
    pub const INT: &str = "int";
    /// Native float value
    pub const FLOAT: &str = "float";
    /// Native time value
    pub const TIME: &str = "ts";
    /// Sortable string encoding of the integer value
    pub const INT_SORT: &str = "int_str";
}

/// Path of a value field inside a node document
pub fn value_path(field: &str) -> Vec<String> {
    vec![fields::VALUE.to_string(), field.to_string()]
}

/// A document as returned by the backend
pub type Document = serde_json::Value;

/// Comparison operators understood by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    Equal,
    NotEqual,
    GT,
    GTE,
    LT,
    LTE,
    Regexp,
}

/// A scalar operand of a field filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Time(DateTime<Utc>),
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(v: DateTime<Utc>) -> Self {
        FieldValue::Time(v)
    }
}

impl From<&NodeRef> for FieldValue {
    fn from(v: &NodeRef) -> Self {
        FieldValue::String(v.as_str().to_string())
    }
}

/// A single comparison constraint on a possibly nested document field.
///
/// Filters handed to the backend together are conjunctive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFilter {
    /// Field-name segments locating the field
    pub path: Vec<String>,
    /// Comparison operator
    pub op: FilterOp,
    /// Operand
    pub value: FieldValue,
}

impl FieldFilter {
    /// Creates a filter over a nested field path
    pub fn new(path: Vec<String>, op: FilterOp, value: impl Into<FieldValue>) -> Self {
        Self {
            path,
            op,
            value: value.into(),
        }
    }
}

/// A direction plus a resolved node, used to look up quads directly
/// instead of scanning and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Linkage {
    /// Quad position to match
    pub dir: Direction,
    /// Node that must occupy the position
    pub node: NodeRef,
}

impl Linkage {
    /// Lowers the linkage to an equality filter on the quads collection
    pub fn field_filter(&self) -> FieldFilter {
        FieldFilter {
            path: vec![self.dir.field_name().to_string()],
            op: FilterOp::Equal,
            value: FieldValue::from(&self.node),
        }
    }
}
