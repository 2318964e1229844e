//! Resolved node references

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque, resolved node identity.
///
/// The value is the hash string under which the node's document is stored;
/// hashing and interning happen in the write path, outside this crate. A
/// `NodeRef` stands for an already-resolved node, as opposed to a nested
/// sub-query that still has to produce candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef(String);

impl NodeRef {
    /// Wraps an existing node hash
    pub fn new(hash: impl Into<String>) -> Self {
        NodeRef(hash.into())
    }

    /// Returns the underlying hash string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
