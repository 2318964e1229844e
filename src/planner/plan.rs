//! Backend query plans
//!
//! The two shapes the planner produces: a filtered scan over one
//! collection, and a direct quad lookup keyed by directions. Both are
//! immutable plan values; the execution engine turns them into iterators
//! through `build_iterator`.

use serde::{Deserialize, Serialize};

use crate::executor::{ErrorIterator, ExecutorError, LinksIterator, QuadIterator, ScanIterator};
use crate::graph::QuadStore;
use crate::storage::{DocStore, FieldFilter, Linkage};

/// A documents query: one collection, conjunctive filters, optional limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scan {
    /// Name of the collection
    pub collection: String,
    /// Filters selecting documents, conjoined
    pub filters: Vec<FieldFilter>,
    /// Maximum number of documents; 0 = unlimited
    pub limit: u64,
}

impl Scan {
    /// Creates a filtered scan with no limit
    pub fn new(collection: impl Into<String>, filters: Vec<FieldFilter>) -> Self {
        Self {
            collection: collection.into(),
            filters,
            limit: 0,
        }
    }

    /// Folds a page limit (skip already proven 0) into this plan; the
    /// more restrictive positive limit wins
    pub fn merge_limit(&mut self, limit: u64) {
        self.limit = merge_limits(self.limit, limit);
    }

    /// Builds the iterator handle for this plan. A store of the wrong
    /// type yields an iterator that fails through its result stream.
    pub fn build_iterator<'a>(&self, qs: &'a dyn QuadStore) -> Box<dyn QuadIterator + 'a> {
        match qs.as_any().downcast_ref::<DocStore>() {
            Some(store) => Box::new(ScanIterator::new(
                store,
                self.collection.clone(),
                self.filters.clone(),
                self.limit,
            )),
            None => Box::new(ErrorIterator::new(ExecutorError::store_mismatch())),
        }
    }
}

/// A quads query answered by direct lookup: every linkage pins one
/// direction to a resolved node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Links {
    /// Direction restrictions, conjoined
    pub links: Vec<Linkage>,
    /// Maximum number of quads; 0 = unlimited
    pub limit: u64,
}

impl Links {
    /// Creates a link lookup with no limit
    pub fn new(links: Vec<Linkage>) -> Self {
        Self { links, limit: 0 }
    }

    /// Folds a page limit (skip already proven 0) into this plan; the
    /// more restrictive positive limit wins
    pub fn merge_limit(&mut self, limit: u64) {
        self.limit = merge_limits(self.limit, limit);
    }

    /// Builds the iterator handle for this plan. A store of the wrong
    /// type yields an iterator that fails through its result stream.
    pub fn build_iterator<'a>(&self, qs: &'a dyn QuadStore) -> Box<dyn QuadIterator + 'a> {
        match qs.as_any().downcast_ref::<DocStore>() {
            Some(store) => Box::new(LinksIterator::new(store, self.links.clone(), self.limit)),
            None => Box::new(ErrorIterator::new(ExecutorError::store_mismatch())),
        }
    }
}

/// Combines an existing limit with a newly applied one. 0 means
/// unlimited and never wins over a positive limit.
fn merge_limits(existing: u64, applied: u64) -> u64 {
    match (existing, applied) {
        (0, n) => n,
        (e, 0) => e,
        (e, n) => e.min(n),
    }
}
