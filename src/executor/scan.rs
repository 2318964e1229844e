//! Collection scan and link lookup iterators
//!
//! Both handles open their backend cursor lazily on the first `next`, so
//! building an iterator never touches the backend. A backend failure is
//! reported once, then the stream ends.

use super::errors::ExecutorResult;
use super::iterator::QuadIterator;
use crate::storage::{DocCursor, DocStore, Document, FieldFilter, Linkage, COLLECTION_QUADS};

/// Streams the documents of one collection matching conjunctive filters.
pub struct ScanIterator<'a> {
    store: &'a DocStore,
    collection: String,
    filters: Vec<FieldFilter>,
    limit: u64,
    cursor: Option<Box<dyn DocCursor + 'a>>,
    failed: bool,
}

impl<'a> ScanIterator<'a> {
    /// Creates a scan over `collection`
    pub fn new(
        store: &'a DocStore,
        collection: impl Into<String>,
        filters: Vec<FieldFilter>,
        limit: u64,
    ) -> Self {
        Self {
            store,
            collection: collection.into(),
            filters,
            limit,
            cursor: None,
            failed: false,
        }
    }
}

impl QuadIterator for ScanIterator<'_> {
    fn next(&mut self) -> Option<ExecutorResult<Document>> {
        if self.failed {
            return None;
        }
        if self.cursor.is_none() {
            match self
                .store
                .backend()
                .find(&self.collection, &self.filters, self.limit)
            {
                Ok(cursor) => self.cursor = Some(cursor),
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err.into()));
                }
            }
        }
        match self.cursor.as_mut()?.next_doc() {
            Some(Ok(doc)) => Some(Ok(doc)),
            Some(Err(err)) => {
                self.failed = true;
                Some(Err(err.into()))
            }
            None => None,
        }
    }
}

/// Streams quads matched by direction-keyed lookup.
///
/// Each linkage lowers to an equality filter on the quads collection, so
/// the lookup is a scan the backend can answer from its direction
/// indexes.
pub struct LinksIterator<'a> {
    inner: ScanIterator<'a>,
}

impl<'a> LinksIterator<'a> {
    /// Creates a lookup for quads matching every linkage
    pub fn new(store: &'a DocStore, links: Vec<Linkage>, limit: u64) -> Self {
        let filters = links.iter().map(Linkage::field_filter).collect();
        Self {
            inner: ScanIterator::new(store, COLLECTION_QUADS, filters, limit),
        }
    }
}

impl QuadIterator for LinksIterator<'_> {
    fn next(&mut self) -> Option<ExecutorResult<Document>> {
        self.inner.next()
    }
}
