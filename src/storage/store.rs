//! Store handle and backend interface

use std::any::Any;

use serde::{Deserialize, Serialize};

use super::document::{Document, FieldFilter};
use super::errors::StorageResult;
use crate::graph::QuadStore;

/// Store configuration.
///
/// Passed explicitly into every rule that needs it so the rules stay pure
/// and independently testable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    /// The backend's native numeric index is only 32 bits wide; integer
    /// comparisons outside that range go through the sortable string field.
    #[serde(default)]
    pub int32_index: bool,
}

/// Read-side interface of the document backend.
///
/// Implementations translate a conjunction of field filters into whatever
/// index machinery they have; this crate never sees more than a cursor.
pub trait Backend: Send + Sync {
    /// Opens a cursor over one collection, restricted by conjunctive
    /// filters. A limit of 0 means unlimited.
    fn find(
        &self,
        collection: &str,
        filters: &[FieldFilter],
        limit: u64,
    ) -> StorageResult<Box<dyn DocCursor + '_>>;
}

/// A cursor over backend documents.
pub trait DocCursor {
    /// Advances the cursor. `None` means exhausted.
    fn next_doc(&mut self) -> Option<StorageResult<Document>>;
}

/// A quad store persisted in a document backend.
///
/// Holds the backend handle and the options the planner consults; quad
/// CRUD and node interning live elsewhere.
pub struct DocStore {
    backend: Box<dyn Backend>,
    options: StoreOptions,
}

impl DocStore {
    /// Creates a store over the given backend
    pub fn new(backend: Box<dyn Backend>, options: StoreOptions) -> Self {
        Self { backend, options }
    }

    /// Returns the store configuration
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Returns the backend read interface
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }
}

impl QuadStore for DocStore {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
