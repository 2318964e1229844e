//! Document Storage subsystem for tetradb
//!
//! Vocabulary of the document-oriented backend and the narrow interface the
//! planner and iterators talk to it through. The backend's read/write/index
//! implementation lives behind the `Backend` trait; this crate only plans
//! against it.
//!
//! # Design Principles
//!
//! - Nodes and quads live in two named collections
//! - Field filters within one query are conjunctive (AND), never OR
//! - Configuration is passed explicitly, never read from ambient state
//! - The store handle owns nothing but the backend and its options

mod document;
mod errors;
mod store;

pub use document::{
    fields, value_path, Document, FieldFilter, FieldValue, FilterOp, Linkage, COLLECTION_NODES,
    COLLECTION_QUADS,
};
pub use errors::{StorageError, StorageResult};
pub use store::{Backend, DocCursor, DocStore, StoreOptions};
