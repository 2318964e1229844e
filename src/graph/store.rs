//! Store handle seen by the execution engine
//!
//! The engine hands shapes an opaque store when building iterators; a
//! backend-specific shape recovers its concrete store by downcasting. A
//! failed downcast is reported through the iterator's result stream, never
//! as a panic.

use std::any::Any;

/// Narrow handle to a quad store implementation.
///
/// Backend-specific shapes call `as_any` to recover the concrete store
/// they were planned for.
pub trait QuadStore: Any {
    /// The store as `Any`, for downcasting to a concrete store type.
    fn as_any(&self) -> &dyn Any;
}
