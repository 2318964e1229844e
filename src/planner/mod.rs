//! Query Planner subsystem for tetradb
//!
//! The planner rewrites backend-independent shapes into document-backend
//! queries: scans over named collections with conjunctive field filters,
//! and direction-keyed link lookups. Rewriting is rule-based and purely
//! syntax-directed; there is no cost model.
//!
//! # Design Principles
//!
//! - Semantics-preserving: a rewritten shape yields the same result set
//!   as the original (order excluded)
//! - Residuals over guesses: a predicate a rule cannot prove equivalent
//!   stays behind as a post-filter, it is never dropped
//! - Conservative fallback: a shape no rule recognizes passes through
//!   unchanged, which is always safe because the engine can evaluate the
//!   original shape generically
//! - Pure rules: every rule is a synchronous function of its inputs; the
//!   store contributes nothing but configuration

mod errors;
mod filters;
mod links;
mod optimizer;
mod page;
mod plan;
mod sortint;

pub use errors::SortKeyError;
pub use filters::field_filters;
pub use plan::{Links, Scan};
pub use sortint::{decode, encode, SORT_KEY_LEN};
