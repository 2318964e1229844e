//! Query shape algebra for tetradb
//!
//! Backend-independent description of a set of graph elements to retrieve.
//! The variant set is closed and centrally enumerated: adding a variant is
//! a compile-time exercise, and every consumer matches exhaustively.
//!
//! # Design Principles
//!
//! - Shapes are immutable values; rewrites build new shapes
//! - Combinators with no backend counterpart expose `simplify`
//! - Optimizers rewrite conservatively: decline rather than guess

mod filter;
mod shape;

pub use filter::{CompareOp, PatternError, RegexpFilter, ValueFilter, Wildcard};
pub use shape::{Composite, QuadFilter, Shape, ShapeOptimizer};
