//! The shape variant set and the optimizer capability

use serde::{Deserialize, Serialize};

use super::filter::{CompareOp, ValueFilter};
use crate::graph::{Direction, NodeRef, Value};
use crate::planner::{Links, Scan};

/// A node in the query-plan algebra.
///
/// `Scan` and `Links` are the two backend-specific variants; everything
/// else is backend-independent. The optimizer rewrites the latter into the
/// former where it can prove equivalence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Every node in the store, unconstrained
    AllNodes,
    /// An already-resolved set of nodes
    Fixed(Vec<NodeRef>),
    /// Values from `from`, restricted by conjunctive predicates
    Filter {
        from: Box<Shape>,
        filters: Vec<ValueFilter>,
    },
    /// A window over `from`: drop `skip` rows, then yield at most `limit`
    /// (0 = unlimited)
    Page {
        from: Box<Shape>,
        skip: u64,
        limit: u64,
    },
    /// Quads whose positions are restricted per direction
    Quads(Vec<QuadFilter>),
    /// Values present in every member shape
    Intersect(Vec<Shape>),
    /// A combinator with no backend counterpart; reduces to primitives
    /// through `Composite::simplify`
    Composite(Composite),
    /// Backend: a filtered scan over one collection
    Scan(Scan),
    /// Backend: a direction-keyed quad lookup
    Links(Links),
}

impl Shape {
    /// The single resolved node this shape stands for, if it is a
    /// one-element `Fixed` set. Sub-queries return `None`.
    pub fn single_ref(&self) -> Option<&NodeRef> {
        match self {
            Shape::Fixed(refs) if refs.len() == 1 => refs.first(),
            _ => None,
        }
    }
}

/// Restriction of one quad direction to the values of a shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadFilter {
    /// Position being restricted
    pub dir: Direction,
    /// Shape producing the candidate values
    pub values: Box<Shape>,
}

/// Combinators that exist for query-construction convenience only; each
/// one rewrites itself into primitive shapes before optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Composite {
    /// The first `limit` values of `from`
    Head { from: Box<Shape>, limit: u64 },
    /// Nodes equal to one exact value
    ValueLookup(Value),
}

impl Composite {
    /// Rewrites the combinator into primitive shapes
    pub fn simplify(&self) -> Shape {
        match self {
            Composite::Head { from, limit } => Shape::Page {
                from: from.clone(),
                skip: 0,
                limit: *limit,
            },
            Composite::ValueLookup(val) => Shape::Filter {
                from: Box::new(Shape::AllNodes),
                filters: vec![ValueFilter::Comparison {
                    op: CompareOp::Eq,
                    val: val.clone(),
                }],
            },
        }
    }
}

/// Capability of rewriting shapes into backend-specific ones.
///
/// Returns the possibly-rewritten shape and whether anything changed.
/// Implementations must be conservative: a shape they cannot improve comes
/// back unchanged with `false`, never as an error.
pub trait ShapeOptimizer {
    fn optimize_shape(&self, shape: Shape) -> (Shape, bool);
}
