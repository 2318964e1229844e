//! Quad-link extraction rule
//!
//! A quad pattern restricts each direction to the values of some shape.
//! When a restriction is a single already-resolved node, the backend can
//! answer it by direct lookup instead of scan-and-filter; restrictions
//! that are real sub-queries stay behind as residuals.

use super::plan::Links;
use crate::shape::{QuadFilter, Shape};
use crate::storage::Linkage;

/// Converts singleton resolved restrictions into linkages. Residual
/// restrictions are intersected back on top of the lookup.
pub(super) fn optimize_quads(pattern: Vec<QuadFilter>) -> (Shape, bool) {
    let mut links = Vec::new();
    let mut residual = Vec::new();
    for restriction in pattern {
        match restriction.values.single_ref().cloned() {
            Some(node) => links.push(Linkage {
                dir: restriction.dir,
                node,
            }),
            None => residual.push(restriction),
        }
    }

    if links.is_empty() {
        return (Shape::Quads(residual), false);
    }

    let lookup = Shape::Links(Links::new(links));
    let rewritten = if residual.is_empty() {
        lookup
    } else {
        Shape::Intersect(vec![lookup, Shape::Quads(residual)])
    };
    (rewritten, true)
}
