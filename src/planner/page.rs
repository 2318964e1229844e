//! Pagination rule
//!
//! Only the "limit with no skip" form is pushed down; skip/limit
//! composition is not re-derived here, so any non-zero skip passes
//! through untouched.

use super::plan::Scan;
use crate::shape::Shape;
use crate::storage::COLLECTION_NODES;

/// Folds a page into its source where the source is the unconstrained
/// node set or an already-rewritten backend plan.
pub(super) fn optimize_page(from: Shape, skip: u64, limit: u64) -> (Shape, bool) {
    if skip != 0 {
        return (
            Shape::Page {
                from: Box::new(from),
                skip,
                limit,
            },
            false,
        );
    }
    match from {
        Shape::AllNodes => {
            let mut scan = Scan::new(COLLECTION_NODES, Vec::new());
            scan.limit = limit;
            (Shape::Scan(scan), true)
        }
        Shape::Scan(mut scan) => {
            scan.merge_limit(limit);
            (Shape::Scan(scan), true)
        }
        Shape::Links(mut links) => {
            links.merge_limit(limit);
            (Shape::Links(links), true)
        }
        other => (
            Shape::Page {
                from: Box::new(other),
                skip,
                limit,
            },
            false,
        ),
    }
}
