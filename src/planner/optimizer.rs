//! Shape dispatch
//!
//! The store's optimizer capability: identify the shape variant and hand
//! it to the matching rule. Variants no rule recognizes pass through
//! unchanged; the engine falls back to generic evaluation for those.

use tracing::debug;

use super::{filters, links, page};
use crate::shape::{Shape, ShapeOptimizer};
use crate::storage::DocStore;

// DocStore must keep providing the optimizer capability.
const _: fn(&DocStore) -> &dyn ShapeOptimizer = |qs| qs;

impl ShapeOptimizer for DocStore {
    fn optimize_shape(&self, shape: Shape) -> (Shape, bool) {
        match shape {
            Shape::Quads(pattern) => {
                let (shape, changed) = links::optimize_quads(pattern);
                if changed {
                    debug!("quad pattern rewritten to direct link lookup");
                }
                (shape, changed)
            }
            Shape::Filter { from, filters } => {
                let (shape, changed) = filters::optimize_filter(*from, filters, self.options());
                if changed {
                    debug!("value filter pushed down to nodes scan");
                }
                (shape, changed)
            }
            Shape::Page { from, skip, limit } => {
                let (shape, changed) = page::optimize_page(*from, skip, limit);
                if changed {
                    debug!(limit, "page folded into backend plan");
                }
                (shape, changed)
            }
            Shape::Composite(composite) => {
                let (simplified, changed) = self.optimize_shape(composite.simplify());
                if changed {
                    (simplified, true)
                } else {
                    (Shape::Composite(composite), false)
                }
            }
            other => (other, false),
        }
    }
}
