//! Comparison translation and the value-filter rule
//!
//! Comparisons over typed graph values become conjunctive field filters on
//! node documents. Literals, IRIs and blank nodes share one string value
//! space in the data field and are told apart by the kind flags, so string
//! comparisons carry flag filters alongside the data filter.

use super::plan::Scan;
use super::sortint;
use crate::graph::Value;
use crate::shape::{CompareOp, Shape, ValueFilter};
use crate::storage::{
    fields, value_path, FieldFilter, FieldValue, FilterOp, StoreOptions, COLLECTION_NODES,
};

/// Translates one comparison into backend field filters.
///
/// `None` means the comparison cannot be pushed to the backend and must
/// stay behind as a residual predicate. Pure function; the only
/// configuration it sees is the explicitly passed options.
pub fn field_filters(op: CompareOp, val: &Value, opts: &StoreOptions) -> Option<Vec<FieldFilter>> {
    let op = match op {
        CompareOp::Eq => FilterOp::Equal,
        CompareOp::Neq => FilterOp::NotEqual,
        CompareOp::Gt => FilterOp::GT,
        CompareOp::Gte => FilterOp::GTE,
        CompareOp::Lt => FilterOp::LT,
        CompareOp::Lte => FilterOp::LTE,
    };

    let filters = match val {
        Value::Literal(s) => vec![
            FieldFilter::new(value_path(fields::DATA), op, s.as_str()),
            FieldFilter::new(value_path(fields::IRI), FilterOp::NotEqual, true),
            FieldFilter::new(value_path(fields::BNODE), FilterOp::NotEqual, true),
        ],
        Value::Iri(s) => vec![
            FieldFilter::new(value_path(fields::DATA), op, s.as_str()),
            FieldFilter::new(value_path(fields::IRI), FilterOp::Equal, true),
        ],
        Value::BNode(s) => vec![
            FieldFilter::new(value_path(fields::DATA), op, s.as_str()),
            FieldFilter::new(value_path(fields::BNODE), FilterOp::Equal, true),
        ],
        Value::Int(v) => {
            if opts.int32_index && (*v < i64::from(i32::MIN) || *v > i64::from(i32::MAX)) {
                // native index too narrow; compare on the sortable string
                vec![FieldFilter::new(
                    value_path(fields::INT_SORT),
                    op,
                    sortint::encode(*v),
                )]
            } else {
                vec![FieldFilter::new(value_path(fields::INT), op, *v)]
            }
        }
        Value::Float(v) => vec![FieldFilter::new(value_path(fields::FLOAT), op, *v)],
        Value::Time(t) => vec![FieldFilter::new(value_path(fields::TIME), op, *t)],
        // typed and language-tagged literals have no indexed form
        Value::TypedLiteral { .. } | Value::LangLiteral { .. } => return None,
    };
    Some(filters)
}

/// Rewrites a value filter over the unconstrained node set into a nodes
/// scan. Any other source is left untouched: the rule only fires at the
/// base of a filter chain.
pub(super) fn optimize_filter(
    from: Shape,
    predicates: Vec<ValueFilter>,
    opts: &StoreOptions,
) -> (Shape, bool) {
    if from != Shape::AllNodes {
        return (
            Shape::Filter {
                from: Box::new(from),
                filters: predicates,
            },
            false,
        );
    }

    let mut filters = Vec::new();
    let mut residual = Vec::new();
    for predicate in predicates {
        match predicate {
            ValueFilter::Comparison { op, val } => match field_filters(op, &val, opts) {
                Some(fs) => filters.extend(fs),
                None => residual.push(ValueFilter::Comparison { op, val }),
            },
            ValueFilter::Wildcard(w) => {
                filters.push(FieldFilter::new(
                    value_path(fields::DATA),
                    FilterOp::Regexp,
                    w.regexp(),
                ));
            }
            ValueFilter::Regexp(re) => {
                filters.push(FieldFilter::new(
                    value_path(fields::DATA),
                    FilterOp::Regexp,
                    re.pattern(),
                ));
                if !re.refs() {
                    filters.push(FieldFilter::new(
                        value_path(fields::IRI),
                        FilterOp::NotEqual,
                        true,
                    ));
                    filters.push(FieldFilter::new(
                        value_path(fields::BNODE),
                        FilterOp::NotEqual,
                        true,
                    ));
                }
            }
        }
    }

    if filters.is_empty() {
        return (
            Shape::Filter {
                from: Box::new(Shape::AllNodes),
                filters: residual,
            },
            false,
        );
    }

    let mut rewritten = Shape::Scan(Scan::new(COLLECTION_NODES, filters));
    if !residual.is_empty() {
        rewritten = Shape::Filter {
            from: Box::new(rewritten),
            filters: residual,
        };
    }
    (rewritten, true)
}
