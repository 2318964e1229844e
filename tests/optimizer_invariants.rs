//! Optimizer Invariant Tests
//!
//! Tests for shape-rewrite invariants:
//! - Rewrites preserve query semantics; residual predicates are never dropped
//! - Re-optimizing a rewritten shape reports no change
//! - Rewritten plans drive the backend with the expected queries
//! - A store of the wrong type fails through the iterator stream, not a panic

use std::any::Any;
use std::sync::{Arc, Mutex};

use serde_json::json;

use tetradb::executor::{ExecutorErrorCode, QuadIterator};
use tetradb::graph::{Direction, NodeRef, QuadStore, Value};
use tetradb::planner::{encode, Links, Scan};
use tetradb::shape::{CompareOp, Composite, QuadFilter, Shape, ShapeOptimizer, ValueFilter};
use tetradb::storage::{
    fields, value_path, Backend, DocCursor, DocStore, Document, FieldFilter, FieldValue,
    FilterOp, Linkage, StorageResult, StoreOptions, COLLECTION_NODES, COLLECTION_QUADS,
};

// =============================================================================
// Helper Functions
// =============================================================================

/// One `find` call as seen by the backend
#[derive(Debug, Clone)]
struct SeenQuery {
    collection: String,
    filters: Vec<FieldFilter>,
    limit: u64,
}

/// In-memory backend that records every query and replays canned documents
struct MemBackend {
    docs: Vec<Document>,
    seen: Arc<Mutex<Vec<SeenQuery>>>,
}

impl Backend for MemBackend {
    fn find(
        &self,
        collection: &str,
        filters: &[FieldFilter],
        limit: u64,
    ) -> StorageResult<Box<dyn DocCursor + '_>> {
        self.seen.lock().unwrap().push(SeenQuery {
            collection: collection.to_string(),
            filters: filters.to_vec(),
            limit,
        });
        Ok(Box::new(VecCursor(self.docs.clone().into_iter())))
    }
}

struct VecCursor(std::vec::IntoIter<Document>);

impl DocCursor for VecCursor {
    fn next_doc(&mut self) -> Option<StorageResult<Document>> {
        self.0.next().map(Ok)
    }
}

/// A store that is not document-backed
struct OtherStore;

impl QuadStore for OtherStore {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn store_with(options: StoreOptions, docs: Vec<Document>) -> (DocStore, Arc<Mutex<Vec<SeenQuery>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let backend = MemBackend {
        docs,
        seen: Arc::clone(&seen),
    };
    (DocStore::new(Box::new(backend), options), seen)
}

fn store() -> (DocStore, Arc<Mutex<Vec<SeenQuery>>>) {
    store_with(StoreOptions::default(), Vec::new())
}

fn drain(it: &mut dyn QuadIterator) -> Vec<Document> {
    let mut docs = Vec::new();
    while let Some(item) = it.next() {
        docs.push(item.unwrap());
    }
    docs
}

// =============================================================================
// Rewrite Tests
// =============================================================================

/// A literal comparison over all nodes becomes a nodes scan with ref
/// exclusion flags.
#[test]
fn test_literal_filter_pushdown() {
    let (qs, _) = store();
    let shape = Shape::Filter {
        from: Box::new(Shape::AllNodes),
        filters: vec![ValueFilter::eq("hello")],
    };

    let (out, changed) = qs.optimize_shape(shape);
    assert!(changed);
    match out {
        Shape::Scan(scan) => {
            assert_eq!(scan.collection, COLLECTION_NODES);
            assert_eq!(
                scan.filters,
                vec![
                    FieldFilter::new(value_path(fields::DATA), FilterOp::Equal, "hello"),
                    FieldFilter::new(value_path(fields::IRI), FilterOp::NotEqual, true),
                    FieldFilter::new(value_path(fields::BNODE), FilterOp::NotEqual, true),
                ]
            );
        }
        other => panic!("expected a scan, got {:?}", other),
    }
}

/// An unsupported predicate survives as a residual filter wrapping the scan.
#[test]
fn test_residual_predicates_preserved() {
    let (qs, _) = store();
    let unsupported = ValueFilter::Comparison {
        op: CompareOp::Eq,
        val: Value::LangLiteral {
            value: "hej".to_string(),
            lang: "sv".to_string(),
        },
    };
    let shape = Shape::Filter {
        from: Box::new(Shape::AllNodes),
        filters: vec![ValueFilter::eq("hello"), unsupported.clone()],
    };

    let (out, changed) = qs.optimize_shape(shape);
    assert!(changed);
    match out {
        Shape::Filter { from, filters } => {
            assert_eq!(filters, vec![unsupported]);
            assert!(matches!(*from, Shape::Scan(_)));
        }
        other => panic!("expected a residual filter, got {:?}", other),
    }
}

/// A singleton resolved restriction converts to a direct link lookup.
#[test]
fn test_quad_pattern_to_links() {
    let (qs, _) = store();
    let h = NodeRef::new("h1");
    let shape = Shape::Quads(vec![QuadFilter {
        dir: Direction::Subject,
        values: Box::new(Shape::Fixed(vec![h.clone()])),
    }]);

    let (out, changed) = qs.optimize_shape(shape);
    assert!(changed);
    assert_eq!(
        out,
        Shape::Links(Links::new(vec![Linkage {
            dir: Direction::Subject,
            node: h,
        }]))
    );
}

/// A restriction with two candidates is never converted.
#[test]
fn test_multi_candidate_restriction_not_converted() {
    let (qs, _) = store();
    let shape = Shape::Quads(vec![QuadFilter {
        dir: Direction::Subject,
        values: Box::new(Shape::Fixed(vec![NodeRef::new("a"), NodeRef::new("b")])),
    }]);

    let (out, changed) = qs.optimize_shape(shape.clone());
    assert!(!changed);
    assert_eq!(out, shape);
}

/// A zero-skip page over all nodes becomes a limited nodes scan; a page
/// with a skip is left entirely alone.
#[test]
fn test_page_rewrites() {
    let (qs, _) = store();

    let (out, changed) = qs.optimize_shape(Shape::Page {
        from: Box::new(Shape::AllNodes),
        skip: 0,
        limit: 10,
    });
    assert!(changed);
    match out {
        Shape::Scan(scan) => {
            assert_eq!(scan.collection, COLLECTION_NODES);
            assert_eq!(scan.limit, 10);
        }
        other => panic!("expected a scan, got {:?}", other),
    }

    let skipped = Shape::Page {
        from: Box::new(Shape::AllNodes),
        skip: 5,
        limit: 10,
    };
    let (out, changed) = qs.optimize_shape(skipped.clone());
    assert!(!changed);
    assert_eq!(out, skipped);
}

/// Composites simplify and then run through the same optimizer.
#[test]
fn test_composite_head_end_to_end() {
    let (qs, _) = store();
    let shape = Shape::Composite(Composite::Head {
        from: Box::new(Shape::AllNodes),
        limit: 3,
    });

    let (out, changed) = qs.optimize_shape(shape);
    assert!(changed);
    match out {
        Shape::Scan(scan) => assert_eq!(scan.limit, 3),
        other => panic!("expected a scan, got {:?}", other),
    }
}

/// With the narrow numeric index configured, out-of-range integers
/// compare on the sortable string field.
#[test]
fn test_int32_option_switches_to_sort_key() {
    let (qs, _) = store_with(StoreOptions { int32_index: true }, Vec::new());
    let shape = Shape::Filter {
        from: Box::new(Shape::AllNodes),
        filters: vec![ValueFilter::compare(CompareOp::Gt, Value::Int(5_000_000_000))],
    };

    let (out, changed) = qs.optimize_shape(shape);
    assert!(changed);
    match out {
        Shape::Scan(scan) => {
            assert_eq!(
                scan.filters,
                vec![FieldFilter::new(
                    value_path(fields::INT_SORT),
                    FilterOp::GT,
                    encode(5_000_000_000),
                )]
            );
        }
        other => panic!("expected a scan, got {:?}", other),
    }
}

// =============================================================================
// Idempotence Tests
// =============================================================================

/// Optimizing an already-rewritten shape reports no change, so a driver
/// looping on the changed flag terminates.
#[test]
fn test_optimize_idempotent() {
    let (qs, _) = store();
    let inputs = vec![
        Shape::Filter {
            from: Box::new(Shape::AllNodes),
            filters: vec![ValueFilter::eq("hello")],
        },
        Shape::Quads(vec![QuadFilter {
            dir: Direction::Object,
            values: Box::new(Shape::Fixed(vec![NodeRef::new("h")])),
        }]),
        Shape::Page {
            from: Box::new(Shape::AllNodes),
            skip: 0,
            limit: 10,
        },
    ];

    for shape in inputs {
        let (first, changed) = qs.optimize_shape(shape);
        assert!(changed);
        let (second, changed_again) = qs.optimize_shape(first.clone());
        assert!(!changed_again);
        assert_eq!(second, first);
    }
}

// =============================================================================
// Iterator Surface Tests
// =============================================================================

/// A scan plan drives the backend with its collection, filters and limit.
#[test]
fn test_scan_iterator_queries_backend() {
    let (qs, seen) = store_with(
        StoreOptions::default(),
        vec![json!({"hash": "n1"}), json!({"hash": "n2"})],
    );
    let scan = Scan {
        collection: COLLECTION_NODES.to_string(),
        filters: vec![FieldFilter::new(
            value_path(fields::DATA),
            FilterOp::Equal,
            "hello",
        )],
        limit: 10,
    };

    let mut it = scan.build_iterator(&qs);
    let docs = drain(it.as_mut());
    assert_eq!(docs.len(), 2);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].collection, COLLECTION_NODES);
    assert_eq!(seen[0].filters.len(), 1);
    assert_eq!(seen[0].limit, 10);
}

/// A links plan lowers each linkage to an equality filter on the quads
/// collection.
#[test]
fn test_links_iterator_lowers_linkages() {
    let (qs, seen) = store_with(StoreOptions::default(), vec![json!({"subject": "h1"})]);
    let links = Links::new(vec![Linkage {
        dir: Direction::Subject,
        node: NodeRef::new("h1"),
    }]);

    let mut it = links.build_iterator(&qs);
    let docs = drain(it.as_mut());
    assert_eq!(docs.len(), 1);

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].collection, COLLECTION_QUADS);
    assert_eq!(
        seen[0].filters,
        vec![FieldFilter {
            path: vec!["subject".to_string()],
            op: FilterOp::Equal,
            value: FieldValue::String("h1".to_string()),
        }]
    );
}

/// Building an iterator over the wrong store type yields exactly one
/// typed error through the stream.
#[test]
fn test_store_mismatch_reports_through_stream() {
    let scan = Scan::new(COLLECTION_NODES, Vec::new());
    let mut it = scan.build_iterator(&OtherStore);

    match it.next() {
        Some(Err(err)) => assert_eq!(err.code(), ExecutorErrorCode::TetraStoreMismatch),
        other => panic!("expected a store mismatch, got ok={:?}", other.is_some()),
    }
    assert!(it.next().is_none());
}
