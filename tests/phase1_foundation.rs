//! Phase 1 tests: edge records, union-find, graph construction.

use fuel_route::graph::{DisjointSet, GraphBuilder, RouteGraph, StopIndex};
use fuel_route::types::{EdgeRecord, RouteError, StopId};

fn edge(a: &str, b: &str, cost: f64) -> EdgeRecord {
    EdgeRecord::new(a, b, cost).unwrap()
}

// ==================== Data Structure Tests ====================

#[test]
fn test_stop_id_is_case_sensitive() {
    assert_eq!(StopId::from("Norte"), StopId::new("Norte".to_string()));
    assert_ne!(StopId::from("Norte"), StopId::from("norte"));
    assert_eq!(StopId::from("MYS").to_string(), "MYS");
}

#[test]
fn test_edge_creation() {
    let e = edge("A", "B", 5.0);
    assert_eq!(e.origin().as_str(), "A");
    assert_eq!(e.destination().as_str(), "B");
    assert!((e.cost() - 5.0).abs() < f64::EPSILON);
    assert!(!e.is_self_loop());
    assert!(edge("A", "A", 1.0).is_self_loop());
}

#[test]
fn test_edge_rejects_invalid_cost() {
    for cost in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        match EdgeRecord::new("A", "B", cost) {
            Err(RouteError::InvalidCost(_)) => {}
            other => panic!("Expected InvalidCost for {}, got {:?}", cost, other),
        }
    }
}

#[test]
fn test_edge_zero_cost_allowed() {
    let e = EdgeRecord::new("A", "B", -0.0).unwrap();
    assert_eq!(e.cost().to_bits(), 0.0f64.to_bits());
}

// ==================== Disjoint Set Tests ====================

#[test]
fn test_find_unregistered_fails() {
    let mut sets = DisjointSet::new();
    sets.make_set(0);
    assert!(matches!(sets.find(1), Err(RouteError::UnknownId(1))));

    // Registering a high id does not register the gap below it.
    sets.make_set(5);
    assert!(sets.contains(5));
    assert!(!sets.contains(3));
    assert!(matches!(sets.find(3), Err(RouteError::UnknownId(3))));
    assert!(matches!(sets.union(0, 3), Err(RouteError::UnknownId(3))));
}

#[test]
fn test_make_set_idempotent() {
    let mut sets = DisjointSet::new();
    sets.make_set(0);
    sets.make_set(1);
    sets.union(0, 1).unwrap();
    sets.make_set(1);
    assert_eq!(sets.set_count(), 1);
    assert!(sets.same(0, 1).unwrap());
}

#[test]
fn test_union_reports_cycles() {
    let mut sets = DisjointSet::with_singletons(4);
    assert_eq!(sets.set_count(), 4);
    assert!(sets.union(0, 1).unwrap());
    assert!(sets.union(2, 3).unwrap());
    assert!(!sets.union(1, 0).unwrap());
    assert!(sets.union(1, 3).unwrap());
    assert!(!sets.union(0, 2).unwrap());
    assert_eq!(sets.set_count(), 1);
    assert_eq!(sets.set_size(2).unwrap(), 4);
}

#[test]
fn test_self_union_is_noop() {
    let mut sets = DisjointSet::with_singletons(1);
    assert!(!sets.union(0, 0).unwrap());
    assert_eq!(sets.set_count(), 1);
}

#[test]
fn test_long_chain_find() {
    let n = 100_000;
    let mut sets = DisjointSet::with_singletons(n);
    for i in 1..n {
        sets.union(i - 1, i).unwrap();
    }
    let root = sets.find(n - 1).unwrap();
    for i in (0..n).step_by(997) {
        assert_eq!(sets.find(i).unwrap(), root);
    }
    assert_eq!(sets.set_size(0).unwrap(), n);
}

#[test]
fn test_membership_matches_connectivity() {
    let mut sets = DisjointSet::with_singletons(6);
    sets.union(0, 1).unwrap();
    sets.union(1, 2).unwrap();
    sets.union(4, 5).unwrap();
    assert!(sets.same(0, 2).unwrap());
    assert!(sets.same(5, 4).unwrap());
    assert!(!sets.same(2, 3).unwrap());
    assert!(!sets.same(0, 4).unwrap());
    assert_eq!(sets.set_count(), 3);
}

// ==================== Graph Tests ====================

#[test]
fn test_stop_index_first_appearance_order() {
    let mut index = StopIndex::new();
    assert_eq!(index.intern(&"C".into()), 0);
    assert_eq!(index.intern(&"A".into()), 1);
    assert_eq!(index.intern(&"C".into()), 0);
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("A"), Some(1));
    assert_eq!(index.get("a"), None);
    assert_eq!(index.name(0).map(|s| s.as_str()), Some("C"));
    assert!(index.name(2).is_none());
}

#[test]
fn test_graph_keeps_parallel_edges_and_self_loops() {
    let graph = RouteGraph::from_edges(vec![
        edge("A", "B", 1.0),
        edge("A", "B", 2.0),
        edge("B", "B", 0.5),
    ]);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.stop_count(), 2);
    assert_eq!(graph.endpoints(), &[(0, 1), (0, 1), (1, 1)]);
    assert_eq!(graph.stops(), &[StopId::from("A"), StopId::from("B")]);
}

#[test]
fn test_builder_expands_chains() {
    let mut builder = GraphBuilder::new();
    let chain: Vec<StopId> = ["S1", "S2", "S3"].iter().map(|&s| s.into()).collect();
    builder.add_chain(&chain, 4.0).unwrap();
    builder.add_route("S3", "S4", 1.5).unwrap();
    builder.add_chain(&chain[..1], 9.0).unwrap();
    assert_eq!(builder.len(), 3);

    let graph = builder.build();
    assert_eq!(
        graph.edges(),
        &[edge("S1", "S2", 4.0), edge("S2", "S3", 4.0), edge("S3", "S4", 1.5)]
    );
    assert_eq!(graph.stop_count(), 4);
}

#[test]
fn test_builder_rejects_negative_route() {
    let mut builder = GraphBuilder::new();
    assert!(builder.add_route("A", "B", -2.0).is_err());
    assert!(builder.is_empty());
    assert!(builder.build().is_empty());
}
