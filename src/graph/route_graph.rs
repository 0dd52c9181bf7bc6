//! Edge-list graph over named stops.

use crate::types::{EdgeRecord, StopId};

use super::StopIndex;

/// Insertion-ordered edges plus the dense ids of their endpoints.
///
/// Vertices are implicit: a stop exists only as an edge endpoint. Parallel
/// edges and self-loops are kept as given.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    edges: Vec<EdgeRecord>,
    endpoints: Vec<(usize, usize)>,
    stops: StopIndex,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from edges in their given order.
    pub fn from_edges(edges: Vec<EdgeRecord>) -> Self {
        let mut stops = StopIndex::new();
        let endpoints = edges
            .iter()
            .map(|e| (stops.intern(e.origin()), stops.intern(e.destination())))
            .collect();
        Self {
            edges,
            endpoints,
            stops,
        }
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Whether the graph holds no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Dense endpoint ids, parallel to `edges()`.
    pub fn endpoints(&self) -> &[(usize, usize)] {
        &self.endpoints
    }

    /// The name-to-id table.
    pub fn stop_index(&self) -> &StopIndex {
        &self.stops
    }

    /// All distinct stops in first-appearance order.
    pub fn stops(&self) -> &[StopId] {
        self.stops.stops()
    }

    /// Consume the graph, returning its edges.
    pub fn into_edges(self) -> Vec<EdgeRecord> {
        self.edges
    }
}
