//! Minimum spanning forest via Kruskal's algorithm.

use serde::Serialize;

use crate::graph::{DisjointSet, RouteGraph};
use crate::types::{EdgeRecord, RouteResult};

/// Edges accepted by Kruskal's algorithm, in acceptance order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpanningForest {
    edges: Vec<EdgeRecord>,
    total_cost: f64,
    stop_count: usize,
}

impl SpanningForest {
    /// Accepted edges, cheapest first.
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// The lowest-cost accepted edge, the first one on ties.
    pub fn cheapest(&self) -> Option<&EdgeRecord> {
        self.edges.first()
    }

    /// Sum of accepted edge costs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Distinct stops of the input graph.
    pub fn stop_count(&self) -> usize {
        self.stop_count
    }

    /// Number of trees in the forest, isolated stops included.
    pub fn component_count(&self) -> usize {
        self.stop_count - self.edges.len()
    }

    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge was accepted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Consume the forest, returning its edges.
    pub fn into_edges(self) -> Vec<EdgeRecord> {
        self.edges
    }
}

/// Selects a minimum-cost spanning forest from a route graph.
#[derive(Debug, Default)]
pub struct KruskalEngine;

impl KruskalEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Compute the spanning forest of `graph`.
    ///
    /// Edges are taken by ascending cost; equal costs keep insertion order.
    /// An edge whose endpoints already share a set is discarded, which also
    /// drops every self-loop.
    pub fn compute(&self, graph: &RouteGraph) -> RouteResult<SpanningForest> {
        let stop_count = graph.stop_count();
        let mut sets = DisjointSet::new();
        for id in 0..stop_count {
            sets.make_set(id);
        }

        let edges = graph.edges();
        let endpoints = graph.endpoints();
        let mut order: Vec<usize> = (0..edges.len()).collect();
        // Stable: ties stay in insertion order.
        order.sort_by(|&a, &b| edges[a].cost().total_cmp(&edges[b].cost()));

        let mut accepted = Vec::with_capacity(stop_count.saturating_sub(1));
        let mut total_cost = 0.0;
        for idx in order {
            let (origin, destination) = endpoints[idx];
            if sets.union(origin, destination)? {
                let edge = &edges[idx];
                log::debug!(
                    "accepted {} -- {} ({})",
                    edge.origin(),
                    edge.destination(),
                    edge.cost()
                );
                total_cost += edge.cost();
                accepted.push(edge.clone());
            }
        }

        log::info!(
            "spanning forest: {} of {} edges over {} stops in {} components",
            accepted.len(),
            edges.len(),
            stop_count,
            sets.set_count()
        );

        Ok(SpanningForest {
            edges: accepted,
            total_cost,
            stop_count,
        })
    }

    /// Compute the spanning forest of a bare edge sequence.
    pub fn compute_edges(&self, edges: &[EdgeRecord]) -> RouteResult<SpanningForest> {
        self.compute(&RouteGraph::from_edges(edges.to_vec()))
    }
}

/// Shorthand for `KruskalEngine::new().compute_edges(edges)`, returning the edge list.
pub fn minimum_spanning_forest(edges: &[EdgeRecord]) -> RouteResult<Vec<EdgeRecord>> {
    Ok(KruskalEngine::new().compute_edges(edges)?.into_edges())
}
