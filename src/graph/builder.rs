//! Fluent API for building RouteGraph instances.

use crate::types::{EdgeRecord, RouteResult, StopId};

use super::RouteGraph;

/// Fluent builder accumulating edges in insertion order.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    edges: Vec<EdgeRecord>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Append an already validated edge.
    pub fn add_edge(&mut self, edge: EdgeRecord) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Append a connection between two stops.
    pub fn add_route(
        &mut self,
        origin: impl Into<StopId>,
        destination: impl Into<StopId>,
        cost: f64,
    ) -> RouteResult<&mut Self> {
        self.edges.push(EdgeRecord::new(origin, destination, cost)?);
        Ok(self)
    }

    /// Append one edge per adjacent pair of `chain`, all sharing `cost`.
    ///
    /// Chains shorter than two stops add nothing.
    pub fn add_chain(&mut self, chain: &[StopId], cost: f64) -> RouteResult<&mut Self> {
        for pair in chain.windows(2) {
            self.edges
                .push(EdgeRecord::new(pair[0].clone(), pair[1].clone(), cost)?);
        }
        Ok(self)
    }

    /// Number of edges added so far.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Build the final RouteGraph.
    pub fn build(self) -> RouteGraph {
        RouteGraph::from_edges(self.edges)
    }
}

impl Extend<EdgeRecord> for GraphBuilder {
    fn extend<I: IntoIterator<Item = EdgeRecord>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}
