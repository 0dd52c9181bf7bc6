//! In-memory graph structures: stop arena, union-find, edge list.

pub mod builder;
pub mod disjoint_set;
pub mod route_graph;
pub mod stop_index;

pub use builder::GraphBuilder;
pub use disjoint_set::DisjointSet;
pub use route_graph::RouteGraph;
pub use stop_index::StopIndex;
