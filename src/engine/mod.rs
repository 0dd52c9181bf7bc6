//! Route selection: Kruskal's minimum spanning forest.

pub mod kruskal;

pub use kruskal::{minimum_spanning_forest, KruskalEngine, SpanningForest};
