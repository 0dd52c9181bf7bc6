//! fuel-route — minimum fuel-consumption route skeletons.
//!
//! Parses loosely structured route files into fuel-weighted connections
//! between named stops, selects the minimum spanning forest with Kruskal's
//! algorithm and reports its cheapest connection.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use cli::RouteReport;
pub use config::ParserConfig;
pub use engine::{minimum_spanning_forest, KruskalEngine, SpanningForest};
pub use format::{
    detect_layout, Detection, Layout, LineParser, LoadOutcome, ParsedRoutes, RouteReader,
};
pub use graph::{DisjointSet, GraphBuilder, RouteGraph, StopIndex};
pub use types::{EdgeRecord, RouteError, RouteResult, StopId};
