//! Command implementations and report formatting for the `froute` binary.

pub mod commands;
pub mod report;

pub use report::{format_cost, format_edge, RouteReport};
