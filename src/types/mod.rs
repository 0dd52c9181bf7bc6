//! All data types for the fuel-route library.

pub mod edge;
pub mod error;

pub use edge::{EdgeRecord, StopId};
pub use error::{RouteError, RouteResult};

/// Preamble lines skipped before any row is inspected.
pub const DEFAULT_HEADER_LINES: usize = 2;

/// Minimum number of lines a route file must have.
pub const DEFAULT_MIN_LINES: usize = 4;

/// Keyword that opens the data section.
pub const DEFAULT_SENTINEL: &str = "Bus";

/// Separator between stop names in a hyphen-chain token.
pub const DEFAULT_CHAIN_SEPARATOR: char = '-';
