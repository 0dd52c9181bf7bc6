//! Error types for the fuel-route library.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur in the fuel-route library.
#[derive(Error, Debug)]
pub enum RouteError {
    /// The route source does not exist.
    #[error("Route file '{}' not found", .0.display())]
    ResourceNotFound(PathBuf),

    /// Too few lines to hold the preamble and any data.
    #[error("Malformed route file: {found} lines, at least {required} required")]
    MalformedHeader { found: usize, required: usize },

    /// A data row fits neither layout or carries an unparseable cost.
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// Union-find lookup of a stop that was never registered.
    #[error("Stop id {0} is not registered in the disjoint set")]
    UnknownId(usize),

    /// Fuel cost is negative, NaN or infinite.
    #[error("Fuel cost must be finite and non-negative: {0}")]
    InvalidCost(f64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parser configuration could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience result type for fuel-route operations.
pub type RouteResult<T> = Result<T, RouteError>;
