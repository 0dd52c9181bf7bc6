//! Stop identifiers and the fuel-weighted edge record.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use super::{RouteError, RouteResult};

/// Opaque, case-sensitive name of a stop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    /// Create a stop id from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The stop name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StopId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for StopId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for StopId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// An undirected connection between two stops with its fuel consumption.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    origin: StopId,
    destination: StopId,
    cost: f64,
}

impl EdgeRecord {
    /// Create an edge, rejecting negative or non-finite costs.
    pub fn new(
        origin: impl Into<StopId>,
        destination: impl Into<StopId>,
        cost: f64,
    ) -> RouteResult<Self> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(RouteError::InvalidCost(cost));
        }
        Ok(Self {
            origin: origin.into(),
            destination: destination.into(),
            // Normalise -0.0 so it sorts and prints like 0.0.
            cost: cost + 0.0,
        })
    }

    /// Stop the edge starts from.
    pub fn origin(&self) -> &StopId {
        &self.origin
    }

    /// Stop the edge leads to.
    pub fn destination(&self) -> &StopId {
        &self.destination
    }

    /// Fuel consumption in litres.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether both endpoints are the same stop.
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }
}
