//! Formatting of the optimal route result.

use std::fmt;

use crate::engine::SpanningForest;
use crate::types::EdgeRecord;

/// The single route surfaced to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteReport {
    /// Cheapest edge of the spanning forest.
    Optimal(EdgeRecord),
    /// The forest is empty.
    NoRoute,
}

impl RouteReport {
    /// Pick the cheapest accepted edge of `forest`.
    pub fn from_forest(forest: &SpanningForest) -> Self {
        match forest.cheapest() {
            Some(edge) => Self::Optimal(edge.clone()),
            None => Self::NoRoute,
        }
    }

    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Optimal(_))
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optimal(edge) => write!(f, "{}", format_edge(edge)),
            Self::NoRoute => f.write_str("No optimal route was generated. Check the input file."),
        }
    }
}

/// Render an edge as `origin --(costL)-- destination`.
pub fn format_edge(edge: &EdgeRecord) -> String {
    format!(
        "{} --({}L)-- {}",
        edge.origin(),
        format_cost(edge.cost()),
        edge.destination()
    )
}

/// Shortest decimal form of `cost`, whole numbers keeping one decimal place.
pub fn format_cost(cost: f64) -> String {
    let text = cost.to_string();
    if cost.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}
