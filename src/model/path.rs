//! PathCandidate — one fully enumerated simple route with its totals.

use std::fmt;

use serde::{Deserialize, Serialize};
use super::Weight;

/// A simple path from the query origin to the query destination.
///
/// Built once by the enumerator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathCandidate {
    /// Node names in travel order, origin first, destination last.
    route: Vec<String>,
    total: Weight,
}

impl PathCandidate {
    pub fn new(route: Vec<String>, total: Weight) -> Self {
        Self { route, total }
    }

    pub fn route(&self) -> &[String] {
        &self.route
    }

    pub fn total_time(&self) -> f64 {
        self.total.time
    }

    pub fn total_cost(&self) -> f64 {
        self.total.cost
    }

    pub fn total(&self) -> Weight {
        self.total
    }

    pub fn origin(&self) -> Option<&str> {
        self.route.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.route.last().map(String::as_str)
    }

    /// Number of hops (edges) along the route.
    pub fn hops(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// Renders the route as `A -> B -> C`.
impl fmt::Display for PathCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_accessors() {
        let p = PathCandidate::new(
            vec!["A".into(), "B".into(), "C".into()],
            Weight::new(15.0, 3.0),
        );
        assert_eq!(p.origin(), Some("A"));
        assert_eq!(p.destination(), Some("C"));
        assert_eq!(p.hops(), 2);
        assert_eq!(p.total_cost(), 15.0);
        assert_eq!(p.total_time(), 3.0);
        assert_eq!(p.to_string(), "A -> B -> C");
    }

    #[test]
    fn test_single_node_route() {
        let p = PathCandidate::new(vec!["A".into()], Weight::ZERO);
        assert_eq!(p.hops(), 0);
        assert_eq!(p.to_string(), "A");
    }
}
