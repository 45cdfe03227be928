//! # Path Enumeration
//!
//! Exhaustive depth-first search for every simple path between two nodes.
//!
//! The traversal runs on an explicit stack of frames instead of the call
//! stack. Every frame owns a snapshot of its route, its running totals and
//! its own copy of the visit set, so backtracking is simply dropping a frame.
//! Children are pushed in reverse adjacency order, which makes completed
//! paths come out in the same order as a recursive walk over
//! insertion-ordered adjacency.

pub mod visit;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::model::*;
use crate::storage::GraphStore;

pub use visit::VisitSet;

// ============================================================================
// Configuration
// ============================================================================

/// Which weights are summed along a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightAttribution {
    /// Every node on the route contributes its own stored weight, the origin
    /// included.
    #[default]
    Node,
    /// Every hop contributes the weight of the edge actually traversed; the
    /// origin contributes nothing.
    Edge,
}

/// Search and ranking knobs for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub attribution: WeightAttribution,
    /// Stop enumerating after this many candidates (`None` = all).
    pub max_candidates: Option<usize>,
    /// How many ranked paths a query reports.
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            attribution: WeightAttribution::Node,
            max_candidates: None,
            top_k: 3,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_attribution(mut self, attribution: WeightAttribution) -> Self {
        self.attribution = attribution;
        self
    }

    #[must_use]
    pub fn with_max_candidates(mut self, limit: usize) -> Self {
        self.max_candidates = Some(limit);
        self
    }

    #[must_use]
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// One pending step: enter `node`, arriving over an edge of weight `via`.
struct Frame {
    node: NodeId,
    via: Weight,
    /// Route up to, not including, `node`.
    route: Vec<NodeId>,
    total: Weight,
    visited: VisitSet,
}

/// All simple paths from `origin` to `destination` with default settings.
///
/// Returns an empty set if either endpoint is unknown or unreachable.
pub fn find_paths<S>(store: &S, origin: &str, destination: &str) -> Vec<PathCandidate>
where
    S: GraphStore + ?Sized,
{
    find_paths_with(store, origin, destination, &SearchConfig::default())
}

/// All simple paths from `origin` to `destination`, in discovery order.
pub fn find_paths_with<S>(
    store: &S,
    origin: &str,
    destination: &str,
    config: &SearchConfig,
) -> Vec<PathCandidate>
where
    S: GraphStore + ?Sized,
{
    let Some(start) = store.lookup(origin) else {
        debug!(origin, "unknown origin, no paths");
        return Vec::new();
    };
    let Some(target) = store.lookup(destination).map(|n| n.id) else {
        debug!(destination, "unknown destination, no paths");
        return Vec::new();
    };

    let mut candidates = Vec::new();
    let mut expanded = 0usize;
    let mut stack = vec![Frame {
        node: start.id,
        via: Weight::ZERO,
        route: Vec::new(),
        total: Weight::ZERO,
        visited: VisitSet::with_capacity(store.node_count()),
    }];

    while let Some(mut frame) = stack.pop() {
        let Some(current) = store.node(frame.node) else {
            continue;
        };
        expanded += 1;

        frame.visited.insert(current.id);
        frame.route.push(current.id);
        frame.total += match config.attribution {
            WeightAttribution::Node => current.weight,
            WeightAttribution::Edge => frame.via,
        };

        if current.id == target {
            let candidate = materialize(store, &frame.route, frame.total);
            trace!(route = %candidate, time = candidate.total_time(), cost = candidate.total_cost(), "path found");
            candidates.push(candidate);

            if config.max_candidates.is_some_and(|max| candidates.len() >= max) {
                warn!(origin, destination, limit = candidates.len(), "candidate limit reached, enumeration truncated");
                break;
            }
            continue;
        }

        // Reverse so the first edge is popped, and fully explored, first.
        for edge in current.edges().iter().rev() {
            // A node already on this branch's route would close a cycle.
            if frame.visited.contains(edge.to) {
                continue;
            }
            stack.push(Frame {
                node: edge.to,
                via: edge.weight,
                route: frame.route.clone(),
                total: frame.total,
                visited: frame.visited.clone(),
            });
        }
    }

    debug!(origin, destination, found = candidates.len(), expanded, "enumeration complete");
    candidates
}

fn materialize<S>(store: &S, route: &[NodeId], total: Weight) -> PathCandidate
where
    S: GraphStore + ?Sized,
{
    let names = route
        .iter()
        .filter_map(|id| store.node_name(*id))
        .map(str::to_string)
        .collect();
    PathCandidate::new(names, total)
}

// ============================================================================
// Tests
// ============================================================================
