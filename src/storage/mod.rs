//! # Graph Store Trait
//!
//! The contract between the path search and whatever holds the graph.
//! The search only needs name resolution and ordered adjacency.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryGraph` | `memory` | Arena-backed in-memory graph |

pub mod memory;

use crate::model::*;

pub use memory::{MemoryGraph, build_graph};

// ============================================================================
// GraphStore Trait
// ============================================================================

/// Read-only view of a route graph.
///
/// Stores are never mutated by queries, so one store can serve any number of
/// sequential or concurrent searches.
pub trait GraphStore: Send + Sync {
    /// Resolve a node name (case-sensitive) to its record.
    fn lookup(&self, name: &str) -> Option<&Node>;

    /// Record for an id previously handed out by this store.
    fn node(&self, id: NodeId) -> Option<&Node>;

    /// Total number of nodes.
    fn node_count(&self) -> usize;

    /// Outgoing edges of `name` as `(neighbor, cost, time)` in insertion order.
    /// Empty if the node is unknown or has no outgoing edges.
    fn neighbors(&self, name: &str) -> Vec<(&str, f64, f64)> {
        let Some(node) = self.lookup(name) else {
            return Vec::new();
        };
        node.edges()
            .iter()
            .filter_map(|edge| {
                self.node(edge.to)
                    .map(|n| (n.name.as_str(), edge.cost(), edge.time()))
            })
            .collect()
    }

    /// Name of the node with the given id.
    fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}
