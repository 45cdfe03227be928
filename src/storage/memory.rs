//! In-memory graph store.
//!
//! This is the reference implementation of `GraphStore`.
//! Nodes live in an arena addressed by `NodeId`; a name index resolves
//! identities.
//!
//! ## Semantics
//!
//! - **First write wins**: a second edge between the same ordered pair is
//!   ignored, whatever its weights.
//! - **Insertion order**: both the node arena and every adjacency list keep
//!   insertion order. Traversal order, and therefore the order of equally
//!   ranked paths, follows it.
//! - **Node weight**: each node takes the weight of the first edge that
//!   targets it.

use hashbrown::HashMap;
use tracing::trace;

use crate::model::*;
use super::GraphStore;

// ============================================================================
// MemoryGraph
// ============================================================================

/// In-memory route graph.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    nodes: Vec<Node>,
    /// name → arena slot
    index: HashMap<String, NodeId>,
    edge_count: usize,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge, creating either endpoint if absent.
    ///
    /// Returns `false` (and changes nothing about the adjacency) if
    /// `source` already has an edge to `destination`.
    pub fn add_edge(&mut self, source: &str, destination: &str, cost: f64, time: f64) -> bool {
        let src = self.intern(source);
        let dst = self.intern(destination);
        let weight = Weight::new(cost, time);

        if !self.nodes[src.index()].insert_edge(Edge::new(dst, weight)) {
            trace!(source, destination, "duplicate edge ignored");
            return false;
        }
        self.nodes[dst.index()].discover(weight);
        self.edge_count += 1;
        true
    }

    /// Add a node with no edges. No-op if it already exists.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        self.intern(name)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(id) = self.index.get(name) {
            return *id;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(id, name));
        self.index.insert(name.to_string(), id);
        id
    }
}

impl GraphStore for MemoryGraph {
    fn lookup(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|id| &self.nodes[id.index()])
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Build a graph from `(source, destination, cost, time)` tuples, in order.
pub fn build_graph<I, S>(edges: I) -> MemoryGraph
where
    I: IntoIterator<Item = (S, S, f64, f64)>,
    S: AsRef<str>,
{
    let mut graph = MemoryGraph::new();
    for (src, dst, cost, time) in edges {
        graph.add_edge(src.as_ref(), dst.as_ref(), cost, time);
    }
    graph
}

// ============================================================================
// Tests
// ============================================================================
