//! Node (location) record in the route graph.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Edge, Weight};

/// Opaque node identifier: the node's slot in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outgoing edges, in insertion order. Most locations have only a few routes.
pub type Adjacency = SmallVec<[Edge; 4]>;

/// A named location and its outgoing edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    /// Case-sensitive identity; never normalized.
    pub name: String,
    /// Weight attributed to reaching this node. Assigned by the first edge
    /// that targets it, zero if no edge ever does.
    pub weight: Weight,
    edges: Adjacency,
    #[serde(skip)]
    targets: HashSet<NodeId>,
    #[serde(skip)]
    weighted: bool,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            weight: Weight::ZERO,
            edges: Adjacency::new(),
            targets: HashSet::new(),
            weighted: false,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn has_edge_to(&self, to: NodeId) -> bool {
        self.targets.contains(&to)
    }

    /// Insert an outgoing edge unless one to the same destination exists.
    /// Returns `true` if the edge was inserted.
    pub(crate) fn insert_edge(&mut self, edge: Edge) -> bool {
        if !self.targets.insert(edge.to) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Record the weight of the first edge that discovered this node.
    pub(crate) fn discover(&mut self, weight: Weight) {
        if !self.weighted {
            self.weight = weight;
            self.weighted = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_edge_first_write_wins() {
        let mut node = Node::new(NodeId(0), "Austin");
        assert!(node.insert_edge(Edge::new(NodeId(1), Weight::new(98.0, 47.0))));
        assert!(!node.insert_edge(Edge::new(NodeId(1), Weight::new(1.0, 1.0))));

        assert_eq!(node.edges().len(), 1);
        assert_eq!(node.edges()[0].weight, Weight::new(98.0, 47.0));
        assert!(node.has_edge_to(NodeId(1)));
        assert!(!node.has_edge_to(NodeId(2)));
    }

    #[test]
    fn test_discover_sets_weight_once() {
        let mut node = Node::new(NodeId(3), "Dallas");
        assert_eq!(node.weight, Weight::ZERO);

        node.discover(Weight::new(10.0, 2.0));
        node.discover(Weight::new(99.0, 99.0));
        assert_eq!(node.weight, Weight::new(10.0, 2.0));
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let mut node = Node::new(NodeId(0), "A");
        for i in [4u32, 2, 7, 1, 9] {
            node.insert_edge(Edge::new(NodeId(i), Weight::ZERO));
        }
        let order: Vec<u32> = node.edges().iter().map(|e| e.to.0).collect();
        assert_eq!(order, vec![4, 2, 7, 1, 9]);
    }
}
