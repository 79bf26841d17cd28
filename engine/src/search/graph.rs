//! Roadmap graph of 3D positions

use glam::Vec3;

/// Index of a node in a [`Roadmap`].
pub type NodeId = usize;

/// An undirected graph of world positions.
///
/// Node ids are dense indices assigned by [`Roadmap::add_node`] in
/// insertion order. Edges carry no explicit weight; the cost of traversing
/// an edge is the Euclidean distance between its endpoints.
#[derive(Debug, Clone, Default)]
pub struct Roadmap {
    positions: Vec<Vec3>,
    adjacency: Vec<Vec<NodeId>>,
}

impl Roadmap {
    /// Create an empty roadmap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at `pos` and return its id.
    pub fn add_node(&mut self, pos: Vec3) -> NodeId {
        self.positions.push(pos);
        self.adjacency.push(Vec::new());
        self.positions.len() - 1
    }

    /// Connect two nodes with an undirected edge.
    ///
    /// Out-of-range ids and self-edges are ignored; duplicate edges are
    /// not deduplicated.
    pub fn connect(&mut self, a: NodeId, b: NodeId) {
        if a == b || a >= self.len() || b >= self.len() {
            return;
        }
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// True if `node` is a valid id.
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.positions.len()
    }

    /// Position of a node.
    pub fn position(&self, node: NodeId) -> Option<Vec3> {
        self.positions.get(node).copied()
    }

    /// Neighbors of a node in insertion order.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the roadmap has no nodes.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
