//! Domain model: positioned nodes joined by undirected edges.
//!
//! Backed by a petgraph `StableUnGraph`, so node and edge handles stay valid
//! when other elements are removed, and removing a node drops every edge
//! that touches it.

use std::fmt;
use std::str::FromStr;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};

use crate::geometry::Point;

/// Name given to nodes whose requested name is blank.
pub const UNNAMED: &str = "Unnamed";

/// Stable node handle.
pub type NodeId = NodeIndex;

/// Stable edge handle.
pub type EdgeId = EdgeIndex;

// ─── Category ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Building,
    Walkway,
    Gate,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Building, Category::Walkway, Category::Gate];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Building => "building",
            Category::Walkway => "walkway",
            Category::Gate => "gate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "building" => Ok(Category::Building),
            "walkway" => Ok(Category::Walkway),
            "gate" => Ok(Category::Gate),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

// ─── Node ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Display name; never blank.
    pub name: String,
    pub category: Category,
    /// Position in world (image) space.
    pub position: Point,
}

impl Node {
    pub fn new(name: &str, category: Category, position: Point) -> Self {
        Self {
            name: display_name(name),
            category,
            position,
        }
    }
}

/// `name` unchanged, or [`UNNAMED`] when it is empty or whitespace.
pub fn display_name(name: &str) -> String {
    if name.trim().is_empty() {
        UNNAMED.to_string()
    } else {
        name.to_string()
    }
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// What the user has selected: nothing, one node, or one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Node(NodeId),
    Edge(EdgeId),
}

impl Selection {
    pub fn node(self) -> Option<NodeId> {
        match self {
            Selection::Node(id) => Some(id),
            _ => None,
        }
    }

    pub fn edge(self) -> Option<EdgeId> {
        match self {
            Selection::Edge(id) => Some(id),
            _ => None,
        }
    }
}

// ─── Graph ───────────────────────────────────────────────────────────────────

/// The node/edge collection. Cloning produces a fully independent copy.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: StableUnGraph<Node, ()>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node; a blank name becomes [`UNNAMED`].
    pub fn add_node(&mut self, name: &str, category: Category, position: Point) -> NodeId {
        self.inner.add_node(Node::new(name, category, position))
    }

    /// Connect two distinct existing nodes. Parallel edges are allowed.
    ///
    /// Returns `None` for a self-loop or an unknown handle.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        if a == b || !self.contains_node(a) || !self.contains_node(b) {
            return None;
        }
        Some(self.inner.add_edge(a, b, ()))
    }

    /// Remove a node together with every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        self.inner.remove_node(id)
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        self.inner.remove_edge(id).is_some()
    }

    /// Set a node's position. Returns `true` only if it actually changed.
    pub fn set_position(&mut self, id: NodeId, position: Point) -> bool {
        match self.inner.node_weight_mut(id) {
            Some(node) if node.position != position => {
                node.position = position;
                true
            }
            _ => false,
        }
    }

    /// Rename a node (blank → [`UNNAMED`]). Returns `false` for an unknown handle.
    pub fn set_name(&mut self, id: NodeId, name: &str) -> bool {
        match self.inner.node_weight_mut(id) {
            Some(node) => {
                node.name = display_name(name);
                true
            }
            None => false,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.inner.node_weight(id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.inner.contains_node(id)
    }

    pub fn edge_endpoints(&self, id: EdgeId) -> Option<(NodeId, NodeId)> {
        self.inner.edge_endpoints(id)
    }

    /// All nodes in index order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.inner
            .node_indices()
            .filter_map(move |id| self.inner.node_weight(id).map(|n| (id, n)))
    }

    /// All edges in index order, as `(edge, a, b)`.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, NodeId, NodeId)> + '_ {
        self.inner
            .edge_indices()
            .filter_map(move |id| self.inner.edge_endpoints(id).map(|(a, b)| (id, a, b)))
    }

    /// Number of edges between `a` and `b`, in either direction.
    pub fn edges_between(&self, a: NodeId, b: NodeId) -> usize {
        self.edges()
            .filter(|&(_, x, y)| (x == a && y == b) || (x == b && y == a))
            .count()
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Edge endpoints normalised to `(min, max)` and sorted, for
    /// order-insensitive comparison.
    pub fn edge_pairs(&self) -> Vec<(NodeId, NodeId)> {
        let mut pairs: Vec<(NodeId, NodeId)> = self
            .edges()
            .map(|(_, a, b)| if a <= b { (a, b) } else { (b, a) })
            .collect();
        pairs.sort();
        pairs
    }
}

/// Value equality: same handles with the same node data, and the same
/// multiset of unordered edge pairs.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count()
            && self.nodes().zip(other.nodes()).all(|(a, b)| a == b)
            && self.edge_pairs() == other.edge_pairs()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
