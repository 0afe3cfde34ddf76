//! The live graph paired with its undo history.
//!
//! Every mutation goes through here so that each discrete user action
//! records exactly one snapshot.

use crate::geometry::Point;
use crate::history::{DEFAULT_CAPACITY, History};
use crate::model::{Category, EdgeId, Graph, NodeId, Selection};

#[derive(Debug, Clone)]
pub struct Document {
    graph: Graph,
    history: History,
}

impl Document {
    /// Wrap `graph`, recording it as the history seed.
    pub fn new(graph: Graph, history_capacity: usize) -> Self {
        let history = History::new(&graph, history_capacity);
        Self { graph, history }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn place(&mut self, name: &str, category: Category, position: Point) -> NodeId {
        let id = self.graph.add_node(name, category, position);
        self.history.record(&self.graph);
        id
    }

    /// Records only when the position actually changed.
    pub fn move_node(&mut self, id: NodeId, position: Point) -> bool {
        let moved = self.graph.set_position(id, position);
        if moved {
            self.history.record(&self.graph);
        }
        moved
    }

    pub fn rename(&mut self, id: NodeId, name: &str) -> bool {
        let renamed = self.graph.set_name(id, name);
        if renamed {
            self.history.record(&self.graph);
        }
        renamed
    }

    /// `None` (and no history entry) for a self-loop or unknown handle.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        let edge = self.graph.add_edge(a, b)?;
        self.history.record(&self.graph);
        Some(edge)
    }

    /// Remove the selected edge, or the selected node with all its edges.
    pub fn delete(&mut self, selection: Selection) -> bool {
        let changed = match selection {
            Selection::None => false,
            Selection::Edge(edge) => self.graph.remove_edge(edge),
            Selection::Node(node) => self.graph.remove_node(node).is_some(),
        };
        if changed {
            self.history.record(&self.graph);
        }
        changed
    }

    /// Swap in a whole new graph as one undoable step.
    pub fn replace(&mut self, graph: Graph) {
        self.graph = graph;
        self.history.record(&self.graph);
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.graph = snapshot.clone();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.graph = snapshot.clone();
                true
            }
            None => false,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Graph::new(), DEFAULT_CAPACITY)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
