//! Bounded linear undo/redo over full-graph snapshots.
//!
//! The history always holds at least one snapshot (the seed taken at
//! construction), and the cursor always points at the snapshot matching the
//! live graph.

use std::collections::VecDeque;

use crate::model::Graph;

/// Default number of snapshots kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// An immutable copy of the graph at one point in history.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    graph: Graph,
}

impl Snapshot {
    pub fn capture(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Snapshot>,
    cursor: usize,
    capacity: usize,
}

impl History {
    /// Start a history whose first entry is `seed`. Capacity is at least 1.
    pub fn new(seed: &Graph, capacity: usize) -> Self {
        let mut entries = VecDeque::with_capacity(capacity.max(1));
        entries.push_back(Snapshot::capture(seed));
        Self {
            entries,
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Drop any redo entries, append a snapshot of `graph`, and evict the
    /// oldest entry when over capacity.
    pub fn record(&mut self, graph: &Graph) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(Snapshot::capture(graph));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry. `None` when already at the oldest.
    pub fn undo(&mut self) -> Option<&Graph> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(Snapshot::graph)
    }

    /// Step forward one entry. `None` when already at the newest.
    pub fn redo(&mut self) -> Option<&Graph> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).map(Snapshot::graph)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the seed entry is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.entries[self.cursor]
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(&Graph::new(), DEFAULT_CAPACITY)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
