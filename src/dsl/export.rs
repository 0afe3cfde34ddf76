//! Script export.
//!
//! Symbols are derived from node names by replacing every non-word character
//! (spaces, hyphens, dots, ...) with an underscore, so each symbol matches the
//! `\w+` symbol grammar the importer reads back. Two names that map to the same symbol are written as-is; the
//! consumer sees a redeclared `const`.

use std::collections::HashSet;
use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::Graph;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W").expect("non-word pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Map expression the registry lines call `.set` on.
    pub registry: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            registry: "this.utechgraph".to_string(),
        }
    }
}

/// Script symbol for a node name.
pub fn symbol_for(name: &str) -> String {
    NON_WORD.replace_all(name, "_").into_owned()
}

/// Render the graph as a script. Pure: repeated calls give identical text.
pub fn export(graph: &Graph, options: &ExportOptions) -> String {
    let mut out = String::new();

    out.push_str("// Created Nodes\n");
    for (_, node) in graph.nodes() {
        // Coordinates are truncated toward zero, as the consumer expects integers.
        let _ = writeln!(
            out,
            "const {} = new GraphNode('{}', '{}', {}, {});",
            symbol_for(&node.name),
            node.name,
            node.category,
            node.position.x as i64,
            node.position.y as i64,
        );
    }

    let _ = writeln!(out, "\n// Add to {}", options.registry);
    for (_, node) in graph.nodes() {
        let _ = writeln!(
            out,
            "{}.set('{}', {});",
            options.registry,
            node.name,
            symbol_for(&node.name),
        );
    }

    out.push_str("\n// Connections\n");
    let mut emitted: HashSet<(String, String)> = HashSet::new();
    for (_, a, b) in graph.edges() {
        let (Some(a), Some(b)) = (graph.node(a), graph.node(b)) else {
            continue;
        };
        let sym_a = symbol_for(&a.name);
        let sym_b = symbol_for(&b.name);
        let key = if sym_a <= sym_b {
            (sym_a.clone(), sym_b.clone())
        } else {
            (sym_b.clone(), sym_a.clone())
        };
        if emitted.insert(key) {
            let _ = writeln!(out, "{sym_a}.addBidirectionalNeighbor({sym_b});");
        }
    }

    out
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
