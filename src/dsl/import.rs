//! Script import.
//!
//! Each trimmed line is tried against the declaration pattern, then the
//! connection pattern. Lines that match neither, or that cannot be applied,
//! are recorded in the [`ImportReport`] and skipped; they never abort the
//! import.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::geometry::Point;
use crate::model::{Category, Graph, NodeId};

/// `const SYMBOL = new GraphNode('name', 'category', X, Y);`
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^const\s+(\w+)\s*=\s*new\s+GraphNode\s*\(\s*'([^']+)'\s*,\s*'([^']+)'\s*,\s*(\d+)\s*,\s*(\d+)\s*\);?",
    )
    .expect("declaration pattern is valid")
});

/// `A.addBidirectionalNeighbor(B);`
static CONNECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\.addBidirectionalNeighbor\s*\(\s*(\w+)\s*\);?")
        .expect("connection pattern is valid")
});

/// Why a line was skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("line matches no known statement")]
    Unrecognized,

    #[error("connection references undeclared symbol '{0}'")]
    UndeclaredSymbol(String),

    #[error("symbol '{0}' is connected to itself")]
    SelfConnection(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("coordinate '{0}' is out of range")]
    CoordinateOutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line: usize,
    pub error: LineError,
}

/// Summary of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub nodes: usize,
    pub edges: usize,
    /// Connection lines naming a pair that was already connected.
    pub duplicate_edges: usize,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub graph: Graph,
    pub report: ImportReport,
}

/// Parse a script into a fresh graph.
pub fn import(src: &str) -> ImportOutcome {
    let mut graph = Graph::new();
    let mut report = ImportReport::default();
    let mut symbols: HashMap<String, NodeId> = HashMap::new();
    let mut seen_pairs: HashSet<(NodeId, NodeId)> = HashSet::new();

    for (idx, raw) in src.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let result = if let Some(caps) = DECLARATION.captures(line) {
            declare(&mut graph, &mut symbols, &caps)
        } else if let Some(caps) = CONNECTION.captures(line) {
            connect(&mut graph, &symbols, &mut seen_pairs, &caps[1], &caps[2])
                .map(|added| {
                    if !added {
                        report.duplicate_edges += 1;
                    }
                })
        } else {
            Err(LineError::Unrecognized)
        };
        if let Err(error) = result {
            tracing::warn!(line = idx + 1, %error, "skipping script line");
            report.skipped.push(SkippedLine {
                line: idx + 1,
                error,
            });
        }
    }

    report.nodes = graph.node_count();
    report.edges = graph.edge_count();
    ImportOutcome { graph, report }
}

fn declare(
    graph: &mut Graph,
    symbols: &mut HashMap<String, NodeId>,
    caps: &regex::Captures<'_>,
) -> Result<(), LineError> {
    let category: Category = caps[3]
        .parse()
        .map_err(|_| LineError::UnknownCategory(caps[3].to_string()))?;
    let x = parse_coordinate(&caps[4])?;
    let y = parse_coordinate(&caps[5])?;
    let id = graph.add_node(&caps[2], category, Point::new(x, y));
    // A repeated symbol rebinds to the newest node; the older node stays.
    symbols.insert(caps[1].to_string(), id);
    Ok(())
}

fn parse_coordinate(digits: &str) -> Result<f64, LineError> {
    digits
        .parse::<u32>()
        .map(f64::from)
        .map_err(|_| LineError::CoordinateOutOfRange(digits.to_string()))
}

/// Returns `Ok(false)` when the pair was already connected in this import.
fn connect(
    graph: &mut Graph,
    symbols: &HashMap<String, NodeId>,
    seen_pairs: &mut HashSet<(NodeId, NodeId)>,
    sym_a: &str,
    sym_b: &str,
) -> Result<bool, LineError> {
    let lookup = |sym: &str| {
        symbols
            .get(sym)
            .copied()
            .ok_or_else(|| LineError::UndeclaredSymbol(sym.to_string()))
    };
    let a = lookup(sym_a)?;
    let b = lookup(sym_b)?;
    if a == b {
        return Err(LineError::SelfConnection(sym_a.to_string()));
    }
    let key = if a <= b { (a, b) } else { (b, a) };
    if !seen_pairs.insert(key) {
        return Ok(false);
    }
    graph.add_edge(a, b);
    Ok(true)
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
