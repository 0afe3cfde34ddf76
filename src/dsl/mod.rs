//! GraphNode script, the text format the navigation system consumes.
//!
//! ```text
//! const Library = new GraphNode('Library', 'building', 100, 200);
//! const Main_Gate = new GraphNode('Main Gate', 'gate', 50, 50);
//! this.utechgraph.set('Library', Library);
//! Library.addBidirectionalNeighbor(Main_Gate);
//! ```
//!
//! Import reads declarations and connections line by line and skips anything
//! else; export writes declarations, registry lines, then connections.

pub mod export;
pub mod import;

pub use export::{ExportOptions, export, symbol_for};
pub use import::{ImportOutcome, ImportReport, LineError, SkippedLine, import};
