//! graph-editor — interactive 2D editor for a campus connectivity graph.
//!
//! Nodes (buildings, walkways, gates) are placed over a background image and
//! connected with undirected edges. The graph round-trips through a small
//! line-oriented script consumed by a downstream application.
//!
//! Modules:
//!   config   : EditorConfig (viewport, zoom, hit radii, history, paths)
//!   geometry : Point, Rect, Viewport transforms, hit-testing
//!   model    : Category, Node, Graph (petgraph StableUnGraph), Selection
//!   history  : bounded undo/redo over graph snapshots
//!   dsl      : script import (regex) and export
//!   storage  : TextStore trait, filesystem and in-memory stores
//!   editor   : Document, InteractionState, Editor controller
//!   error    : EditorError

pub mod config;
pub mod dsl;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod history;
pub mod model;
pub mod storage;

pub use config::EditorConfig;
pub use dsl::{ExportOptions, ImportReport};
pub use editor::{Command, CommandOutcome, Editor, InputEvent, InteractionState};
pub use error::EditorError;
pub use geometry::{Point, Viewport};
pub use model::{Category, Graph, Node, Selection};

/// Import a script and export it again in canonical form.
///
/// Returns the normalized text and the import report (skipped lines etc.).
pub fn reformat(src: &str, options: &ExportOptions) -> (String, ImportReport) {
    let outcome = dsl::import(src);
    (dsl::export(&outcome.graph, options), outcome.report)
}
