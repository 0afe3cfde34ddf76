//! Editor controller: turns input events and commands into document edits.
//!
//! The editor owns the [`Document`], the [`Viewport`], the interaction state,
//! selection and hover. Input events arrive through [`Editor::handle`];
//! toolbar actions through [`Editor::execute`]. Everything runs on the
//! caller's thread, one event at a time.

pub mod document;
pub mod input;
pub mod state;

pub use document::Document;
pub use input::{Command, CommandOutcome, InputEvent, Key, Modifiers, PointerButton};
pub use state::{InteractionState, TextCommit, TextPrompt};

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::dsl::{self, ExportOptions, ImportOutcome, ImportReport};
use crate::error::EditorError;
use crate::geometry::{Hit, Point, Viewport, node_at, pick};
use crate::model::{Category, EdgeId, Graph, NodeId, Selection};
use crate::storage::{FsStore, TextStore};

/// Node or edge under the pointer. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hover {
    pub node: Option<NodeId>,
    pub edge: Option<EdgeId>,
}

pub struct Editor<S = FsStore> {
    config: EditorConfig,
    document: Document,
    viewport: Viewport,
    state: InteractionState,
    selection: Selection,
    hover: Hover,
    connect_mode: bool,
    export_options: ExportOptions,
    store: S,
}

impl Editor<FsStore> {
    /// Empty editor reading and writing the local filesystem.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_store(config, FsStore)
    }
}

impl<S: TextStore> Editor<S> {
    pub fn with_store(config: EditorConfig, store: S) -> Self {
        Self::with_graph(config, store, Graph::new())
    }

    /// Start from an existing graph; it becomes the history seed.
    pub fn with_graph(config: EditorConfig, store: S, graph: Graph) -> Self {
        let export_options = ExportOptions {
            registry: config.registry.clone(),
        };
        Self {
            document: Document::new(graph, config.history_capacity),
            viewport: Viewport::new(&config),
            state: InteractionState::Idle,
            selection: Selection::None,
            hover: Hover::default(),
            connect_mode: false,
            export_options,
            store,
            config,
        }
    }

    // --- Accessors ---

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn graph(&self) -> &Graph {
        self.document.graph()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn hover(&self) -> Hover {
        self.hover
    }

    pub fn connect_mode(&self) -> bool {
        self.connect_mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn can_undo(&self) -> bool {
        self.document.history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.document.history().can_redo()
    }

    /// Tooltip text for whatever is hovered.
    pub fn hover_label(&self) -> Option<String> {
        let graph = self.graph();
        if let Some(node) = self.hover.node.and_then(|id| graph.node(id)) {
            return Some(format!("Node: {} ({})", node.name, node.category));
        }
        let (a, b) = self.hover.edge.and_then(|id| graph.edge_endpoints(id))?;
        Some(format!(
            "Edge: {} <-> {}",
            graph.node(a)?.name,
            graph.node(b)?.name
        ))
    }

    /// Screen-space rubber band while connecting.
    pub fn connect_preview(&self) -> Option<(Point, Point)> {
        let InteractionState::Connecting { from, pointer } = self.state else {
            return None;
        };
        let start = self.graph().node(from)?.position;
        Some((self.viewport.world_to_screen(start), pointer))
    }

    // --- Input ---

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerPressed {
                pos,
                button: PointerButton::Primary,
            } => self.on_press(pos),
            InputEvent::PointerReleased {
                pos,
                button: PointerButton::Primary,
            } => self.on_release(pos),
            InputEvent::PointerPressed { .. } | InputEvent::PointerReleased { .. } => {}
            InputEvent::PointerMoved { pos } => self.on_motion(pos),
            InputEvent::Scrolled { pos, delta } => self.on_scroll(pos, delta),
            InputEvent::KeyPressed { key, modifiers } => self.on_key(key, modifiers),
            InputEvent::TextEntered(text) => self.on_text(&text),
        }
        self.viewport.clamp();
    }

    fn on_press(&mut self, pos: Point) {
        if self.state.is_text_input() {
            // Clicking away from the prompt dismisses it.
            self.state = InteractionState::Idle;
            return;
        }
        let world = self.viewport.screen_to_world(pos);
        match self.pick(pos) {
            Some(Hit::Node(node)) => {
                self.selection = Selection::Node(node);
                if self.connect_mode {
                    self.state = InteractionState::Connecting { from: node, pointer: pos };
                } else if !matches!(self.state, InteractionState::Placing(_)) {
                    let origin = self.graph().node(node).map(|n| n.position).unwrap_or(world);
                    self.state = InteractionState::DraggingNode {
                        node,
                        grab_offset: world - origin,
                    };
                }
            }
            Some(Hit::Edge(edge)) => {
                self.selection = Selection::Edge(edge);
            }
            None => {
                self.selection = Selection::None;
                if let InteractionState::Placing(category) = self.state {
                    self.state = InteractionState::TextInput(TextPrompt::new(
                        format!("Name for new {category}:"),
                        "",
                        TextCommit::PlaceNode {
                            category,
                            position: world,
                        },
                    ));
                } else {
                    self.state = InteractionState::DraggingCamera {
                        press: pos,
                        camera_start: self.viewport.camera(),
                    };
                }
            }
        }
    }

    fn on_release(&mut self, pos: Point) {
        match std::mem::take(&mut self.state) {
            InteractionState::DraggingNode { .. } | InteractionState::DraggingCamera { .. } => {}
            InteractionState::Connecting { from, .. } => {
                let world = self.viewport.screen_to_world(pos);
                let target = node_at(self.graph(), world, self.config.node_hit_radius);
                match target {
                    Some(to) if to != from => {
                        if let Some(edge) = self.document.connect(from, to) {
                            debug!(?edge, "connected nodes");
                        }
                    }
                    _ => debug!("connection discarded"),
                }
            }
            other => self.state = other,
        }
    }

    fn on_motion(&mut self, pos: Point) {
        if self.state.is_text_input() {
            return;
        }
        self.update_hover(pos);
        match self.state {
            InteractionState::DraggingNode { node, grab_offset } => {
                let world = self.viewport.screen_to_world(pos);
                self.document.move_node(node, world - grab_offset);
            }
            InteractionState::DraggingCamera {
                press,
                camera_start,
            } => {
                let zoom = self.viewport.zoom();
                self.viewport.set_camera(Point::new(
                    camera_start.x + (press.x - pos.x) / zoom,
                    camera_start.y + (press.y - pos.y) / zoom,
                ));
            }
            InteractionState::Connecting { from, .. } => {
                self.state = InteractionState::Connecting { from, pointer: pos };
            }
            _ => {}
        }
    }

    fn on_scroll(&mut self, pos: Point, delta: f64) {
        if self.state.is_text_input() {
            return;
        }
        self.viewport.zoom_at(pos, delta * self.config.zoom_step);
        self.update_hover(pos);
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers) {
        if self.state.is_text_input() {
            match key {
                Key::Enter => self.commit_text_input(),
                Key::Escape => self.state = InteractionState::Idle,
                Key::Backspace => {
                    if let InteractionState::TextInput(prompt) = &mut self.state {
                        prompt.buffer.pop();
                    }
                }
                _ => {}
            }
            return;
        }

        if modifiers.ctrl {
            match key {
                Key::Char(c) if c.eq_ignore_ascii_case(&'z') => {
                    self.undo();
                }
                Key::Char(c) if c.eq_ignore_ascii_case(&'y') => {
                    self.redo();
                }
                _ => {}
            }
            return;
        }

        let step = self.config.pan_step;
        let key = match key {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        };
        match key {
            Key::Up | Key::Char('w') => self.viewport.pan_screen(0.0, -step),
            Key::Down | Key::Char('s') => self.viewport.pan_screen(0.0, step),
            Key::Left | Key::Char('a') => self.viewport.pan_screen(-step, 0.0),
            Key::Right | Key::Char('d') => self.viewport.pan_screen(step, 0.0),
            Key::Escape => {
                if matches!(
                    self.state,
                    InteractionState::Placing(_) | InteractionState::Connecting { .. }
                ) {
                    self.state = InteractionState::Idle;
                }
            }
            _ => {}
        }
    }

    fn on_text(&mut self, text: &str) {
        if let InteractionState::TextInput(prompt) = &mut self.state {
            prompt.buffer.extend(text.chars().filter(|c| !c.is_control()));
        }
    }

    fn commit_text_input(&mut self) {
        let InteractionState::TextInput(prompt) = std::mem::take(&mut self.state) else {
            return;
        };
        let text = prompt.committed_text();
        match prompt.on_commit {
            TextCommit::PlaceNode { category, position } => {
                let node = self.document.place(&text, category, position);
                debug!(?node, name = %text, %category, "placed node");
            }
            TextCommit::RenameNode(node) => {
                self.document.rename(node, &text);
            }
        }
    }

    fn pick(&self, pos: Point) -> Option<Hit> {
        pick(
            self.graph(),
            &self.viewport,
            pos,
            self.config.node_hit_radius,
            self.config.edge_hit_threshold,
        )
    }

    fn update_hover(&mut self, pos: Point) {
        self.hover = match self.pick(pos) {
            Some(Hit::Node(node)) => Hover {
                node: Some(node),
                edge: None,
            },
            Some(Hit::Edge(edge)) => Hover {
                node: None,
                edge: Some(edge),
            },
            None => Hover::default(),
        };
    }

    // --- Commands ---

    /// Run a toolbar command. Commands are ignored while text entry is active.
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome, EditorError> {
        if self.state.is_text_input() {
            return Ok(CommandOutcome::Ignored);
        }
        let done = |ok: bool| {
            if ok {
                CommandOutcome::Done
            } else {
                CommandOutcome::Ignored
            }
        };
        Ok(match command {
            Command::Place(category) => {
                self.arm_placing(category);
                CommandOutcome::Done
            }
            Command::ToggleConnectMode => {
                self.toggle_connect_mode();
                CommandOutcome::Done
            }
            Command::Rename => done(self.begin_rename()),
            Command::RenameTo(text) => done(self.rename_selected(&text)),
            Command::Delete => done(self.delete_selected()),
            Command::Undo => done(self.undo()),
            Command::Redo => done(self.redo()),
            Command::Import => {
                let path = self.config.import_path.clone();
                CommandOutcome::Imported(self.import_from(&path)?)
            }
            Command::Export => {
                let path = self.config.export_path.clone();
                self.export_to(&path)?;
                CommandOutcome::Exported(path)
            }
        })
    }

    fn arm_placing(&mut self, category: Category) {
        debug!(%category, "placing armed");
        self.state = InteractionState::Placing(category);
    }

    fn toggle_connect_mode(&mut self) {
        self.connect_mode = !self.connect_mode;
        if !self.connect_mode && matches!(self.state, InteractionState::Connecting { .. }) {
            self.state = InteractionState::Idle;
        }
        debug!(on = self.connect_mode, "connect mode toggled");
    }

    fn begin_rename(&mut self) -> bool {
        let Some(node) = self.selection.node() else {
            return false;
        };
        let Some(current) = self.graph().node(node).map(|n| n.name.clone()) else {
            return false;
        };
        self.state =
            InteractionState::TextInput(TextPrompt::new("Rename node:", current, TextCommit::RenameNode(node)));
        true
    }

    fn rename_selected(&mut self, text: &str) -> bool {
        match self.selection.node() {
            Some(node) => self.document.rename(node, text.trim()),
            None => false,
        }
    }

    fn delete_selected(&mut self) -> bool {
        let selection = std::mem::take(&mut self.selection);
        let deleted = self.document.delete(selection);
        if deleted {
            self.hover = Hover::default();
            if self.state.holds_node() {
                self.state = InteractionState::Idle;
            }
        }
        deleted
    }

    fn undo(&mut self) -> bool {
        let restored = self.document.undo();
        if restored {
            self.after_restore();
        }
        restored
    }

    fn redo(&mut self) -> bool {
        let restored = self.document.redo();
        if restored {
            self.after_restore();
        }
        restored
    }

    /// Handles held by selection, hover, or a gesture may be stale after the
    /// graph is swapped out.
    fn after_restore(&mut self) {
        self.selection = Selection::None;
        self.hover = Hover::default();
        if self.state.holds_node() {
            self.state = InteractionState::Idle;
        }
    }

    // --- Import / export ---

    /// Replace the graph with the script at `path`. On failure nothing changes.
    pub fn import_from(&mut self, path: &Path) -> Result<ImportReport, EditorError> {
        let text = self.store.read_text(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "import failed");
            EditorError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let ImportOutcome { graph, report } = dsl::import(&text);
        info!(
            path = %path.display(),
            nodes = report.nodes,
            edges = report.edges,
            skipped = report.skipped.len(),
            "imported graph"
        );
        self.document.replace(graph);
        self.after_restore();
        Ok(report)
    }

    /// Write the graph as a script to `path`. Does not touch history.
    pub fn export_to(&self, path: &Path) -> Result<String, EditorError> {
        let text = dsl::export(self.graph(), &self.export_options);
        self.store.write_text(path, &text).map_err(|source| {
            warn!(path = %path.display(), error = %source, "export failed");
            EditorError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(
            path = %path.display(),
            nodes = self.graph().node_count(),
            edges = self.graph().edge_count(),
            "exported graph"
        );
        Ok(text)
    }
}
