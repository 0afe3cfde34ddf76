//! Editor interaction scenarios driven through input events and commands.
//!
//! Default viewport: 1200×700 canvas, zoom 0.5, camera centred on the
//! 2000×4000 image, so screen (600, 350) shows world (1000, 2000).

use std::io;
use std::path::Path;

use graph_editor::editor::{Hover, Key, Modifiers, PointerButton};
use graph_editor::storage::{MemoryStore, TextStore};
use graph_editor::{
    Category, Command, CommandOutcome, Editor, EditorConfig, EditorError, Graph, InputEvent,
    InteractionState, Point, Selection,
};

// ── Helpers ───────────────────────────────────────────────────────────────

fn editor() -> Editor<MemoryStore> {
    Editor::with_store(EditorConfig::default(), MemoryStore::new())
}

fn editor_with(graph: Graph) -> Editor<MemoryStore> {
    Editor::with_graph(EditorConfig::default(), MemoryStore::new(), graph)
}

fn screen_of<S: TextStore>(ed: &Editor<S>, world: Point) -> Point {
    ed.viewport().world_to_screen(world)
}

fn press<S: TextStore>(ed: &mut Editor<S>, pos: Point) {
    ed.handle(InputEvent::PointerPressed {
        pos,
        button: PointerButton::Primary,
    });
}

fn release<S: TextStore>(ed: &mut Editor<S>, pos: Point) {
    ed.handle(InputEvent::PointerReleased {
        pos,
        button: PointerButton::Primary,
    });
}

fn move_to<S: TextStore>(ed: &mut Editor<S>, pos: Point) {
    ed.handle(InputEvent::PointerMoved { pos });
}

fn click<S: TextStore>(ed: &mut Editor<S>, pos: Point) {
    press(ed, pos);
    release(ed, pos);
}

fn key<S: TextStore>(ed: &mut Editor<S>, key: Key) {
    ed.handle(InputEvent::KeyPressed {
        key,
        modifiers: Modifiers::NONE,
    });
}

fn ctrl<S: TextStore>(ed: &mut Editor<S>, c: char) {
    ed.handle(InputEvent::KeyPressed {
        key: Key::Char(c),
        modifiers: Modifiers::CTRL,
    });
}

fn type_text<S: TextStore>(ed: &mut Editor<S>, text: &str) {
    ed.handle(InputEvent::TextEntered(text.to_string()));
}

/// Two buildings 100 world units apart, joined by one edge.
fn two_connected() -> Graph {
    let mut g = Graph::new();
    let a = g.add_node("Library", Category::Building, Point::new(1000.0, 2000.0));
    let b = g.add_node("Main Gate", Category::Gate, Point::new(1100.0, 2000.0));
    g.add_edge(a, b).unwrap();
    g
}

const SCRIPT: &str = "\
const Library = new GraphNode('Library', 'building', 100, 200);
const Main_Gate = new GraphNode('Main Gate', 'gate', 300, 400);
Library.addBidirectionalNeighbor(Main_Gate);
";

// ── Placing ───────────────────────────────────────────────────────────────

#[test]
fn test_place_node_through_prompt() {
    let mut ed = editor();
    assert_eq!(
        ed.execute(Command::Place(Category::Building)).unwrap(),
        CommandOutcome::Done
    );
    assert_eq!(ed.state(), &InteractionState::Placing(Category::Building));

    click(&mut ed, Point::new(600.0, 350.0));
    let prompt = ed.state().text_prompt().expect("prompt open");
    assert_eq!(prompt.prompt, "Name for new building:");

    type_text(&mut ed, "Library");
    key(&mut ed, Key::Enter);

    assert_eq!(ed.state(), &InteractionState::Idle);
    assert_eq!(ed.graph().node_count(), 1);
    let (_, node) = ed.graph().nodes().next().unwrap();
    assert_eq!(node.name, "Library");
    assert_eq!(node.category, Category::Building);
    assert_eq!(node.position, Point::new(1000.0, 2000.0));
    assert!(ed.can_undo());
}

#[test]
fn test_blank_name_becomes_unnamed() {
    let mut ed = editor();
    ed.execute(Command::Place(Category::Gate)).unwrap();
    click(&mut ed, Point::new(600.0, 350.0));
    type_text(&mut ed, "   ");
    key(&mut ed, Key::Enter);
    let (_, node) = ed.graph().nodes().next().unwrap();
    assert_eq!(node.name, "Unnamed");
}

#[test]
fn test_escape_in_prompt_cancels_placement() {
    let mut ed = editor();
    ed.execute(Command::Place(Category::Walkway)).unwrap();
    click(&mut ed, Point::new(600.0, 350.0));
    type_text(&mut ed, "Path");
    key(&mut ed, Key::Escape);
    assert_eq!(ed.state(), &InteractionState::Idle);
    assert!(ed.graph().is_empty());
    assert!(!ed.can_undo());
}

#[test]
fn test_click_during_prompt_cancels_it() {
    let mut ed = editor();
    ed.execute(Command::Place(Category::Walkway)).unwrap();
    click(&mut ed, Point::new(600.0, 350.0));
    assert!(ed.state().is_text_input());
    press(&mut ed, Point::new(100.0, 100.0));
    assert_eq!(ed.state(), &InteractionState::Idle);
    assert!(ed.graph().is_empty());
}

#[test]
fn test_backspace_edits_prompt_buffer() {
    let mut ed = editor();
    ed.execute(Command::Place(Category::Building)).unwrap();
    click(&mut ed, Point::new(600.0, 350.0));
    type_text(&mut ed, "Labs");
    key(&mut ed, Key::Backspace);
    assert_eq!(ed.state().text_prompt().unwrap().buffer, "Lab");
}

#[test]
fn test_escape_disarms_placing() {
    let mut ed = editor();
    ed.execute(Command::Place(Category::Building)).unwrap();
    key(&mut ed, Key::Escape);
    assert_eq!(ed.state(), &InteractionState::Idle);
    click(&mut ed, Point::new(600.0, 350.0));
    assert!(!ed.state().is_text_input());
}

#[test]
fn test_placing_press_on_node_selects_and_stays_armed() {
    let mut ed = editor_with(two_connected());
    let lib = ed.graph().nodes().next().unwrap().0;
    ed.execute(Command::Place(Category::Gate)).unwrap();
    click(&mut ed, Point::new(600.0, 350.0));
    assert_eq!(ed.selection(), Selection::Node(lib));
    assert_eq!(ed.state(), &InteractionState::Placing(Category::Gate));
}

// ── Selection and dragging ────────────────────────────────────────────────

#[test]
fn test_click_selects_node_edge_or_nothing() {
    let mut ed = editor_with(two_connected());
    let lib = ed.graph().nodes().next().unwrap().0;
    let edge = ed.graph().edges().next().unwrap().0;

    click(&mut ed, Point::new(600.0, 350.0));
    assert_eq!(ed.selection(), Selection::Node(lib));

    // Midpoint of the edge, 2px off the line: far from both node radii.
    click(&mut ed, Point::new(625.0, 352.0));
    assert_eq!(ed.selection(), Selection::Edge(edge));

    click(&mut ed, Point::new(100.0, 100.0));
    assert_eq!(ed.selection(), Selection::None);
}

#[test]
fn test_drag_node_keeps_grab_offset() {
    let mut ed = editor_with(two_connected());
    let lib = ed.graph().nodes().next().unwrap().0;

    // Grab 3px right of centre (6 world units, inside the 10 unit radius).
    press(&mut ed, Point::new(603.0, 350.0));
    assert!(matches!(ed.state(), InteractionState::DraggingNode { .. }));
    move_to(&mut ed, Point::new(653.0, 400.0));
    release(&mut ed, Point::new(653.0, 400.0));

    assert_eq!(ed.state(), &InteractionState::Idle);
    assert_eq!(
        ed.graph().node(lib).unwrap().position,
        Point::new(1100.0, 2100.0)
    );
}

#[test]
fn test_drag_records_one_entry_per_moving_frame() {
    let mut ed = editor_with(two_connected());
    press(&mut ed, Point::new(600.0, 350.0));
    move_to(&mut ed, Point::new(610.0, 350.0));
    move_to(&mut ed, Point::new(620.0, 350.0));
    move_to(&mut ed, Point::new(620.0, 350.0));
    release(&mut ed, Point::new(620.0, 350.0));
    assert_eq!(ed.document().history().len(), 3);
}

#[test]
fn test_drag_empty_canvas_pans_camera() {
    let mut ed = editor();
    let start = ed.viewport().camera();
    press(&mut ed, Point::new(100.0, 100.0));
    assert!(matches!(ed.state(), InteractionState::DraggingCamera { .. }));
    move_to(&mut ed, Point::new(0.0, 100.0));
    release(&mut ed, Point::new(0.0, 100.0));

    let cam = ed.viewport().camera();
    assert!((cam.x - (start.x + 200.0)).abs() < 1e-9);
    assert!((cam.y - start.y).abs() < 1e-9);
    assert!(!ed.can_undo());
}

// ── Connecting ────────────────────────────────────────────────────────────

#[test]
fn test_connect_mode_creates_edge_on_release() {
    let mut g = Graph::new();
    let a = g.add_node("A", Category::Walkway, Point::new(1000.0, 2000.0));
    let b = g.add_node("B", Category::Walkway, Point::new(1200.0, 2000.0));
    let mut ed = editor_with(g);

    ed.execute(Command::ToggleConnectMode).unwrap();
    assert!(ed.connect_mode());

    press(&mut ed, Point::new(600.0, 350.0));
    move_to(&mut ed, Point::new(650.0, 360.0));
    let (from, to) = ed.connect_preview().expect("rubber band");
    assert_eq!(from, Point::new(600.0, 350.0));
    assert_eq!(to, Point::new(650.0, 360.0));

    let target = screen_of(&ed, Point::new(1200.0, 2000.0));
    release(&mut ed, target);
    assert_eq!(ed.state(), &InteractionState::Idle);
    assert_eq!(ed.graph().edges_between(a, b), 1);
    assert!(ed.connect_preview().is_none());
}

#[test]
fn test_connect_release_on_source_or_empty_adds_nothing() {
    let mut g = Graph::new();
    g.add_node("A", Category::Walkway, Point::new(1000.0, 2000.0));
    let mut ed = editor_with(g);
    ed.execute(Command::ToggleConnectMode).unwrap();

    click(&mut ed, Point::new(600.0, 350.0));
    press(&mut ed, Point::new(600.0, 350.0));
    release(&mut ed, Point::new(300.0, 300.0));

    assert_eq!(ed.graph().edge_count(), 0);
    assert!(!ed.can_undo());
}

#[test]
fn test_escape_abandons_connection() {
    let mut ed = editor_with(two_connected());
    ed.execute(Command::ToggleConnectMode).unwrap();
    press(&mut ed, Point::new(600.0, 350.0));
    key(&mut ed, Key::Escape);
    assert_eq!(ed.state(), &InteractionState::Idle);
    release(&mut ed, Point::new(650.0, 350.0));
    assert_eq!(ed.graph().edge_count(), 1);
}

// ── Viewport ──────────────────────────────────────────────────────────────

#[test]
fn test_scroll_zooms_around_pointer() {
    let mut ed = editor();
    let anchor = Point::new(300.0, 200.0);
    let world_before = ed.viewport().screen_to_world(anchor);
    ed.handle(InputEvent::Scrolled {
        pos: anchor,
        delta: 1.0,
    });
    assert!((ed.viewport().zoom() - 0.6).abs() < 1e-9);
    let world_after = ed.viewport().screen_to_world(anchor);
    assert!(world_before.distance(world_after) < 1e-6);
}

#[test]
fn test_zoom_is_clamped() {
    let mut ed = editor();
    for _ in 0..100 {
        ed.handle(InputEvent::Scrolled {
            pos: Point::new(600.0, 350.0),
            delta: 1.0,
        });
    }
    assert!((ed.viewport().zoom() - 3.0).abs() < 1e-9);
    for _ in 0..100 {
        ed.handle(InputEvent::Scrolled {
            pos: Point::new(600.0, 350.0),
            delta: -1.0,
        });
    }
    assert!((ed.viewport().zoom() - 0.1).abs() < 1e-9);
}

#[test]
fn test_arrow_and_wasd_keys_pan() {
    let mut ed = editor();
    let start = ed.viewport().camera();
    key(&mut ed, Key::Right);
    assert!((ed.viewport().camera().x - (start.x + 400.0)).abs() < 1e-9);
    key(&mut ed, Key::Char('a'));
    assert!((ed.viewport().camera().x - start.x).abs() < 1e-9);
    key(&mut ed, Key::Char('s'));
    assert!((ed.viewport().camera().y - (start.y + 400.0)).abs() < 1e-9);
}

#[test]
fn test_wasd_pan_ignores_case() {
    let mut ed = editor();
    let start = ed.viewport().camera();
    key(&mut ed, Key::Char('D'));
    assert!((ed.viewport().camera().x - (start.x + 400.0)).abs() < 1e-9);
    ed.handle(InputEvent::KeyPressed {
        key: Key::Char('A'),
        modifiers: Modifiers {
            shift: true,
            ..Modifiers::NONE
        },
    });
    assert!((ed.viewport().camera().x - start.x).abs() < 1e-9);
    key(&mut ed, Key::Char('W'));
    assert!((ed.viewport().camera().y - (start.y - 400.0)).abs() < 1e-9);
}

#[test]
fn test_camera_cannot_leave_image() {
    let mut ed = editor();
    for _ in 0..50 {
        key(&mut ed, Key::Left);
    }
    let visible = ed.viewport().visible_world();
    assert!((visible.right() - 15.0).abs() < 1e-9);
}

// ── Hover ─────────────────────────────────────────────────────────────────

#[test]
fn test_hover_labels() {
    let mut ed = editor_with(two_connected());
    move_to(&mut ed, Point::new(600.0, 350.0));
    assert_eq!(ed.hover_label().as_deref(), Some("Node: Library (building)"));

    move_to(&mut ed, Point::new(625.0, 350.0));
    assert_eq!(
        ed.hover_label().as_deref(),
        Some("Edge: Library <-> Main Gate")
    );

    move_to(&mut ed, Point::new(100.0, 100.0));
    assert_eq!(ed.hover(), Hover::default());
    assert!(ed.hover_label().is_none());
}

// ── Commands ──────────────────────────────────────────────────────────────

#[test]
fn test_delete_selected_node_cascades() {
    let mut ed = editor_with(two_connected());
    click(&mut ed, Point::new(600.0, 350.0));
    assert_eq!(ed.execute(Command::Delete).unwrap(), CommandOutcome::Done);
    assert_eq!(ed.graph().node_count(), 1);
    assert_eq!(ed.graph().edge_count(), 0);
    assert_eq!(ed.selection(), Selection::None);
}

#[test]
fn test_delete_selected_edge_only() {
    let mut ed = editor_with(two_connected());
    click(&mut ed, Point::new(625.0, 352.0));
    ed.execute(Command::Delete).unwrap();
    assert_eq!(ed.graph().node_count(), 2);
    assert_eq!(ed.graph().edge_count(), 0);
}

#[test]
fn test_delete_without_selection_is_ignored() {
    let mut ed = editor_with(two_connected());
    assert_eq!(ed.execute(Command::Delete).unwrap(), CommandOutcome::Ignored);
    assert_eq!(ed.graph().node_count(), 2);
}

#[test]
fn test_rename_prompt_is_prefilled() {
    let mut ed = editor_with(two_connected());
    let lib = ed.graph().nodes().next().unwrap().0;
    click(&mut ed, Point::new(600.0, 350.0));
    ed.execute(Command::Rename).unwrap();
    assert_eq!(ed.state().text_prompt().unwrap().buffer, "Library");

    for _ in 0.."Library".len() {
        key(&mut ed, Key::Backspace);
    }
    type_text(&mut ed, "Science Block");
    key(&mut ed, Key::Enter);
    assert_eq!(ed.graph().node(lib).unwrap().name, "Science Block");
}

#[test]
fn test_rename_without_node_selection_is_ignored() {
    let mut ed = editor_with(two_connected());
    assert_eq!(ed.execute(Command::Rename).unwrap(), CommandOutcome::Ignored);
    assert_eq!(
        ed.execute(Command::RenameTo("X".into())).unwrap(),
        CommandOutcome::Ignored
    );
}

#[test]
fn test_rename_to_same_name_still_records() {
    let mut ed = editor_with(two_connected());
    click(&mut ed, Point::new(600.0, 350.0));
    ed.execute(Command::RenameTo("Library".into())).unwrap();
    assert!(ed.can_undo());
}

#[test]
fn test_commands_suspended_during_text_input() {
    let mut ed = editor_with(two_connected());
    click(&mut ed, Point::new(600.0, 350.0));
    ed.execute(Command::Rename).unwrap();
    assert_eq!(ed.execute(Command::Delete).unwrap(), CommandOutcome::Ignored);
    assert_eq!(ed.execute(Command::Undo).unwrap(), CommandOutcome::Ignored);
    assert_eq!(ed.graph().node_count(), 2);
}

#[test]
fn test_keyboard_undo_redo_clears_selection() {
    let mut ed = editor();
    ed.execute(Command::Place(Category::Building)).unwrap();
    click(&mut ed, Point::new(600.0, 350.0));
    type_text(&mut ed, "Library");
    key(&mut ed, Key::Enter);
    click(&mut ed, Point::new(600.0, 350.0));
    assert!(matches!(ed.selection(), Selection::Node(_)));

    ctrl(&mut ed, 'z');
    assert!(ed.graph().is_empty());
    assert_eq!(ed.selection(), Selection::None);

    ctrl(&mut ed, 'y');
    assert_eq!(ed.graph().node_count(), 1);
    assert!(!ed.can_redo());
}

#[test]
fn test_undo_with_nothing_recorded_is_ignored() {
    let mut ed = editor();
    assert_eq!(ed.execute(Command::Undo).unwrap(), CommandOutcome::Ignored);
    assert_eq!(ed.execute(Command::Redo).unwrap(), CommandOutcome::Ignored);
}

// ── Import / export ───────────────────────────────────────────────────────

#[test]
fn test_import_command_replaces_graph() {
    let config = EditorConfig::default();
    let store = MemoryStore::with_file(config.import_path.clone(), SCRIPT);
    let mut ed = Editor::with_store(config, store);
    ed.execute(Command::Place(Category::Walkway)).unwrap();

    let outcome = ed.execute(Command::Import).unwrap();
    let CommandOutcome::Imported(report) = outcome else {
        panic!("expected import report, got {outcome:?}");
    };
    assert_eq!(report.nodes, 2);
    assert_eq!(report.edges, 1);
    assert!(report.skipped.is_empty());
    assert_eq!(ed.state(), &InteractionState::Idle);

    // The import is one undoable step back to the empty graph.
    ed.execute(Command::Undo).unwrap();
    assert!(ed.graph().is_empty());
}

/// Reads nothing, refuses every write.
struct ReadOnlyStore;

impl TextStore for ReadOnlyStore {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file: {}", path.display()),
        ))
    }

    fn write_text(&self, _path: &Path, _text: &str) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read-only store",
        ))
    }
}

#[test]
fn test_failed_export_reports_and_leaves_document_untouched() {
    let mut ed = Editor::with_graph(EditorConfig::default(), ReadOnlyStore, two_connected());
    click(&mut ed, Point::new(600.0, 350.0));
    ed.execute(Command::RenameTo("Old Library".into())).unwrap();

    let before = ed.graph().clone();
    let len = ed.document().history().len();
    let cursor = ed.document().history().cursor();

    let err = ed.execute(Command::Export).unwrap_err();
    let EditorError::Write { path, source } = &err else {
        panic!("expected a write error, got {err:?}");
    };
    assert_eq!(path, Path::new("export/graphDatabase.js"));
    assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
    assert!(err.to_string().contains("cannot write 'export/graphDatabase.js'"));

    assert_eq!(ed.graph(), &before);
    assert_eq!(ed.document().history().len(), len);
    assert_eq!(ed.document().history().cursor(), cursor);
    assert!(ed.can_undo());
    assert!(!ed.can_redo());
}

#[test]
fn test_import_missing_file_leaves_graph_untouched() {
    let mut ed = editor_with(two_connected());
    let before = ed.graph().clone();
    let err = ed.execute(Command::Import).unwrap_err();
    assert!(matches!(err, EditorError::Read { .. }));
    assert_eq!(err.path(), Path::new("storage/graphDatabase.js"));
    assert_eq!(ed.graph(), &before);
    assert!(!ed.can_undo());
}

#[test]
fn test_export_command_writes_script() {
    let mut ed = editor_with(two_connected());
    let outcome = ed.execute(Command::Export).unwrap();
    assert_eq!(
        outcome,
        CommandOutcome::Exported("export/graphDatabase.js".into())
    );
    let text = ed
        .store()
        .get(Path::new("export/graphDatabase.js"))
        .expect("written");
    assert!(text.contains("const Library = new GraphNode('Library', 'building', 1000, 2000);"));
    assert!(text.contains("this.utechgraph.set('Main Gate', Main_Gate);"));
    assert!(text.contains("Library.addBidirectionalNeighbor(Main_Gate);"));
    assert!(!ed.can_undo());
}

#[test]
fn test_export_uses_configured_registry() {
    let config = EditorConfig {
        registry: "campus.graph".to_string(),
        ..EditorConfig::default()
    };
    let ed = Editor::with_graph(config, MemoryStore::new(), two_connected());
    let text = ed.export_to(Path::new("out.js")).unwrap();
    assert!(text.contains("// Add to campus.graph\n"));
    assert!(text.contains("campus.graph.set('Library', Library);"));
}

#[test]
fn test_export_to_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export").join("graphDatabase.js");
    let config = EditorConfig {
        export_path: path.clone(),
        ..EditorConfig::default()
    };
    let mut ed = Editor::new(config);
    ed.execute(Command::Export).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "// Created Nodes\n\n// Add to this.utechgraph\n\n// Connections\n"
    );
}
