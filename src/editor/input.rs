//! Input events and commands accepted by the editor.

use std::path::PathBuf;

use crate::dsl::ImportReport;
use crate::geometry::Point;
use crate::model::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
    };
}

/// Raw events from the input source. Positions are in screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerPressed { pos: Point, button: PointerButton },
    PointerReleased { pos: Point, button: PointerButton },
    PointerMoved { pos: Point },
    /// Wheel notches; positive zooms in.
    Scrolled { pos: Point, delta: f64 },
    KeyPressed { key: Key, modifiers: Modifiers },
    TextEntered(String),
}

/// Toolbar-level actions.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Arm placement of a node of this category.
    Place(Category),
    ToggleConnectMode,
    /// Open a text prompt to rename the selected node.
    Rename,
    /// Rename the selected node directly.
    RenameTo(String),
    Delete,
    Undo,
    Redo,
    Import,
    Export,
}

/// What a command did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Done,
    /// Nothing to act on (no selection, nothing to undo, or text entry active).
    Ignored,
    Imported(ImportReport),
    Exported(PathBuf),
}
