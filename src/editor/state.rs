//! Interaction states of the editor.

use crate::geometry::Point;
use crate::model::{Category, NodeId, display_name};

/// What the pointer/keyboard is currently doing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Next press on empty canvas names and places a node of this category.
    Placing(Category),
    /// A node follows the pointer, offset by where it was grabbed.
    DraggingNode { node: NodeId, grab_offset: Point },
    /// The camera follows the pointer from where the press happened.
    DraggingCamera { press: Point, camera_start: Point },
    /// Rubber band from `from` to the live pointer (screen space).
    Connecting { from: NodeId, pointer: Point },
    /// Modal text entry; everything else is suspended.
    TextInput(TextPrompt),
}

impl InteractionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Placing(_) => "placing",
            Self::DraggingNode { .. } => "dragging-node",
            Self::DraggingCamera { .. } => "dragging-camera",
            Self::Connecting { .. } => "connecting",
            Self::TextInput(_) => "text-input",
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::TextInput(_))
    }

    pub fn text_prompt(&self) -> Option<&TextPrompt> {
        match self {
            Self::TextInput(prompt) => Some(prompt),
            _ => None,
        }
    }

    /// Gestures that hold a node handle.
    pub(crate) fn holds_node(&self) -> bool {
        matches!(self, Self::DraggingNode { .. } | Self::Connecting { .. })
    }
}

/// Pending text entry and what to do with it on confirm.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrompt {
    pub prompt: String,
    pub buffer: String,
    pub on_commit: TextCommit,
}

impl TextPrompt {
    pub fn new(prompt: impl Into<String>, buffer: impl Into<String>, on_commit: TextCommit) -> Self {
        Self {
            prompt: prompt.into(),
            buffer: buffer.into(),
            on_commit,
        }
    }

    /// Trimmed buffer, or `"Unnamed"` when blank.
    pub fn committed_text(&self) -> String {
        display_name(self.buffer.trim())
    }
}

/// Action run with the confirmed text.
#[derive(Debug, Clone, PartialEq)]
pub enum TextCommit {
    PlaceNode { category: Category, position: Point },
    RenameNode(NodeId),
}
