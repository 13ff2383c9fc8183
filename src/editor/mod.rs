// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The interaction state machine.
//!
//! One `FlowEditor` per session: it owns the graph store, the label editor
//! and the selection cursor, holds the current mode/sub-state, and applies
//! one command at a time. The terminal shell stays outside; it reaches the
//! editor only through [`Command`] values and the [`GraphView`] /
//! [`InputWidget`] seams.

use std::fmt;
use std::time::Instant;

use crate::model::{Edge, GraphError, GraphStore, Node, NodeId, Point};
use crate::place::{place, Direction};

pub mod cursor;
pub mod label;

pub use cursor::SelectionCursor;
pub use label::{LabelEditor, GUARD_WINDOW};

/// Where the root node lands, in world units.
pub const ROOT_POSITION: Point = Point { x: 250, y: 25 };

/// Top-level mode, derived from the current [`EditorState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Create,
    Edit,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Create => "CREATE",
            Mode::Edit => "EDIT",
        }
    }
}

/// The four reachable mode/sub-state pairs, as one tagged enum.
///
/// The source this replaces tracked the same machine across a mode string
/// and several booleans; a single enum makes illegal combinations
/// unrepresentable and keeps every transition in one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorState {
    CreateNavigating,
    CreateLabeling,
    EditNavigating,
    EditLabeling,
}

impl EditorState {
    pub fn mode(self) -> Mode {
        match self {
            Self::CreateNavigating | Self::CreateLabeling => Mode::Create,
            Self::EditNavigating | Self::EditLabeling => Mode::Edit,
        }
    }

    /// True while the input widget owns the keyboard.
    pub fn is_labeling(self) -> bool {
        matches!(self, Self::CreateLabeling | Self::EditLabeling)
    }
}

/// One keyboard command, already translated from the host's key event.
///
/// Keys that mean nothing in the active state are absorbed inside
/// [`FlowEditor::apply`]; the shell never needs to pre-filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `w`/`a`/`s`/`d` while navigating in Create mode.
    Spawn(Direction),
    /// Enter: commit a label, or begin re-labeling in Edit mode.
    Confirm,
    /// Escape: toggle Create and Edit while navigating.
    ToggleMode,
    /// Tab: cycle the selection cursor in Edit mode.
    CycleSelection,
    /// The input widget reported a new buffer value.
    BufferChanged(String),
}

/// The view side of the editor: repainting is the shell's own business (it
/// reads the store every frame), but fit and focus are commanded from here.
pub trait GraphView {
    /// Re-fit the viewport around the whole graph.
    fn fit_view(&mut self);
    /// Return keyboard focus to the graph surface.
    fn focus_surface(&mut self);
}

/// The label input box. The editor drives visibility, focus and value;
/// the widget reports edits back as [`Command::BufferChanged`].
pub trait InputWidget {
    fn show(&mut self);
    fn hide(&mut self);
    fn focus(&mut self);
    fn set_value(&mut self, text: &str);
    fn value(&self) -> &str;
}

/// A broken structural invariant escalated out of the interaction loop.
///
/// Recoverable conditions (unrecognized command, buffer report with no
/// active edit) never surface; only graph defects do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    Graph(GraphError),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graph(err) => write!(f, "graph invariant violated: {err}"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(err) => Some(err),
        }
    }
}

impl From<GraphError> for EditorError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

/// The mode controller: receives every keyboard command and runs the
/// transition table over `{state} x {command}`.
#[derive(Debug)]
pub struct FlowEditor<V, W> {
    graph: GraphStore,
    label: LabelEditor,
    cursor: SelectionCursor,
    state: EditorState,
    view: V,
    input: W,
}

impl<V: GraphView, W: InputWidget> FlowEditor<V, W> {
    /// A fresh session: one root node (id "1") at [`ROOT_POSITION`], and the
    /// machine already in `CreateLabeling` against it: the user labels the
    /// first box before anything else.
    pub fn new(view: V, input: W) -> Self {
        Self::new_at(view, input, Instant::now())
    }

    pub fn new_at(view: V, input: W, now: Instant) -> Self {
        let mut editor = Self {
            graph: GraphStore::with_root(ROOT_POSITION),
            label: LabelEditor::default(),
            cursor: SelectionCursor::default(),
            state: EditorState::CreateLabeling,
            view,
            input,
        };
        editor.label.begin_edit(NodeId::root(), now, &mut editor.input);
        editor.view.fit_view();
        editor
    }

    /// Applies one command to completion. Commands outside the active
    /// state's transition row are absorbed.
    pub fn apply(&mut self, command: Command) -> Result<(), EditorError> {
        self.apply_at(command, Instant::now())
    }

    pub fn apply_at(&mut self, command: Command, now: Instant) -> Result<(), EditorError> {
        match (self.state, command) {
            (EditorState::CreateNavigating, Command::Spawn(direction)) => {
                self.spawn(direction, now)?;
            }
            (EditorState::CreateLabeling, Command::Confirm) => {
                self.label.commit(&mut self.input, &mut self.view);
                self.state = EditorState::CreateNavigating;
            }
            (EditorState::CreateNavigating, Command::ToggleMode) => {
                self.enter_edit()?;
            }
            (EditorState::EditNavigating, Command::CycleSelection) => {
                self.cursor.advance(&mut self.graph)?;
            }
            (EditorState::EditNavigating, Command::Confirm) => {
                let target = self.cursor.current(&self.graph)?.clone();
                self.label.begin_edit(target, now, &mut self.input);
                self.state = EditorState::EditLabeling;
            }
            (EditorState::EditLabeling, Command::Confirm) => {
                self.label.commit(&mut self.input, &mut self.view);
                self.state = EditorState::EditNavigating;
            }
            (EditorState::EditNavigating, Command::ToggleMode) => {
                self.cursor.reset(&mut self.graph);
                self.state = EditorState::CreateNavigating;
            }
            (_, Command::BufferChanged(text)) => {
                self.label.on_buffer_change(&text, now, &mut self.graph, &mut self.input);
            }
            _ => {}
        }
        Ok(())
    }

    /// Create a node off the anchor (always the last-created node), link it,
    /// and drop straight into labeling it.
    fn spawn(&mut self, direction: Direction, now: Instant) -> Result<(), EditorError> {
        let placement = place(self.graph.last_node()?, direction);

        self.graph.append_node(Node::new(placement.node_id.clone(), placement.position))?;
        self.graph.append_edge(Edge::new(placement.edge_source, placement.edge_target))?;

        self.label.begin_edit(placement.node_id, now, &mut self.input);
        self.view.fit_view();
        self.state = EditorState::CreateLabeling;
        Ok(())
    }

    /// Escape from Create: selection starts over at the first node, which
    /// becomes the one highlighted node.
    fn enter_edit(&mut self) -> Result<(), EditorError> {
        self.cursor.reset(&mut self.graph);
        let first = self.cursor.current(&self.graph)?.clone();
        self.graph.set_highlight(&first, true);
        self.state = EditorState::EditNavigating;
        Ok(())
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn label_target(&self) -> Option<&NodeId> {
        self.label.target()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn input(&self) -> &W {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut W {
        &mut self.input
    }
}
