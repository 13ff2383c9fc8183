// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drives a whole editing session through the public API: spawn, label,
//! toggle modes, cycle the selection and re-label, checking the structural
//! invariants after every step.

use std::time::Instant;

use rstest::rstest;

use fastflow::editor::{Command, EditorState, FlowEditor, GraphView, InputWidget, GUARD_WINDOW};
use fastflow::model::GraphStore;
use fastflow::place::Direction;
use fastflow::render::render_graph;

#[derive(Debug, Default)]
struct NullView;

impl GraphView for NullView {
    fn fit_view(&mut self) {}

    fn focus_surface(&mut self) {}
}

#[derive(Debug, Default)]
struct BufferWidget {
    visible: bool,
    value: String,
}

impl InputWidget for BufferWidget {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn focus(&mut self) {}

    fn set_value(&mut self, text: &str) {
        self.value.clear();
        self.value.push_str(text);
    }

    fn value(&self) -> &str {
        &self.value
    }
}

type Editor = FlowEditor<NullView, BufferWidget>;

struct Session {
    editor: Editor,
    now: Instant,
}

impl Session {
    fn start() -> Self {
        let now = Instant::now();
        Self { editor: FlowEditor::new_at(NullView, BufferWidget::default(), now), now }
    }

    fn apply(&mut self, command: Command) {
        // Always past the guard window: the walkthrough types deliberately.
        self.now += GUARD_WINDOW;
        self.editor.apply_at(command, self.now).expect("apply command");
    }

    fn label(&mut self, text: &str) {
        let mut buffer = String::new();
        for ch in text.chars() {
            buffer.push(ch);
            self.apply(Command::BufferChanged(buffer.clone()));
        }
        self.apply(Command::Confirm);
    }

    fn graph(&self) -> &GraphStore {
        self.editor.graph()
    }

    fn assert_invariants(&self) {
        let graph = self.graph();
        assert!(graph.node_count() >= 1, "the node list must never be empty");
        assert_eq!(graph.edge_count(), graph.node_count() - 1);

        for (index, node) in graph.nodes().iter().enumerate() {
            assert_eq!(node.id().seq(), index as u64 + 1, "ids must stay contiguous");
        }
        for edge in graph.edges() {
            assert!(graph.node(edge.source()).is_some());
            assert!(graph.node(edge.target()).is_some());
        }

        let highlighted = graph.nodes().iter().filter(|node| node.highlighted()).count();
        assert!(highlighted <= 1, "at most one node may be highlighted");
    }
}

#[test]
fn a_chart_grows_one_labeled_box_at_a_time() {
    let mut session = Session::start();
    session.label("Idea");
    session.assert_invariants();

    for (direction, label) in [
        (Direction::Down, "Draft"),
        (Direction::Right, "Review"),
        (Direction::Down, "Publish"),
    ] {
        session.apply(Command::Spawn(direction));
        assert_eq!(session.editor.state(), EditorState::CreateLabeling);
        session.label(label);
        session.assert_invariants();
    }

    let graph = session.graph();
    assert_eq!(graph.node_count(), 4);
    let labels: Vec<&str> = graph.nodes().iter().map(|node| node.label()).collect();
    assert_eq!(labels, ["Idea", "Draft", "Review", "Publish"]);

    let edge_ids: Vec<&str> = graph.edges().iter().map(|edge| edge.id().as_str()).collect();
    assert_eq!(edge_ids, ["e1-2", "e2-3", "e3-4"]);
}

#[test]
fn edit_mode_revisits_and_relabels_any_box() {
    let mut session = Session::start();
    session.label("Idea");
    session.apply(Command::Spawn(Direction::Down));
    session.label("Draft");
    session.apply(Command::Spawn(Direction::Down));
    session.label("Publish");

    session.apply(Command::ToggleMode);
    assert_eq!(session.editor.state(), EditorState::EditNavigating);

    // Walk the cursor to the middle box and rewrite its label.
    session.apply(Command::CycleSelection);
    session.apply(Command::Confirm);
    assert_eq!(session.editor.state(), EditorState::EditLabeling);
    session.label("Draft v2");

    session.apply(Command::ToggleMode);
    assert_eq!(session.editor.state(), EditorState::CreateNavigating);
    session.assert_invariants();

    let labels: Vec<&str> = session.graph().nodes().iter().map(|node| node.label()).collect();
    assert_eq!(labels, ["Idea", "Draft v2", "Publish"]);
}

#[test]
fn the_anchor_is_always_the_newest_box_even_after_editing() {
    let mut session = Session::start();
    session.label("Idea");
    session.apply(Command::Spawn(Direction::Right));
    session.label("Next");

    // Highlight the root in Edit mode, then go back to Create and spawn.
    session.apply(Command::ToggleMode);
    session.apply(Command::ToggleMode);
    session.apply(Command::Spawn(Direction::Down));
    session.label("Below");

    let graph = session.graph();
    let last_edge = graph.edges().last().expect("last edge");
    assert_eq!(last_edge.source().as_str(), "2", "spawns hang off the newest box");
    assert_eq!(last_edge.target().as_str(), "3");
    session.assert_invariants();
}

#[rstest]
#[case(2)]
#[case(5)]
#[case(9)]
fn cycling_the_selection_visits_every_box_once(#[case] spawns: usize) {
    let mut session = Session::start();
    session.label("root");
    for index in 0..spawns {
        session.apply(Command::Spawn(Direction::Right));
        session.label(&format!("box {index}"));
    }

    session.apply(Command::ToggleMode);

    let count = session.graph().node_count();
    let mut seen = Vec::new();
    for _ in 0..count {
        let index = session.editor.cursor_index();
        seen.push(index);
        session.apply(Command::CycleSelection);
    }

    assert_eq!(session.editor.cursor_index(), 0, "a full cycle ends where it started");
    let expected: Vec<usize> = (0..count).collect();
    assert_eq!(seen, expected);
    session.assert_invariants();
}

#[test]
fn the_finished_chart_renders_every_label() {
    let mut session = Session::start();
    session.label("Idea");
    session.apply(Command::Spawn(Direction::Down));
    session.label("Ship it");

    let render = render_graph(session.graph());
    let text = render.to_text();
    assert!(text.contains("Idea"));
    assert!(text.contains("Ship it"));
    assert_eq!(render.regions().len(), 2);
}
