// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::{Duration, Instant};

use super::{GraphView, InputWidget};
use crate::model::{GraphStore, NodeId};
use crate::place::Direction;

/// How long after `begin_edit` a re-delivered command keystroke is refused.
///
/// The keystroke that triggers a mode transition (the direction key that
/// spawned the node, or the Enter that opened re-labeling) can be handed to
/// the freshly focused input widget again by the host toolkit. The window
/// bounds how long that stale delivery is treated as noise.
pub const GUARD_WINDOW: Duration = Duration::from_millis(50);

/// Owns the text buffer for the node currently being labeled.
///
/// Labels are live-updated: every accepted buffer report is written through
/// to the store immediately, not only on commit. The target node id is held
/// here for the whole edit, so the write path never has to re-derive which
/// node is being edited.
#[derive(Debug, Default)]
pub struct LabelEditor {
    target: Option<NodeId>,
    accepting: bool,
    guard_deadline: Option<Instant>,
    buffer: String,
}

impl LabelEditor {
    /// Starts an edit against `target`: clears the buffer, shows and
    /// focuses the widget, and arms the single-shot leak guard.
    pub fn begin_edit(&mut self, target: NodeId, now: Instant, input: &mut impl InputWidget) {
        self.target = Some(target);
        self.accepting = true;
        self.buffer.clear();
        self.guard_deadline = Some(now + GUARD_WINDOW);
        input.set_value("");
        input.show();
        input.focus();
    }

    /// Accepts a new buffer value from the widget and writes it through to
    /// the store.
    ///
    /// While the guard deadline is live, a report that is exactly one
    /// reserved command character (`w`/`a`/`s`/`d`) is discarded and the
    /// widget forced back to empty. The deadline is consumed by the first
    /// report either way. A report with no active edit is a no-op.
    pub fn on_buffer_change(
        &mut self,
        text: &str,
        now: Instant,
        graph: &mut GraphStore,
        input: &mut impl InputWidget,
    ) {
        if !self.accepting {
            return;
        }
        let Some(target) = &self.target else {
            return;
        };

        if let Some(deadline) = self.guard_deadline.take() {
            if now < deadline && Direction::is_reserved_key(text) {
                self.buffer.clear();
                input.set_value("");
                return;
            }
        }

        self.buffer.clear();
        self.buffer.push_str(text);
        graph.set_label(target, text);
    }

    /// Ends the edit: hides the widget and returns focus to the graph
    /// surface. The target keeps pointing at the just-edited node, but no
    /// further buffer reports are accepted until the next `begin_edit`.
    pub fn commit(&mut self, input: &mut impl InputWidget, view: &mut impl GraphView) {
        self.accepting = false;
        self.guard_deadline = None;
        input.hide();
        view.focus_surface();
    }

    pub fn target(&self) -> Option<&NodeId> {
        self.target.as_ref()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }
}
