// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{GraphError, GraphStore, NodeId};

/// Edit-mode selection over the node list.
///
/// The index cycles through nodes in creation order and moves the single
/// highlight with it: after `advance` exactly one node is highlighted, after
/// `reset` none are.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCursor {
    index: usize,
}

impl SelectionCursor {
    /// Moves the cursor to the next node, wrapping past the last one, and
    /// shifts the highlight from the previous node to the new one.
    pub fn advance(&mut self, graph: &mut GraphStore) -> Result<(), GraphError> {
        let count = graph.node_count();
        if count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let previous = self.index;
        self.index = if self.index + 1 >= count { 0 } else { self.index + 1 };

        let previous_id = graph.nodes()[previous].id().clone();
        let current_id = graph.nodes()[self.index].id().clone();
        graph.set_highlight(&previous_id, false);
        graph.set_highlight(&current_id, true);
        Ok(())
    }

    /// The node the cursor currently points at.
    pub fn current<'a>(&self, graph: &'a GraphStore) -> Result<&'a NodeId, GraphError> {
        graph.nodes().get(self.index).map(|node| node.id()).ok_or(GraphError::EmptyGraph)
    }

    /// Returns the cursor to index 0 and clears every highlight.
    pub fn reset(&mut self, graph: &mut GraphStore) {
        self.index = 0;
        graph.clear_highlights();
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
