// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::{EdgeId, NodeId};

/// Position in abstract world units. The renderer owns the projection to
/// terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    label: String,
    position: Point,
    highlighted: bool,
}

impl Node {
    /// A node starts with an empty label; the label editor fills it in.
    pub fn new(id: NodeId, position: Point) -> Self {
        Self { id, label: String::new(), position, highlighted: false }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        let id = EdgeId::for_link(&source, &target);
        Self { id, source, target }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }
}

/// Append-only container for the session's nodes and edges.
///
/// Nodes and edges are kept in creation order; nothing is ever removed. The
/// store does no I/O and applies every mutation synchronously, so a read
/// issued right after a write sees the new state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphStore {
    /// A fresh store seeded with the root node (id "1") at `root_position`.
    pub fn with_root(root_position: Point) -> Self {
        let mut store = Self::default();
        store.nodes.push(Node::new(NodeId::root(), root_position));
        store
    }

    pub fn append_node(&mut self, node: Node) -> Result<NodeId, GraphError> {
        if self.node(node.id()).is_some() {
            return Err(GraphError::DuplicateNode { id: node.id().clone() });
        }
        let id = node.id().clone();
        self.nodes.push(node);
        Ok(id)
    }

    pub fn append_edge(&mut self, edge: Edge) -> Result<EdgeId, GraphError> {
        if self.edges.iter().any(|existing| existing.id() == edge.id()) {
            return Err(GraphError::DuplicateEdge { id: edge.id().clone() });
        }
        for endpoint in [edge.source(), edge.target()] {
            if self.node(endpoint).is_none() {
                return Err(GraphError::UnknownEndpoint { id: endpoint.clone() });
            }
        }
        let id = edge.id().clone();
        self.edges.push(edge);
        Ok(id)
    }

    /// Silently ignores unknown ids: a label write for a node that does not
    /// exist is recoverable and must not interrupt the interaction loop.
    pub fn set_label(&mut self, id: &NodeId, text: &str) {
        if let Some(node) = self.node_mut(id) {
            node.set_label(text);
        }
    }

    pub fn set_highlight(&mut self, id: &NodeId, highlighted: bool) {
        if let Some(node) = self.node_mut(id) {
            node.set_highlighted(highlighted);
        }
    }

    pub fn clear_highlights(&mut self) {
        for node in &mut self.nodes {
            node.set_highlighted(false);
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id() == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The anchor for the next created node: the most recently appended one.
    pub fn last_node(&self) -> Result<&Node, GraphError> {
        self.nodes.last().ok_or(GraphError::EmptyGraph)
    }
}

/// Structural defects. Every variant indicates a broken invariant; callers
/// escalate these instead of absorbing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    EmptyGraph,
    DuplicateNode { id: NodeId },
    DuplicateEdge { id: EdgeId },
    UnknownEndpoint { id: NodeId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGraph => f.write_str("graph has no nodes"),
            Self::DuplicateNode { id } => write!(f, "node id already exists (id={id})"),
            Self::DuplicateEdge { id } => write!(f, "edge id already exists (id={id})"),
            Self::UnknownEndpoint { id } => {
                write!(f, "edge references a missing node (id={id})")
            }
        }
    }
}

impl std::error::Error for GraphError {}
