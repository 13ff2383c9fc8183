// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Node placement.
//!
//! Maps an anchor node and a direction command to the new node's id and
//! position plus the edge that ties it back to the anchor. Pure computation,
//! no store access.

use crate::model::{Node, NodeId, Point};

/// Horizontal spawn distance in world units.
pub const STEP_X: i32 = 200;
/// Vertical spawn distance in world units.
pub const STEP_Y: i32 = 100;

/// A spawn direction, mapped from the reserved command keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Maps `w`/`s`/`a`/`d` to a direction. Every other character is not a
    /// spawn command.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::Up),
            's' => Some(Self::Down),
            'a' => Some(Self::Left),
            'd' => Some(Self::Right),
            _ => None,
        }
    }

    /// True for the characters the label-editor guard must refuse while a
    /// mode transition is still settling.
    pub fn is_reserved_key(text: &str) -> bool {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_key(ch).is_some(),
            _ => false,
        }
    }

    fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -STEP_Y),
            Self::Down => (0, STEP_Y),
            Self::Left => (-STEP_X, 0),
            Self::Right => (STEP_X, 0),
        }
    }
}

/// Everything the controller needs to materialize one spawn: the new node's
/// id and position, and the edge endpoints `anchor -> new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub node_id: NodeId,
    pub position: Point,
    pub edge_source: NodeId,
    pub edge_target: NodeId,
}

/// Computes where a node spawned from `anchor` in `direction` lands.
///
/// The new id is the anchor id's successor; ids stay the contiguous sequence
/// 1..N because nodes are only ever appended against the latest node.
pub fn place(anchor: &Node, direction: Direction) -> Placement {
    let (dx, dy) = direction.offset();
    let anchor_position = anchor.position();
    let node_id = anchor.id().successor();

    Placement {
        position: Point::new(anchor_position.x + dx, anchor_position.y + dy),
        edge_source: anchor.id().clone(),
        edge_target: node_id.clone(),
        node_id,
    }
}
