// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A session holds one append-only graph of labeled nodes and the edges that
//! connect them.

pub mod graph;
pub mod ids;

pub use graph::{Edge, GraphError, GraphStore, Node, Point};
pub use ids::{EdgeId, IdError, NodeId};
