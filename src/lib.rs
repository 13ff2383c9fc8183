// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fastflow: keyboard-only flow chart editing in the terminal.
//!
//! The `editor` module holds the interaction state machine; `model`, `place`
//! and `render` are its collaborators; `tui` is the interactive shell.

pub mod editor;
pub mod model;
pub mod place;
pub mod render;
pub mod tui;
