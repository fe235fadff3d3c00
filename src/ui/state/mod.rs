// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Gesture state lives here, separate from the widgets that render it.

pub mod drag;

pub use drag::{DismissDrag, DragOutcome};
