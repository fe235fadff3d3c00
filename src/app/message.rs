// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::ui::notifications::OverlayMessage;

/// Toast presets offered by the demo buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Info,
    Success,
    Warning,
    Error,
    /// Title and description resolved at render time.
    Localized,
    /// Runs an action when tapped.
    Action,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Add(Preset),
    ClearAll,
    Notification(OverlayMessage),
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Optional close delay override in seconds (`--close-delay`).
    pub close_delay: Option<f64>,
}
