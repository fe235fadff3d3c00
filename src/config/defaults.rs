// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Close delay**: Auto-dismiss delay applied by a notification store
//! - **Gestures**: Drag-to-dismiss thresholds

// ==========================================================================
// Close Delay Defaults
// ==========================================================================

/// Default delay before a notification dismisses itself (in seconds).
pub const DEFAULT_CLOSE_DELAY_SECS: f64 = 3.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Upward travel (in logical pixels) past which a drag dismisses a toast.
pub const DEFAULT_DISMISS_DISTANCE: f32 = 48.0;

/// Minimum dismiss distance.
pub const MIN_DISMISS_DISTANCE: f32 = 16.0;

/// Maximum dismiss distance.
pub const MAX_DISMISS_DISTANCE: f32 = 400.0;

/// Travel below which a press/release pair counts as a tap.
pub const TAP_SLOP: f32 = 4.0;

/// How far ahead (in seconds) the drag velocity is projected when deciding
/// whether a flick dismisses.
pub const FLICK_PROJECTION_SECS: f32 = 0.25;

/// Shortest interval between two velocity samples. Events delivered in the
/// same frame are closer together than this and would read as huge speeds.
pub const MIN_VELOCITY_SAMPLE_SECS: f32 = 0.008;

/// Resistance applied when dragging away from the dismiss direction.
pub const DOWNWARD_RESISTANCE: f32 = 15.0;
