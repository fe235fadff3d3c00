// SPDX-License-Identifier: MPL-2.0
//! Dismiss gesture state
//!
//! Turns the raw press/move/release stream of a toast into at most one
//! outcome per press: a tap, or a dismissal when the toast is dragged (or
//! flicked) far enough toward the top edge.

use crate::config::{
    DOWNWARD_RESISTANCE, FLICK_PROJECTION_SECS, MIN_VELOCITY_SAMPLE_SECS, TAP_SLOP,
};
use iced::Point;
use std::time::Instant;

/// What a gesture event resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing to act on yet.
    None,
    /// The press ended without moving: run the tap action, then remove.
    Tap,
    /// The toast was dragged away: remove it.
    Dismiss,
}

/// Tracks one toast's press-and-drag interaction.
#[derive(Debug, Clone)]
pub struct DismissDrag {
    /// Upward travel past which the toast is dismissed.
    dismiss_distance: f32,

    /// Last cursor position over the toast, pressed or not
    hover: Option<Point>,

    /// Whether the mouse button is currently held on the toast
    pressed: bool,

    /// Position where the press started
    origin: Option<Point>,

    /// Latest cursor position while pressed
    current: Option<Point>,

    /// Last position used for velocity estimation
    sample: Option<(Point, Instant)>,

    /// Vertical velocity in pixels per second (negative is upward)
    velocity: f32,

    /// Farthest distance from the origin reached during this press
    travel: f32,

    /// Whether this press already produced a dismissal
    dismissed: bool,
}

impl DismissDrag {
    #[must_use]
    pub fn new(dismiss_distance: f32) -> Self {
        Self {
            dismiss_distance,
            hover: None,
            pressed: false,
            origin: None,
            current: None,
            sample: None,
            velocity: 0.0,
            travel: 0.0,
            dismissed: false,
        }
    }

    /// Starts a press at the last hovered position.
    pub fn press(&mut self) {
        self.reset_press();
        self.pressed = true;
        self.origin = self.hover;
    }

    /// Feeds a cursor position sampled at `at`.
    pub fn moved(&mut self, position: Point, at: Instant) -> DragOutcome {
        self.hover = Some(position);
        if !self.pressed {
            return DragOutcome::None;
        }

        let Some(origin) = self.origin else {
            self.origin = Some(position);
            self.current = Some(position);
            self.sample = Some((position, at));
            return DragOutcome::None;
        };

        match self.sample {
            Some((previous, sampled_at)) => {
                let elapsed = at.saturating_duration_since(sampled_at).as_secs_f32();
                if elapsed >= MIN_VELOCITY_SAMPLE_SECS {
                    self.velocity = (position.y - previous.y) / elapsed;
                    self.sample = Some((position, at));
                }
            }
            None => self.sample = Some((position, at)),
        }
        self.current = Some(position);
        self.travel = self.travel.max(origin.distance(position));

        let translation = position.y - origin.y;
        let projected = translation + self.velocity * FLICK_PROJECTION_SECS;
        if !self.dismissed && projected < -self.dismiss_distance {
            self.dismissed = true;
            return DragOutcome::Dismiss;
        }
        DragOutcome::None
    }

    /// Ends the press.
    pub fn release(&mut self) -> DragOutcome {
        if !self.pressed {
            return DragOutcome::None;
        }
        let outcome = if !self.dismissed && self.travel < TAP_SLOP {
            DragOutcome::Tap
        } else {
            DragOutcome::None
        };
        self.reset_press();
        outcome
    }

    /// The cursor left the toast. Leaving through the top edge while pressed
    /// and dragging upward counts as a dismissal.
    pub fn exit(&mut self) -> DragOutcome {
        let outcome = if self.pressed && !self.dismissed && self.translation() < -TAP_SLOP {
            DragOutcome::Dismiss
        } else {
            DragOutcome::None
        };
        self.reset_press();
        self.hover = None;
        outcome
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Vertical offset to render the toast at while dragging.
    ///
    /// Upward drags follow the cursor up to the dismiss distance, downward
    /// drags are heavily resisted.
    #[must_use]
    pub fn offset(&self) -> f32 {
        if !self.pressed {
            return 0.0;
        }
        let translation = self.translation();
        if translation < 0.0 {
            translation.max(-self.dismiss_distance)
        } else {
            (translation / DOWNWARD_RESISTANCE).min(self.dismiss_distance / DOWNWARD_RESISTANCE)
        }
    }

    fn translation(&self) -> f32 {
        match (self.origin, self.current) {
            (Some(origin), Some(position)) => position.y - origin.y,
            _ => 0.0,
        }
    }

    fn reset_press(&mut self) {
        self.pressed = false;
        self.origin = None;
        self.current = None;
        self.sample = None;
        self.velocity = 0.0;
        self.travel = 0.0;
        self.dismissed = false;
    }
}
