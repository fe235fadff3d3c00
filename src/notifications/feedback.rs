// SPDX-License-Identifier: MPL-2.0
//! Sensory feedback cues played when a toast appears.
//!
//! The core only decides whether and when a cue plays (once, when the toast
//! starts displaying). How it plays is up to the [`FeedbackSink`] the host
//! provides: a haptic engine, a system sound, or nothing at all.

use crate::error::Result;

/// Kind of feedback cue attached to a notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
}

/// Device able to play a feedback cue.
pub trait FeedbackSink: Send + Sync {
    /// Plays the cue. Errors are reported to the caller, which ignores them.
    fn emit(&self, kind: FeedbackKind) -> Result<()>;
}

/// Sink that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn emit(&self, _kind: FeedbackKind) -> Result<()> {
        Ok(())
    }
}

/// Sink that records cues in the log, for hosts without haptic hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFeedback;

impl FeedbackSink for TracingFeedback {
    fn emit(&self, kind: FeedbackKind) -> Result<()> {
        tracing::info!(?kind, "feedback cue");
        Ok(())
    }
}
