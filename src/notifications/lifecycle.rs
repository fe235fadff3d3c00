// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle: feedback cue on display and the auto-dismiss timer.
//!
//! The presentation layer starts one [`Lifecycle`] when a toast appears and
//! disposes it when the toast goes away. Disposal is explicit (or happens on
//! drop) and cancels the pending timer, so a torn-down toast never issues a
//! removal.

use super::entry::{NotificationEntry, NotificationId};
use super::feedback::FeedbackSink;
use super::store::NotificationStore;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Binds the auto-dismiss timer of one notification to its display time.
#[derive(Debug)]
pub struct Lifecycle {
    id: NotificationId,
    timer: Option<AbortHandle>,
}

impl Lifecycle {
    /// Plays the entry's feedback cue, if any, and schedules its removal
    /// from `store` after the store's dismiss delay.
    ///
    /// The timer runs on the ambient tokio runtime, which the overlay requires
    /// (iced's `tokio` executor provides it during `update`). Outside of one, no timer
    /// is scheduled and the entry stays until dismissed by the user.
    pub fn start(
        entry: &NotificationEntry,
        store: &NotificationStore,
        feedback: &dyn FeedbackSink,
    ) -> Self {
        let id = entry.id();

        if let Some(kind) = entry.category().feedback() {
            if let Err(err) = feedback.emit(kind) {
                tracing::debug!(?id, ?kind, error = %err, "feedback cue failed");
            }
        }

        let delay = store.dismiss_delay();
        let deadline = Instant::now() + delay;
        let store = store.downgrade();

        let timer = match Handle::try_current() {
            Ok(runtime) => {
                let task = runtime.spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    if let Some(store) = store.upgrade() {
                        let removed = store.remove(id);
                        tracing::debug!(?id, removed, "close delay elapsed");
                    }
                });
                tracing::debug!(?id, ?delay, "dismiss timer started");
                Some(task.abort_handle())
            }
            Err(err) => {
                tracing::warn!(?id, error = %err, "no tokio runtime, toast will not auto-dismiss");
                None
            }
        };

        Self { id, timer }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Whether the timer is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    /// Cancels the timer. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(timer) = self.timer.take() {
            if !timer.is_finished() {
                tracing::debug!(id = ?self.id, "dismiss timer cancelled");
            }
            timer.abort();
        }
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::notifications::{Category, FeedbackKind, NoFeedback};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingFeedback {
        played: Mutex<Vec<FeedbackKind>>,
    }

    impl FeedbackSink for RecordingFeedback {
        fn emit(&self, kind: FeedbackKind) -> Result<()> {
            self.played.lock().unwrap().push(kind);
            Ok(())
        }
    }

    struct BrokenFeedback;

    impl FeedbackSink for BrokenFeedback {
        fn emit(&self, _kind: FeedbackKind) -> Result<()> {
            Err(Error::Feedback("device unavailable".into()))
        }
    }

    async fn settle() {
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    fn store_with_entry(secs: f64) -> (NotificationStore, NotificationEntry) {
        let store = NotificationStore::with_close_delay_secs(secs);
        let entry = NotificationEntry::info("timed");
        store.add(entry.clone());
        (store, entry)
    }

    #[tokio::test(start_paused = true)]
    async fn timer_removes_entry_after_delay() {
        let (store, entry) = store_with_entry(3.0);
        let removals = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&removals);
        let _guard = store.observe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let lifecycle = Lifecycle::start(&entry, &store, &NoFeedback);
        assert!(lifecycle.is_pending());

        tokio::time::advance(Duration::from_millis(2_999)).await;
        settle().await;
        assert!(store.contains(entry.id()));
        assert_eq!(removals.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(!store.contains(entry.id()));
        assert_eq!(removals.load(Ordering::SeqCst), 1);
        assert!(!lifecycle.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_before_delay_prevents_removal() {
        let (store, entry) = store_with_entry(3.0);
        let mut lifecycle = Lifecycle::start(&entry, &store, &NoFeedback);

        tokio::time::advance(Duration::from_secs(1)).await;
        lifecycle.dispose();
        lifecycle.dispose();
        assert!(!lifecycle.is_pending());

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert!(store.contains(entry.id()));
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_timer() {
        let (store, entry) = store_with_entry(3.0);
        drop(Lifecycle::start(&entry, &store, &NoFeedback));

        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert!(store.contains(entry.id()));
    }

    #[tokio::test(start_paused = true)]
    async fn timer_after_manual_removal_is_harmless() {
        let (store, entry) = store_with_entry(3.0);
        let other = NotificationEntry::info("other");
        store.add(other.clone());
        let _lifecycle = Lifecycle::start(&entry, &store, &NoFeedback);

        store.remove(entry.id());
        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;

        assert_eq!(store.len(), 1);
        assert!(store.contains(other.id()));
    }

    #[tokio::test(start_paused = true)]
    async fn timer_outliving_store_does_nothing() {
        let (store, entry) = store_with_entry(3.0);
        let lifecycle = Lifecycle::start(&entry, &store, &NoFeedback);
        drop(store);

        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;
        assert!(!lifecycle.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn feedback_plays_once_for_categories_with_a_cue() {
        let store = NotificationStore::default();
        let feedback = RecordingFeedback::default();

        let _error = Lifecycle::start(&NotificationEntry::error("e"), &store, &feedback);
        let _info = Lifecycle::start(&NotificationEntry::info("i"), &store, &feedback);
        let custom = NotificationEntry::new(
            Category::custom(None, Some(FeedbackKind::Success)),
            "c",
        );
        let _custom = Lifecycle::start(&custom, &store, &feedback);

        assert_eq!(
            *feedback.played.lock().unwrap(),
            vec![FeedbackKind::Error, FeedbackKind::Success]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn feedback_failure_does_not_prevent_timer() {
        let store = NotificationStore::with_close_delay_secs(1.0);
        let entry = NotificationEntry::warning("w");
        store.add(entry.clone());

        let lifecycle = Lifecycle::start(&entry, &store, &BrokenFeedback);
        assert!(lifecycle.is_pending());

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert!(store.is_empty());
    }

    #[test]
    fn start_without_runtime_schedules_nothing() {
        let (store, entry) = store_with_entry(3.0);
        let lifecycle = Lifecycle::start(&entry, &store, &NoFeedback);

        assert!(!lifecycle.is_pending());
        assert_eq!(lifecycle.id(), entry.id());
        assert!(store.contains(entry.id()));
    }
}
