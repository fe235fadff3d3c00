// SPDX-License-Identifier: MPL-2.0
//! Notification overlay: renders a store's toasts above host content.
//!
//! The `Overlay` observes a [`NotificationStore`], keeps one [`Lifecycle`]
//! per displayed toast (starting it when the toast appears, disposing it when
//! the toast goes away) and turns pointer gestures into removals.
//!
//! Its [`subscription`](Overlay::subscription) registers a store observer, so
//! every mutation, including ones made directly on the store or by a timer,
//! reaches `update` as [`Message::Changed`].
//!
//! Lifecycle timers run on the ambient tokio runtime, so the host must run
//! iced with its `tokio` executor (the default for this crate).

use super::toast::Toast;
use crate::config::{NotificationsConfig, DEFAULT_DISMISS_DISTANCE};
use crate::i18n::I18n;
use crate::notifications::{
    FeedbackSink, Lifecycle, NoFeedback, NotificationEntry, NotificationId, NotificationStore,
    Snapshot, TracingFeedback,
};
use crate::ui::design_tokens::spacing;
use crate::ui::state::{DismissDrag, DragOutcome};
use iced::futures::{SinkExt, Stream};
use iced::stream;
use iced::widget::{Column, Container, Stack};
use iced::{alignment, Element, Length, Point, Subscription};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Buffered store-change messages waiting for the runtime.
const CHANGE_BUFFER: usize = 16;

/// Messages for overlay state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The store was mutated; carries the revision of the new contents.
    Changed(u64),
    /// Mouse button pressed on a toast.
    Pressed(NotificationId),
    /// Cursor moved over a toast.
    Moved(NotificationId, Point),
    /// Mouse button released on a toast.
    Released(NotificationId),
    /// Cursor left a toast.
    Exited(NotificationId),
    /// Dismiss a specific toast by ID.
    Dismiss(NotificationId),
    /// Dismiss every toast.
    DismissAll,
}

/// Presentation state bound to one notification store.
pub struct Overlay {
    store: NotificationStore,
    feedback: Arc<dyn FeedbackSink>,
    dismiss_distance: f32,
    /// Store contents as of the last sync; what `view` renders.
    displayed: Snapshot,
    /// One running lifecycle per toast currently displayed.
    lifecycles: HashMap<NotificationId, Lifecycle>,
    drags: HashMap<NotificationId, DismissDrag>,
}

impl Overlay {
    /// Creates an overlay rendering `store`.
    #[must_use]
    pub fn new(store: NotificationStore) -> Self {
        let displayed = store.snapshot();
        Self {
            store,
            displayed,
            feedback: Arc::new(NoFeedback),
            dismiss_distance: DEFAULT_DISMISS_DISTANCE,
            lifecycles: HashMap::new(),
            drags: HashMap::new(),
        }
    }

    /// Creates an overlay with its own store, configured from user settings.
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        let overlay = Self::new(NotificationStore::new(config.close_delay()))
            .with_dismiss_distance(config.dismiss_distance());
        if config.feedback {
            overlay.with_feedback(TracingFeedback)
        } else {
            overlay
        }
    }

    /// Sets the device playing category feedback cues.
    #[must_use]
    pub fn with_feedback(mut self, feedback: impl FeedbackSink + 'static) -> Self {
        self.feedback = Arc::new(feedback);
        self
    }

    /// Sets the upward drag distance that dismisses a toast.
    #[must_use]
    pub fn with_dismiss_distance(mut self, distance: f32) -> Self {
        self.dismiss_distance = distance;
        self
    }

    /// The store this overlay renders.
    #[must_use]
    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    /// Adds a toast and starts its lifecycle.
    pub fn push(&mut self, entry: NotificationEntry) {
        self.store.add(entry);
        self.sync();
    }

    /// Number of toasts with a live lifecycle.
    #[must_use]
    pub fn displayed_count(&self) -> usize {
        self.lifecycles.len()
    }

    /// Toasts rendered by [`view`](Self::view), oldest first.
    #[must_use]
    pub fn displayed(&self) -> &[NotificationEntry] {
        self.displayed.entries()
    }

    /// Handles an overlay message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Changed(revision) => {
                tracing::trace!(revision, "notification store changed");
            }
            Message::Pressed(id) => {
                if let Some(drag) = self.drag(id) {
                    drag.press();
                }
            }
            Message::Moved(id, position) => {
                let outcome = self
                    .drag(id)
                    .map_or(DragOutcome::None, |drag| drag.moved(position, Instant::now()));
                self.apply(id, outcome);
            }
            Message::Released(id) => {
                let outcome = self.drag(id).map_or(DragOutcome::None, DismissDrag::release);
                self.apply(id, outcome);
            }
            Message::Exited(id) => {
                let outcome = self.drag(id).map_or(DragOutcome::None, DismissDrag::exit);
                self.apply(id, outcome);
            }
            Message::Dismiss(id) => {
                self.store.remove(id);
            }
            Message::DismissAll => {
                self.store.remove_all();
            }
        }
        self.sync();
    }

    /// Delivers a [`Message::Changed`] for every store mutation, and one
    /// when the subscription starts.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::run_with(self.store.clone(), store_changes)
    }

    /// Renders the toasts, newest on top, in a top-aligned column.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let entries = self.displayed.entries();
        if entries.is_empty() {
            // Return an empty container that takes no space
            return Container::new(Column::new())
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toasts = entries
            .iter()
            .rev()
            .map(|entry| Toast::view(entry, self.drags.get(&entry.id()), self.dismiss_distance, i18n));

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }

    /// Starts lifecycles for toasts that appeared and disposes the ones of
    /// toasts that are gone, whichever path removed them.
    pub fn sync(&mut self) {
        let snapshot = self.store.snapshot();

        self.lifecycles.retain(|id, lifecycle| {
            let keep = snapshot.contains(*id);
            if !keep {
                lifecycle.dispose();
            }
            keep
        });
        self.drags.retain(|id, _| snapshot.contains(*id));

        for entry in snapshot.entries() {
            if !self.lifecycles.contains_key(&entry.id()) {
                let lifecycle = Lifecycle::start(entry, &self.store, self.feedback.as_ref());
                self.lifecycles.insert(entry.id(), lifecycle);
            }
        }

        self.displayed = snapshot;
    }

    fn drag(&mut self, id: NotificationId) -> Option<&mut DismissDrag> {
        if !self.store.contains(id) {
            return None;
        }
        let distance = self.dismiss_distance;
        Some(
            self.drags
                .entry(id)
                .or_insert_with(|| DismissDrag::new(distance)),
        )
    }

    fn apply(&mut self, id: NotificationId, outcome: DragOutcome) {
        match outcome {
            DragOutcome::None => {}
            DragOutcome::Tap => {
                let snapshot = self.store.snapshot();
                if let Some(entry) = snapshot.entries().iter().find(|entry| entry.id() == id) {
                    entry.tap();
                }
                self.store.remove(id);
            }
            DragOutcome::Dismiss => {
                self.store.remove(id);
            }
        }
    }
}

/// Forwards store notifications into the iced runtime.
///
/// The observer stays registered as long as the stream is alive.
fn store_changes(store: &NotificationStore) -> impl Stream<Item = Message> {
    let store = store.clone();
    stream::channel(CHANGE_BUFFER, move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
        let (changes, mut revisions) = mpsc::unbounded_channel();
        let _guard = store.observe(move |snapshot| {
            let _ = changes.send(snapshot.revision());
        });

        // Covers entries added before the observer was registered.
        let mut revision = store.snapshot().revision();
        loop {
            if output.send(Message::Changed(revision)).await.is_err() {
                break;
            }
            match revisions.recv().await {
                Some(next) => revision = next,
                None => break,
            }
        }
    })
}

impl Default for Overlay {
    /// Binds to the process-wide shared store.
    fn default() -> Self {
        Self::new(NotificationStore::standard())
    }
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("store", &self.store)
            .field("dismiss_distance", &self.dismiss_distance)
            .field("displayed", &self.lifecycles.len())
            .finish_non_exhaustive()
    }
}

/// Wraps host content with the notification overlay.
///
/// The toasts of `overlay`'s store are stacked above `content`, top-aligned,
/// newest first. Overlay messages are mapped into the host's message type
/// with `on_message`.
pub fn with_notifications<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    overlay: &'a Overlay,
    i18n: &'a I18n,
    on_message: impl Fn(Message) -> M + 'a,
) -> Element<'a, M> {
    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(overlay.view(i18n).map(on_message))
        .into()
}
