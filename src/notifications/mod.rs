// SPDX-License-Identifier: MPL-2.0
//! Toast notification core: entries, the store that owns them, and the
//! per-toast lifecycle that dismisses them.
//!
//! # Components
//!
//! - [`entry`] - Immutable `NotificationEntry` values and their `Category`
//! - [`store`] - `NotificationStore`, the observable list of active toasts
//! - [`lifecycle`] - `Lifecycle`, one auto-dismiss timer per displayed toast
//! - [`feedback`] - Feedback cues played when a toast appears
//!
//! # Usage
//!
//! ```
//! use iced_toasts::notifications::{NotificationEntry, NotificationStore};
//!
//! let store = NotificationStore::with_close_delay_secs(3.0);
//! let entry = NotificationEntry::info("Title").with_description("Desc");
//! let id = entry.id();
//!
//! store.add(entry);
//! assert_eq!(store.len(), 1);
//!
//! store.remove(id);
//! assert!(store.is_empty());
//! ```
//!
//! # Threading
//!
//! Mutations are linearized by the store, so timers firing on runtime worker
//! threads can remove entries directly. Removal is idempotent: a tap, a drag
//! and a timer racing to dismiss the same toast leave the store as a single
//! removal would.

pub mod close_delay;
pub mod entry;
pub mod feedback;
pub mod lifecycle;
pub mod store;

pub use close_delay::CloseDelay;
pub use entry::{Category, Icon, Label, NotificationEntry, NotificationId, TapAction, Tint};
pub use feedback::{FeedbackKind, FeedbackSink, NoFeedback, TracingFeedback};
pub use lifecycle::Lifecycle;
pub use store::{NotificationStore, ObserverGuard, Snapshot, WeakStore};
