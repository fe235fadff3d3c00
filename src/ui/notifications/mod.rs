// SPDX-License-Identifier: MPL-2.0
//! Toast overlay for a [`NotificationStore`](crate::notifications::NotificationStore).
//!
//! Toasts appear at the top of the window, newest first, and go away when
//! their close delay elapses, when they are tapped, or when they are dragged
//! toward the top edge.
//!
//! # Components
//!
//! - [`overlay`] - `Overlay` state, gesture handling and the attach point
//! - [`toast`] - Toast widget rendering a single entry
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::notifications::NotificationEntry;
//! use iced_toasts::ui::notifications::{with_notifications, Overlay};
//!
//! let mut overlay = Overlay::default();
//! overlay.push(NotificationEntry::success("Saved"));
//!
//! // In your view function, stack the toasts over the screen
//! with_notifications(screen, &overlay, &i18n, Message::Notification)
//! ```

mod overlay;
mod toast;

pub use overlay::{with_notifications, Message as OverlayMessage, Overlay};
pub use toast::Toast;
