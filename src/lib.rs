// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification overlay for Iced applications.
//!
//! Notifications live in an observable [`NotificationStore`](notifications::NotificationStore).
//! Each displayed toast gets a lifecycle that plays a one-shot feedback cue and
//! removes it after the store's close delay; the user can also tap a toast or
//! drag it toward the top edge to dismiss it early.
//!
//! The core in [`notifications`] is UI-agnostic. The [`ui`] module renders a
//! store's toasts above any Iced content with
//! [`with_notifications`](ui::notifications::with_notifications).

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod ui;
