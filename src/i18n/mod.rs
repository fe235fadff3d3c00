// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for toast labels.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Toasts built with [`NotificationEntry::localized`](crate::notifications::NotificationEntry::localized)
//! carry message keys that are resolved here at render time.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - Missing keys render as the key itself

pub mod fluent;

pub use fluent::I18n;
