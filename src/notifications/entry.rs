// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the immutable `NotificationEntry` value and the
//! `Category` that drives its tint and feedback cue.

use super::feedback::FeedbackKind;
use iced::widget::image;
use iced::Color;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Icon tint as 8-bit RGB, so categories stay hashable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tint {
    pub const ERROR: Self = Self::rgb(229, 57, 53);
    pub const WARNING: Self = Self::rgb(241, 166, 32);
    pub const SUCCESS: Self = Self::rgb(67, 179, 103);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }
}

/// Semantic kind of a notification: icon tint plus feedback cue.
///
/// Two categories are equal when their tint and feedback match, so a custom
/// category built from the error tint and error cue *is* [`Category::ERROR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    tint: Option<Tint>,
    feedback: Option<FeedbackKind>,
}

impl Category {
    /// Tints the icon red and plays the error cue.
    pub const ERROR: Self = Self::custom(Some(Tint::ERROR), Some(FeedbackKind::Error));
    /// Tints the icon yellow and plays the warning cue.
    pub const WARNING: Self = Self::custom(Some(Tint::WARNING), Some(FeedbackKind::Warning));
    /// Tints the icon green and plays the success cue.
    pub const SUCCESS: Self = Self::custom(Some(Tint::SUCCESS), Some(FeedbackKind::Success));
    /// Uses the theme accent and plays no cue.
    pub const INFO: Self = Self::custom(None, None);

    /// Creates a category. `None` tint means the theme accent color, `None`
    /// feedback disables the cue.
    #[must_use]
    pub const fn custom(tint: Option<Tint>, feedback: Option<FeedbackKind>) -> Self {
        Self { tint, feedback }
    }

    #[must_use]
    pub fn tint(&self) -> Option<Tint> {
        self.tint
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackKind> {
        self.feedback
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::INFO
    }
}

/// Text of a title or description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Displayed as is.
    Plain(String),
    /// Fluent message key resolved at render time.
    Localized(String),
}

impl Label {
    /// Raw content: the text itself, or the message key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Label::Plain(text) | Label::Localized(text) => text,
        }
    }

    #[must_use]
    pub fn is_localized(&self) -> bool {
        matches!(self, Label::Localized(_))
    }

    fn same_kind(&self, text: String) -> Self {
        match self {
            Label::Plain(_) => Label::Plain(text),
            Label::Localized(_) => Label::Localized(text),
        }
    }
}

/// Icon shown on the leading edge of a toast. Opaque to the store.
#[derive(Debug, Clone)]
pub enum Icon {
    /// A glyph rendered with the toast's text font.
    Symbol(String),
    /// A raster image.
    Image(image::Handle),
}

/// Callback run when the user taps a toast. Runs at most once, even when the
/// entry has been cloned into several store snapshots.
#[derive(Clone)]
pub struct TapAction(Arc<Mutex<Option<Box<dyn FnOnce() + Send>>>>);

impl TapAction {
    pub fn new(action: impl FnOnce() + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(Some(Box::new(action)))))
    }

    /// Runs the callback if it has not run yet. Returns whether it ran.
    pub fn invoke(&self) -> bool {
        let action = self
            .0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match action {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for TapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TapAction")
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct NotificationEntry {
    id: NotificationId,
    category: Category,
    title: Label,
    description: Option<Label>,
    icon: Option<Icon>,
    on_tap: Option<TapAction>,
}

impl NotificationEntry {
    /// Creates a notification whose title and description are plain text.
    pub fn new(category: Category, title: impl Into<String>) -> Self {
        Self::with_title(category, Label::Plain(title.into()))
    }

    /// Creates a notification whose title and description are Fluent keys.
    pub fn localized(category: Category, title_key: impl Into<String>) -> Self {
        Self::with_title(category, Label::Localized(title_key.into()))
    }

    /// Creates an error notification with a plain title.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Category::ERROR, title)
    }

    /// Creates a warning notification with a plain title.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Category::WARNING, title)
    }

    /// Creates a success notification with a plain title.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Category::SUCCESS, title)
    }

    /// Creates an info notification with a plain title.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Category::INFO, title)
    }

    fn with_title(category: Category, title: Label) -> Self {
        Self {
            id: NotificationId::new(),
            category,
            title,
            description: None,
            icon: None,
            on_tap: None,
        }
    }

    /// Sets the description. It is plain text or a Fluent key, matching the
    /// constructor used for the title.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(self.title.same_kind(description.into()));
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the callback run when the user taps the toast.
    #[must_use]
    pub fn on_tap(mut self, action: impl FnOnce() + Send + 'static) -> Self {
        self.on_tap = Some(TapAction::new(action));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn title(&self) -> &Label {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&Label> {
        self.description.as_ref()
    }

    #[must_use]
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    #[must_use]
    pub fn has_tap_action(&self) -> bool {
        self.on_tap.is_some()
    }

    /// Runs the tap action, if any and if it has not run yet.
    ///
    /// Does not remove the entry; the caller follows up with
    /// [`NotificationStore::remove`](super::NotificationStore::remove).
    pub fn tap(&self) -> bool {
        self.on_tap.as_ref().is_some_and(TapAction::invoke)
    }
}
