// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toast overlay above a small control panel.
//!
//! Each button adds one kind of toast. The overlay owns lifecycles and
//! gestures; the app only forwards its messages and subscription.

mod message;

pub use message::{Flags, Message, Preset};

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::notifications::{Category, Icon, NotificationEntry};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{with_notifications, Overlay};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const WINDOW_DEFAULT_WIDTH: f32 = 640.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 480.0;

/// Root state of the demo.
pub struct App {
    pub i18n: I18n,
    overlay: Overlay,
    /// How many tap actions have run so far.
    taps: Arc<AtomicUsize>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("i18n", &self.i18n)
            .field("overlay", &self.overlay)
            .field("taps", &self.taps.load(Ordering::Relaxed))
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the demo from user settings, with command-line overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load settings, using defaults");
            Config::default()
        });
        (Self::with_config(flags, &config), Task::none())
    }

    fn with_config(flags: Flags, config: &Config) -> Self {
        let mut notifications = config.notifications.clone();
        if let Some(secs) = flags.close_delay {
            notifications.close_delay_secs = Some(secs);
        }

        let overlay = Overlay::from_config(&notifications);
        tracing::info!(
            close_delay = ?overlay.store().dismiss_delay(),
            "notification overlay ready"
        );

        Self {
            i18n: I18n::new(flags.lang, config),
            overlay,
            taps: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("demo-window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Add(preset) => {
                let entry = self.preset_entry(preset);
                self.overlay.push(entry);
            }
            Message::ClearAll => self.overlay.store().remove_all(),
            Message::Notification(message) => self.overlay.update(message),
        }
        self.overlay.sync();
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.overlay.subscription().map(Message::Notification)
    }

    fn view(&self) -> Element<'_, Message> {
        let heading = Text::new(self.i18n.tr("demo-heading")).size(typography::TITLE_SM);
        let hint = Text::new(self.i18n.tr("demo-hint"))
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_400),
            });

        let presets = [
            (Preset::Info, "demo-add-info"),
            (Preset::Success, "demo-add-success"),
            (Preset::Warning, "demo-add-warning"),
            (Preset::Error, "demo-add-error"),
            (Preset::Localized, "demo-add-localized"),
            (Preset::Action, "demo-add-action"),
        ];
        let buttons = presets.into_iter().fold(
            Row::new().spacing(spacing::XS),
            |row, (preset, key)| {
                row.push(
                    button(Text::new(self.i18n.tr(key)))
                        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                        .style(button::secondary)
                        .on_press(Message::Add(preset)),
                )
            },
        );

        let clear = button(Text::new(self.i18n.tr("demo-clear-all")))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(button::danger)
            .on_press(Message::ClearAll);

        let status = Text::new(format!(
            "{}: {}   {}: {}",
            self.i18n.tr("demo-active-count"),
            self.overlay.store().len(),
            self.i18n.tr("demo-tapped"),
            self.taps.load(Ordering::Relaxed),
        ))
        .size(typography::BODY);

        let panel = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(heading)
            .push(hint)
            .push(buttons)
            .push(clear)
            .push(status);

        let content = Container::new(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom);

        with_notifications(content, &self.overlay, &self.i18n, Message::Notification)
    }

    /// Builds the toast for a demo button.
    ///
    /// The category presets resolve their text now, so they show the locale
    /// active when they were created; the localized presets are resolved at
    /// render time.
    fn preset_entry(&self, preset: Preset) -> NotificationEntry {
        match preset {
            Preset::Info => NotificationEntry::info(self.i18n.tr("toast-info-title"))
                .with_description(self.i18n.tr("toast-info-body"))
                .with_icon(Icon::Symbol("i".into())),
            Preset::Success => NotificationEntry::success(self.i18n.tr("toast-success-title"))
                .with_description(self.i18n.tr("toast-success-body"))
                .with_icon(Icon::Symbol("✓".into())),
            Preset::Warning => NotificationEntry::warning(self.i18n.tr("toast-warning-title"))
                .with_description(self.i18n.tr("toast-warning-body"))
                .with_icon(Icon::Symbol("!".into())),
            Preset::Error => NotificationEntry::error(self.i18n.tr("toast-error-title"))
                .with_description(self.i18n.tr("toast-error-body"))
                .with_icon(Icon::Symbol("✕".into())),
            Preset::Localized => {
                NotificationEntry::localized(Category::INFO, "toast-localized-title")
                    .with_description("toast-localized-body")
            }
            Preset::Action => {
                let taps = Arc::clone(&self.taps);
                NotificationEntry::localized(Category::SUCCESS, "toast-action-title")
                    .with_description("toast-action-body")
                    .with_icon(Icon::Symbol("✉".into()))
                    .on_tap(move || {
                        let count = taps.fetch_add(1, Ordering::Relaxed) + 1;
                        tracing::info!(count, "toast action ran");
                    })
            }
        }
    }
}
