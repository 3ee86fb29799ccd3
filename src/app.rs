// SPDX-License-Identifier: MPL-2.0
//! Demo application shell for the snackbar widget.
//!
//! The `App` struct owns a [`snackbar::State`] and wires it into the Iced
//! update loop: buttons trigger messages, the snackbar's tick subscription
//! runs while a message is on screen, and the overlay is stacked over the
//! main content. This file intentionally keeps policy decisions (window
//! sizing, theme resolution, config fallback) close to the main update loop
//! so the widget's integration surface is easy to audit.

use crate::config;
use crate::design_tokens::spacing;
use crate::snackbar::{self, Content, Timer};
use iced::widget::{button, stack, text, Column, Container, Row};
use iced::{event, window, Element, Length, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// Launch options parsed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Theme override: "light", "dark", or "system".
    pub theme: Option<String>,
    /// Message to show immediately on startup.
    pub initial_message: Option<String>,
}

/// Theme selection for the demo window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Parses a config/CLI value, falling back to `System` on unknown input.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }

    /// Returns whether this mode resolves to a dark theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// "Save" was clicked; shows a long snackbar with an Undo action.
    SavePressed,
    /// "Notice" was clicked; shows a plain snackbar.
    NoticePressed,
    /// "Empty" was clicked; shows an empty message (permissive input path).
    EmptyPressed,
    /// Dispatched by the snackbar's Undo action button.
    Undo,
    /// Internal snackbar messages (ticks, action presses).
    Snackbar(snackbar::Message),
    /// Window resize; keeps the overlay width cap current.
    WindowResized(iced::Size),
}

/// Root demo state.
pub struct App {
    snackbar: snackbar::State<Message>,
    theme_mode: ThemeMode,
    default_timer: Timer,
    window_width: f32,
    saves: u32,
    undone: u32,
}

impl Default for App {
    fn default() -> Self {
        Self {
            snackbar: snackbar::State::new().with_test_id("demo-snackbar"),
            theme_mode: ThemeMode::System,
            default_timer: Timer::Short,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            saves: 0,
            undone: 0,
        }
    }
}

/// Builds the demo window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the demo from persisted config and launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let mut app = App::default();
        app.default_timer = config.default_timer();
        app.theme_mode = match flags.theme.as_deref() {
            Some(value) => ThemeMode::parse(Some(value)),
            None => ThemeMode::parse(config.theme.as_deref()),
        };

        if let Some(message) = flags.initial_message {
            app.snackbar
                .show(Content::new(message).timer(app.default_timer));
        }

        log::info!(
            "demo started (theme: {:?}, default timer: {:?})",
            app.theme_mode,
            app.default_timer
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Snackbar Demo")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SavePressed => {
                self.saves += 1;
                self.snackbar.show(
                    Content::new(format!("Saved draft #{}", self.saves))
                        .action("Undo", Message::Undo)
                        .timer(Timer::Long),
                );
            }
            Message::NoticePressed => {
                self.snackbar
                    .show(Content::new("Connection restored").timer(self.default_timer));
            }
            Message::EmptyPressed => {
                // Missing text is rendered as an empty message, not rejected.
                self.snackbar.show(Content::new(""));
            }
            Message::Undo => {
                self.saves = self.saves.saturating_sub(1);
                self.undone += 1;
            }
            Message::Snackbar(inner) => match self.snackbar.update(inner) {
                snackbar::Event::Action(action) => return self.update(action),
                snackbar::Event::None => {}
            },
            Message::WindowResized(size) => {
                self.window_width = size.width;
            }
        }

        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let resizes = event::listen_with(|event, _status, _window| {
            if let event::Event::Window(window::Event::Resized(size)) = event {
                Some(Message::WindowResized(size))
            } else {
                None
            }
        });

        Subscription::batch([
            resizes,
            self.snackbar.subscription().map(Message::Snackbar),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        let buttons = Row::new()
            .spacing(spacing::SM)
            .push(button(text("Save")).on_press(Message::SavePressed))
            .push(button(text("Notice")).on_press(Message::NoticePressed))
            .push(button(text("Empty")).on_press(Message::EmptyPressed));

        let status = text(format!(
            "{} draft(s) saved, {} undone",
            self.saves, self.undone
        ));

        let controls = Column::new()
            .spacing(spacing::MD)
            .push(text("Trigger a snackbar:"))
            .push(buttons)
            .push(status);

        let base = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG);

        stack![
            base,
            self.snackbar
                .view(self.window_width)
                .map(Message::Snackbar)
        ]
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_parses_known_values() {
        assert_eq!(ThemeMode::parse(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::parse(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse(Some("system")), ThemeMode::System);
    }

    #[test]
    fn theme_mode_falls_back_to_system() {
        assert_eq!(ThemeMode::parse(None), ThemeMode::System);
        assert_eq!(ThemeMode::parse(Some("sepia")), ThemeMode::System);
    }

    #[test]
    fn every_theme_mode_resolves_to_a_concrete_theme() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());

        // System depends on the host environment; it must still resolve to
        // one of the two concrete Iced themes without panicking.
        let mut app = App::default();
        app.theme_mode = ThemeMode::System;
        let theme = app.theme();
        assert!(matches!(theme, Theme::Light | Theme::Dark));
    }

    #[test]
    fn undo_action_round_trips_through_update() {
        let mut app = App::default();
        let _ = app.update(Message::SavePressed);
        assert_eq!(app.saves, 1);

        // The snackbar carries Message::Undo; an action press must hand it
        // back to the application update loop.
        let _ = app.update(Message::Snackbar(snackbar::Message::ActionPressed));
        assert_eq!(app.saves, 0);
        assert_eq!(app.undone, 1);
    }

    #[test]
    fn resize_updates_width_cap_input() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(iced::Size::new(640.0, 480.0)));
        assert!((app.window_width - 640.0).abs() < f32::EPSILON);
    }
}
