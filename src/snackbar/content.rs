// SPDX-License-Identifier: MPL-2.0
//! Per-call display request for the snackbar.
//!
//! A [`Content`] describes a single message: its text, an optional action
//! button, the auto-dismiss duration, and an optional visual override. It is
//! built once per [`show`](super::State::show) call and replaced wholesale by
//! the next one.

use super::style::Style;
use std::time::Duration;

/// Auto-dismiss duration presets.
///
/// The snackbar stays fully visible for this long (the fade-in and fade-out
/// animations are added on top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timer {
    /// Brief notice (1.5 s). The default.
    #[default]
    Short,
    /// Message the user may want to act on (3 s).
    Long,
}

impl Timer {
    /// Returns the preset as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        match self {
            Timer::Short => Duration::from_millis(1500),
            Timer::Long => Duration::from_millis(3000),
        }
    }
}

/// A single snackbar message.
///
/// `M` is the host application's message type; the optional action button
/// dispatches one of its values when pressed.
///
/// There is no validation: an empty `text` is accepted and rendered as an
/// empty message. A snackbar must never itself take the application down, so
/// every request is treated as best-effort.
#[derive(Debug, Clone)]
pub struct Content<M> {
    text: String,
    action_text: Option<String>,
    on_press_action: Option<M>,
    timer: Timer,
    style: Option<Style>,
}

impl<M> Content<M> {
    /// Creates a request showing `text` with the default [`Timer::Short`]
    /// duration and no action button.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action_text: None,
            on_press_action: None,
            timer: Timer::default(),
            style: None,
        }
    }

    /// Adds an action button labelled `label` that dispatches `message` to
    /// the host application when pressed.
    ///
    /// Pressing the action does not dismiss the snackbar.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action_text = Some(label.into());
        self.on_press_action = Some(message);
        self
    }

    /// Adds an action button whose press is a no-op.
    ///
    /// Useful when the label itself carries the information ("Dismissed").
    #[must_use]
    pub fn action_label(mut self, label: impl Into<String>) -> Self {
        self.action_text = Some(label.into());
        self
    }

    /// Sets the auto-dismiss duration.
    #[must_use]
    pub fn timer(mut self, timer: Timer) -> Self {
        self.timer = timer;
        self
    }

    /// Overrides the default visual style for this message only.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Returns the message body.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the action button label, if any.
    #[must_use]
    pub fn action_text(&self) -> Option<&str> {
        self.action_text.as_deref()
    }

    /// Returns the host message dispatched on action press, if any.
    #[must_use]
    pub fn on_press_action(&self) -> Option<&M> {
        self.on_press_action.as_ref()
    }

    /// Returns the auto-dismiss duration preset.
    #[must_use]
    pub fn timer_value(&self) -> Timer {
        self.timer
    }

    /// Returns the effective visual style (override or default).
    #[must_use]
    pub fn effective_style(&self) -> Style {
        self.style.clone().unwrap_or_default()
    }
}
