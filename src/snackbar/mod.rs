// SPDX-License-Identifier: MPL-2.0
//! Transient snackbar notification widget.
//!
//! A snackbar shows a short message near the bottom of the window and
//! dismisses itself after a timed interval. At most one message is active at
//! a time: a new [`State::show`] call supersedes the previous message rather
//! than queueing behind it.
//!
//! # Components
//!
//! - [`content`] - Per-call display request ([`Content`]) and the [`Timer`]
//!   duration presets
//! - [`state`] - [`State`]: the show/visible/dismiss state machine and
//!   animation clock
//! - [`widget`] - View rendering for the snackbar surface
//! - [`style`] - Visual override configuration
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::snackbar::{self, Content, Timer};
//!
//! // In your application state
//! let mut snackbar = snackbar::State::new();
//!
//! // Anywhere in your update logic
//! snackbar.show(
//!     Content::new("Saved")
//!         .action("Undo", Message::Undo)
//!         .timer(Timer::Long),
//! );
//!
//! // In your view function, stack the overlay over the main content
//! let overlay = snackbar.view(window_width).map(Message::Snackbar);
//! ```

pub mod content;
pub mod state;
pub mod style;
pub mod widget;

pub use content::{Content, Timer};
pub use state::{Event, Message, State};
pub use style::Style;
