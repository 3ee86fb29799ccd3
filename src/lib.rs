// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` is a transient notification widget ("snackbar") for the
//! Iced GUI toolkit.
//!
//! The widget shows a short message near the bottom of the window, optionally
//! with an action button, and dismisses itself automatically after a timed
//! interval. The owning application holds a [`snackbar::State`] and triggers
//! messages imperatively through [`snackbar::State::show`].

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod app;
pub mod config;
pub mod design_tokens;
pub mod error;
pub mod snackbar;
