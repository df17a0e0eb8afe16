// SPDX-License-Identifier: MPL-2.0
//! `preview_player` drives the preview of a single video file.
//!
//! Given a file that is either downloaded or reachable through an account,
//! a [`PlaybackController`](session::PlaybackController) resolves where to
//! read it from, drives an opaque render surface through loading and
//! playback, and turns every failure into a localized, acknowledgeable
//! modal that ends the session.

#![doc(html_root_url = "https://docs.rs/preview_player/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod paths;
pub mod session;

#[doc(hidden)]
pub mod test_utils;
