// SPDX-License-Identifier: MPL-2.0
//! `samiske_gallery` is an image gallery built with the Iced GUI framework.
//!
//! A host page shows a grid of thumbnails loaded from a directory or a TOML
//! manifest. Picking one opens a modal viewer with arrow, dot and thumbnail
//! navigation, swipe gestures and keyboard shortcuts, switching between a
//! full-screen mobile layout and a dimmed desktop overlay by window width.

#![doc(html_root_url = "https://docs.rs/samiske_gallery/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
