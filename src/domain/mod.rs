// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and the gallery
//! navigation rules. It has no dependencies on external crates (except `std`)
//! so every transition can be tested without a rendering framework.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`GalleryImage`](gallery::GalleryImage),
//!   [`Gallery`](gallery::Gallery)), the navigation state machine
//!   ([`GalleryPosition`](gallery::GalleryPosition)) and value objects
//!   ([`Breakpoint`](gallery::Breakpoint), [`SwipeThreshold`](gallery::SwipeThreshold))

pub mod gallery;
