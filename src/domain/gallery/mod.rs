// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! A gallery is an ordered, immutable sequence of images. The viewer only
//! borrows it; ownership stays with whoever produced the list.

mod navigation;
mod newtypes;
mod types;

pub use navigation::GalleryPosition;
pub use newtypes::{breakpoint_bounds, Breakpoint, HeightRatio, SwipeThreshold};
pub use types::{DuplicateImageId, Gallery, GalleryImage, ImageId};
