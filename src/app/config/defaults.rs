// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Viewer breakpoint, swipe thresholds, desktop sizing
//! - **Host**: Thumbnail grid and remote image cache

use crate::domain::gallery::{breakpoint_bounds, HeightRatio, SwipeThreshold};

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Viewport width (logical pixels) below which the mobile layout is used.
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = breakpoint_bounds::DEFAULT;

/// Horizontal travel (logical pixels) a swipe needs to navigate.
pub const DEFAULT_HORIZONTAL_SWIPE_THRESHOLD: f32 = 50.0;

/// Downward travel (logical pixels) a swipe needs to dismiss the viewer.
pub const DEFAULT_DISMISS_SWIPE_THRESHOLD: f32 = 100.0;

/// Share of the viewport height the desktop image may occupy.
pub const DEFAULT_DESKTOP_MAX_HEIGHT_RATIO: f32 = HeightRatio::DEFAULT;

// ==========================================================================
// Host Defaults
// ==========================================================================

/// Edge length of thumbnails on the host page.
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 160.0;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: f32 = 64.0;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: f32 = 320.0;

/// Number of downloaded images kept in memory.
pub const DEFAULT_REMOTE_CACHE_ENTRIES: usize = 64;

/// Minimum remote cache size.
pub const MIN_REMOTE_CACHE_ENTRIES: usize = 1;

/// Maximum remote cache size.
pub const MAX_REMOTE_CACHE_ENTRIES: usize = 1024;

const _: () = {
    assert!(DEFAULT_HORIZONTAL_SWIPE_THRESHOLD >= SwipeThreshold::MIN);
    assert!(DEFAULT_DISMISS_SWIPE_THRESHOLD > DEFAULT_HORIZONTAL_SWIPE_THRESHOLD);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
    assert!(DEFAULT_REMOTE_CACHE_ENTRIES >= MIN_REMOTE_CACHE_ENTRIES);
};
