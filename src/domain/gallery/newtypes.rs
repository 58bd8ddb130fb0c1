// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! Type-safe wrappers for the viewer's tunable constants, guaranteed to stay
//! within usable ranges no matter what a config file asks for.

// =============================================================================
// Breakpoint Bounds
// =============================================================================

/// Layout breakpoint bounds, in logical pixels.
pub mod breakpoint_bounds {
    /// Smallest accepted breakpoint.
    pub const MIN: f32 = 320.0;
    /// Largest accepted breakpoint.
    pub const MAX: f32 = 2048.0;
    /// Widths strictly below this use the mobile layout.
    pub const DEFAULT: f32 = 768.0;
}

// =============================================================================
// Breakpoint
// =============================================================================

/// Viewport width separating the mobile layout from the desktop layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint(f32);

impl Breakpoint {
    /// Creates a breakpoint, clamping the value to the valid range.
    #[must_use]
    pub fn new(width: f32) -> Self {
        if width.is_nan() {
            return Self::default();
        }
        Self(width.clamp(breakpoint_bounds::MIN, breakpoint_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether a viewport of `width` is narrower than the breakpoint.
    #[must_use]
    pub fn is_below(self, width: f32) -> bool {
        width < self.0
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(breakpoint_bounds::DEFAULT)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum travel, in logical pixels, before a touch counts as a swipe.
///
/// A delta has to be strictly greater than the threshold to qualify.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Smallest accepted threshold.
    pub const MIN: f32 = 1.0;
    /// Largest accepted threshold.
    pub const MAX: f32 = 400.0;
    /// Default horizontal (navigate) threshold.
    pub const HORIZONTAL: Self = Self(50.0);
    /// Default vertical (dismiss) threshold.
    pub const DISMISS: Self = Self(100.0);

    /// Creates a threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self(Self::MIN);
        }
        Self(pixels.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether `distance` travels past the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, distance: f32) -> bool {
        distance > self.0
    }
}

// =============================================================================
// HeightRatio
// =============================================================================

/// Share of the viewport height an image may occupy on desktop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightRatio(f32);

impl HeightRatio {
    /// Smallest accepted ratio.
    pub const MIN: f32 = 0.3;
    /// Largest accepted ratio.
    pub const MAX: f32 = 1.0;
    /// Default desktop cap.
    pub const DEFAULT: f32 = 0.85;

    /// Creates a ratio, clamping the value to the valid range.
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self::default();
        }
        Self(ratio.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Applies the ratio to a viewport height.
    #[must_use]
    pub fn of(self, height: f32) -> f32 {
        (height * self.0).max(0.0)
    }
}

impl Default for HeightRatio {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
