// SPDX-License-Identifier: MPL-2.0
//! Breakpoint detector.
//!
//! Classifies the viewport as mobile or desktop. The viewer only receives
//! window resize events through its own subscription, which exists while
//! the viewer is open and disappears with it.

use crate::domain::gallery::Breakpoint;
use iced::Size;

/// Which layout the viewer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Full-screen layout for narrow viewports.
    Mobile,
    /// Dimmed overlay layout for wide viewports.
    Desktop,
}

impl Layout {
    /// Layout for a viewport of `width` given `breakpoint`.
    #[must_use]
    pub fn for_width(width: f32, breakpoint: Breakpoint) -> Self {
        if breakpoint.is_below(width) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Tracks the viewport size and the layout derived from it.
#[derive(Debug, Clone)]
pub struct Detector {
    breakpoint: Breakpoint,
    viewport: Size,
    layout: Layout,
}

impl Detector {
    #[must_use]
    pub fn new(breakpoint: Breakpoint, viewport: Size) -> Self {
        Self {
            breakpoint,
            viewport,
            layout: Layout::for_width(viewport.width, breakpoint),
        }
    }

    /// Records a new viewport size.
    ///
    /// Returns `true` when the layout changed as a result.
    pub fn resize(&mut self, viewport: Size) -> bool {
        self.viewport = viewport;
        let layout = Layout::for_width(viewport.width, self.breakpoint);
        let changed = layout != self.layout;
        self.layout = layout;
        changed
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn is_mobile_layout(&self) -> bool {
        self.layout == Layout::Mobile
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_is_mobile() {
        let detector = Detector::new(Breakpoint::default(), Size::new(767.0, 900.0));
        assert!(detector.is_mobile_layout());
    }

    #[test]
    fn breakpoint_width_is_desktop() {
        let detector = Detector::new(Breakpoint::default(), Size::new(768.0, 900.0));
        assert_eq!(detector.layout(), Layout::Desktop);
    }

    #[test]
    fn resize_reports_layout_changes_only() {
        let mut detector = Detector::new(Breakpoint::default(), Size::new(1280.0, 800.0));

        assert!(!detector.resize(Size::new(1024.0, 700.0)));
        assert!(detector.resize(Size::new(400.0, 700.0)));
        assert!(detector.is_mobile_layout());
        assert!(!detector.resize(Size::new(390.0, 844.0)));
        assert!(detector.resize(Size::new(800.0, 600.0)));
        assert_eq!(detector.viewport(), Size::new(800.0, 600.0));
    }

    #[test]
    fn custom_breakpoint_applies() {
        let detector = Detector::new(Breakpoint::new(1024.0), Size::new(900.0, 600.0));
        assert!(detector.is_mobile_layout());
    }
}
