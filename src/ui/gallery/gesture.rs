// SPDX-License-Identifier: MPL-2.0
//! Touch gesture interpreter.
//!
//! Tracks the finger that started a touch and, when it lifts, turns the
//! travelled distance into an [`Intent`]:
//!
//! - a horizontal swipe past the horizontal threshold navigates
//!   (finger moving left shows the next image),
//! - otherwise a downward swipe past the dismiss threshold closes,
//! - anything else (taps, jitter, upward swipes) does nothing.
//!
//! Only the first finger down is tracked; additional fingers are ignored
//! until it lifts or is lost.

use super::Intent;
use crate::domain::gallery::SwipeThreshold;
use iced::touch::Finger;
use iced::Point;

/// Thresholds used to classify a finished touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// Horizontal travel needed to navigate.
    pub horizontal: SwipeThreshold,
    /// Downward travel needed to dismiss.
    pub dismiss: SwipeThreshold,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            horizontal: SwipeThreshold::HORIZONTAL,
            dismiss: SwipeThreshold::DISMISS,
        }
    }
}

/// Classifies a touch that started at `start` and ended at `end`.
#[must_use]
pub fn interpret(start: Point, end: Point, thresholds: SwipeThresholds) -> Option<Intent> {
    // Positive delta_x: finger moved left. Positive delta_y: finger moved down.
    let delta_x = start.x - end.x;
    let delta_y = end.y - start.y;

    if delta_x.abs() > delta_y.abs() && thresholds.horizontal.is_exceeded_by(delta_x.abs()) {
        if delta_x > 0.0 {
            Some(Intent::Next)
        } else {
            Some(Intent::Previous)
        }
    } else if thresholds.dismiss.is_exceeded_by(delta_y) {
        Some(Intent::Close)
    } else {
        None
    }
}

/// Tracks the touch in progress.
#[derive(Debug, Clone, Default)]
pub struct State {
    thresholds: SwipeThresholds,
    start: Option<(Finger, Point)>,
}

impl State {
    #[must_use]
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            thresholds,
            start: None,
        }
    }

    /// Records where a finger touched down.
    pub fn touch_started(&mut self, finger: Finger, position: Point) {
        if self.start.is_none() {
            self.start = Some((finger, position));
        }
    }

    /// Finishes the touch for `finger` and returns the resulting intent.
    ///
    /// Lifting a finger that was never tracked yields nothing.
    pub fn touch_ended(&mut self, finger: Finger, position: Point) -> Option<Intent> {
        match self.start {
            Some((tracked, start)) if tracked == finger => {
                self.start = None;
                interpret(start, position, self.thresholds)
            }
            _ => None,
        }
    }

    /// Forgets the touch for `finger` without producing an intent.
    pub fn touch_lost(&mut self, finger: Finger) {
        if self.start.is_some_and(|(tracked, _)| tracked == finger) {
            self.start = None;
        }
    }

    /// Drops any touch in progress.
    pub fn reset(&mut self) {
        self.start = None;
    }

    /// Whether a touch is currently being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point { x: 200.0, y: 300.0 };

    fn swipe(dx: f32, dy: f32) -> Option<Intent> {
        // dx/dy describe finger travel on screen.
        interpret(
            ORIGIN,
            Point::new(ORIGIN.x + dx, ORIGIN.y + dy),
            SwipeThresholds::default(),
        )
    }

    #[test]
    fn horizontal_threshold_is_exclusive() {
        assert_eq!(swipe(-49.0, 0.0), None);
        assert_eq!(swipe(-50.0, 0.0), None);
        assert_eq!(swipe(-51.0, 0.0), Some(Intent::Next));
        assert_eq!(swipe(51.0, 0.0), Some(Intent::Previous));
    }

    #[test]
    fn dismiss_threshold_is_exclusive() {
        assert_eq!(swipe(0.0, 99.0), None);
        assert_eq!(swipe(0.0, 100.0), None);
        assert_eq!(swipe(0.0, 101.0), Some(Intent::Close));
    }

    #[test]
    fn upward_swipe_does_not_close() {
        assert_eq!(swipe(0.0, -300.0), None);
    }

    #[test]
    fn dominant_horizontal_travel_navigates_instead_of_closing() {
        assert_eq!(swipe(-150.0, 120.0), Some(Intent::Next));
    }

    #[test]
    fn dominant_vertical_travel_closes_even_with_large_horizontal() {
        assert_eq!(swipe(-90.0, 140.0), Some(Intent::Close));
    }

    #[test]
    fn short_horizontal_with_dominant_vertical_under_threshold_is_noop() {
        assert_eq!(swipe(40.0, 60.0), None);
    }

    #[test]
    fn tap_is_noop() {
        assert_eq!(swipe(0.0, 0.0), None);
    }

    #[test]
    fn state_tracks_only_first_finger() {
        let mut state = State::default();
        state.touch_started(Finger(1), ORIGIN);
        state.touch_started(Finger(2), Point::new(0.0, 0.0));

        assert_eq!(
            state.touch_ended(Finger(2), Point::new(500.0, 0.0)),
            None,
            "second finger must be ignored"
        );
        assert_eq!(
            state.touch_ended(Finger(1), Point::new(ORIGIN.x - 80.0, ORIGIN.y)),
            Some(Intent::Next)
        );
        assert!(!state.is_tracking());
    }

    #[test]
    fn end_without_start_is_noop() {
        let mut state = State::default();
        assert_eq!(state.touch_ended(Finger(1), ORIGIN), None);
    }

    #[test]
    fn lost_touch_is_forgotten() {
        let mut state = State::default();
        state.touch_started(Finger(7), ORIGIN);
        state.touch_lost(Finger(7));
        assert!(!state.is_tracking());
        assert_eq!(
            state.touch_ended(Finger(7), Point::new(ORIGIN.x - 200.0, ORIGIN.y)),
            None
        );
    }

    #[test]
    fn custom_thresholds_apply() {
        let mut state = State::new(SwipeThresholds {
            horizontal: SwipeThreshold::new(10.0),
            dismiss: SwipeThreshold::new(20.0),
        });
        state.touch_started(Finger(1), ORIGIN);
        assert_eq!(
            state.touch_ended(Finger(1), Point::new(ORIGIN.x + 11.0, ORIGIN.y)),
            Some(Intent::Previous)
        );
    }
}
