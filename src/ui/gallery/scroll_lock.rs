// SPDX-License-Identifier: MPL-2.0
//! Scroll lock for the page behind the viewer.
//!
//! While the viewer is open the page underneath must not scroll. The lock
//! captures the page's scroll offset, pins the page body in place, and puts
//! both back exactly when released. Release happens on every exit path
//! because [`ScrollLock`] releases itself on drop.
//!
//! Locking an already pinned surface does nothing: the second guard is
//! inert and leaves restoration to the guard that pinned it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// How the page body is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BodyPosition {
    /// Normal flow; the page scrolls.
    #[default]
    Static,
    /// Pinned in place, shifted up by the captured scroll offset.
    Fixed {
        /// Vertical shift applied to keep the visible content still.
        top: f32,
    },
}

impl BodyPosition {
    #[must_use]
    pub fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed { .. })
    }
}

/// A scrollable page that can be pinned.
pub trait ScrollSurface {
    /// Current vertical scroll offset, in logical pixels.
    fn scroll_offset(&self) -> f32;

    /// Current body positioning.
    fn body_position(&self) -> BodyPosition;

    /// Replaces the body positioning.
    fn set_body_position(&mut self, position: BodyPosition);

    /// Scrolls the page to `offset`.
    fn scroll_to(&mut self, offset: f32);
}

/// Shared handle to the surface a lock pins.
pub type SharedSurface = Rc<RefCell<dyn ScrollSurface>>;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Snapshot {
    offset: f32,
    body: BodyPosition,
}

/// Guard that keeps a [`ScrollSurface`] pinned until released or dropped.
pub struct ScrollLock {
    surface: SharedSurface,
    snapshot: Option<Snapshot>,
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

impl ScrollLock {
    /// Pins `surface`, remembering its offset and body position.
    #[must_use]
    pub fn acquire(surface: SharedSurface) -> Self {
        let snapshot = {
            let mut target = surface.borrow_mut();
            let body = target.body_position();
            if body.is_fixed() {
                tracing::debug!("scroll surface already pinned, lock is inert");
                None
            } else {
                let offset = target.scroll_offset();
                target.set_body_position(BodyPosition::Fixed { top: -offset });
                tracing::debug!(offset, "scroll lock acquired");
                Some(Snapshot { offset, body })
            }
        };

        Self { surface, snapshot }
    }

    /// Whether this guard pinned the surface and still owes a restore.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Restores the surface. Calling this more than once is harmless.
    pub fn release(&mut self) {
        let Some(snapshot) = self.snapshot.take() else {
            return;
        };

        match self.surface.try_borrow_mut() {
            Ok(mut target) => {
                target.set_body_position(snapshot.body);
                target.scroll_to(snapshot.offset);
                tracing::debug!(offset = snapshot.offset, "scroll lock released");
            }
            Err(_) => {
                // Only reachable if the surface is borrowed across a drop.
                tracing::error!("scroll surface busy, page left pinned");
            }
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[derive(Debug, Default)]
    struct Page {
        offset: f32,
        body: BodyPosition,
        scroll_calls: usize,
    }

    impl ScrollSurface for Page {
        fn scroll_offset(&self) -> f32 {
            self.offset
        }

        fn body_position(&self) -> BodyPosition {
            self.body
        }

        fn set_body_position(&mut self, position: BodyPosition) {
            self.body = position;
        }

        fn scroll_to(&mut self, offset: f32) {
            self.offset = offset;
            self.scroll_calls += 1;
        }
    }

    fn page_at(offset: f32) -> Rc<RefCell<Page>> {
        Rc::new(RefCell::new(Page {
            offset,
            ..Page::default()
        }))
    }

    #[test]
    fn acquire_pins_body_at_offset() {
        let page = page_at(420.0);
        let lock = ScrollLock::acquire(page.clone());

        assert!(lock.is_active());
        assert_eq!(page.borrow().body, BodyPosition::Fixed { top: -420.0 });
    }

    #[test]
    fn drop_restores_offset_and_body() {
        let page = page_at(420.0);
        {
            let _lock = ScrollLock::acquire(page.clone());
            // The page offset drifts while pinned (e.g. layout changes).
            page.borrow_mut().offset = 0.0;
        }

        let page = page.borrow();
        assert_eq!(page.body, BodyPosition::Static);
        assert_abs_diff_eq!(page.offset, 420.0);
        assert_eq!(page.scroll_calls, 1);
    }

    #[test]
    fn release_is_idempotent() {
        let page = page_at(80.0);
        let mut lock = ScrollLock::acquire(page.clone());

        lock.release();
        lock.release();
        drop(lock);

        assert_eq!(page.borrow().scroll_calls, 1);
        assert_eq!(page.borrow().body, BodyPosition::Static);
    }

    #[test]
    fn second_lock_does_not_double_apply() {
        let page = page_at(120.0);
        let first = ScrollLock::acquire(page.clone());
        let second = ScrollLock::acquire(page.clone());

        assert!(!second.is_active());
        assert_eq!(page.borrow().body, BodyPosition::Fixed { top: -120.0 });

        drop(second);
        assert!(page.borrow().body.is_fixed(), "inert guard must not unpin");

        drop(first);
        assert_eq!(page.borrow().body, BodyPosition::Static);
        assert_abs_diff_eq!(page.borrow().offset, 120.0);
    }

    #[test]
    fn relock_after_release_captures_new_offset() {
        let page = page_at(10.0);
        drop(ScrollLock::acquire(page.clone()));

        page.borrow_mut().offset = 55.0;
        let lock = ScrollLock::acquire(page.clone());
        assert_eq!(page.borrow().body, BodyPosition::Fixed { top: -55.0 });
        drop(lock);
        assert_abs_diff_eq!(page.borrow().offset, 55.0);
    }
}
