// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation state machine.
//!
//! [`GalleryPosition`] is a plain value: every transition consumes the
//! current position and returns the next one, so the rules can be exercised
//! without any window or widget.
//!
//! # Invariant
//!
//! For a non-empty gallery of `len` images, `index < len` holds after every
//! transition. For an empty gallery every transition is a no-op and the
//! index stays `0`.

/// Current index within a gallery of known length.
///
/// # Example
///
/// ```
/// use samiske_gallery::domain::gallery::GalleryPosition;
///
/// let position = GalleryPosition::new(4, Some(2));
/// let position = position.next().next();
/// assert_eq!(position.index(), 0);
/// assert_eq!(position.previous().index(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryPosition {
    index: usize,
    len: usize,
}

impl GalleryPosition {
    /// Creates a position for `len` images starting at `initial_index`.
    ///
    /// A missing index starts at the first image. Out-of-range indices are
    /// clamped into bounds: negative values start at the first image, values
    /// past the end start at the last one.
    #[must_use]
    pub fn new(len: usize, initial_index: Option<isize>) -> Self {
        let index = match initial_index {
            _ if len == 0 => 0,
            None => 0,
            Some(requested) => usize::try_from(requested).map_or(0, |i| i.min(len - 1)),
        };
        Self { index, len }
    }

    /// Zero-based index of the current image.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Number of images in the gallery.
    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Whether navigation controls make sense (more than one image).
    #[must_use]
    pub fn has_multiple(self) -> bool {
        self.len > 1
    }

    /// One-based position for counters ("3 / 4"), `None` when empty.
    #[must_use]
    pub fn position(self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index + 1)
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.len == 0 || self.index == self.len - 1
    }

    /// Advances by one, wrapping from the last image to the first.
    #[must_use]
    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    /// Steps back by one, wrapping from the first image to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Jumps directly to `index`.
    ///
    /// Returns `None` when `index` is out of range; the caller keeps its
    /// current position in that case.
    #[must_use]
    pub fn jump_to(self, index: usize) -> Option<Self> {
        (index < self.len).then_some(Self { index, ..self })
    }

    /// Moves to the first image.
    #[must_use]
    pub fn first(self) -> Self {
        Self { index: 0, ..self }
    }

    /// Moves to the last image.
    #[must_use]
    pub fn last(self) -> Self {
        Self {
            index: self.len.saturating_sub(1),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_to_first_image() {
        assert_eq!(GalleryPosition::new(5, None).index(), 0);
    }

    #[test]
    fn negative_initial_index_clamps_to_first() {
        assert_eq!(GalleryPosition::new(4, Some(-1)).index(), 0);
    }

    #[test]
    fn initial_index_past_end_clamps_to_last() {
        assert_eq!(GalleryPosition::new(4, Some(4)).index(), 3);
        assert_eq!(GalleryPosition::new(4, Some(isize::MAX)).index(), 3);
    }

    #[test]
    fn four_images_opened_at_two() {
        let position = GalleryPosition::new(4, Some(2));

        let position = position.next();
        assert_eq!(position.index(), 3);

        let position = position.next();
        assert_eq!(position.index(), 0);

        let position = position.previous();
        assert_eq!(position.index(), 3);
    }

    #[test]
    fn single_image_never_moves() {
        let position = GalleryPosition::new(1, Some(0));
        assert!(!position.has_multiple());
        assert_eq!(position.next().index(), 0);
        assert_eq!(position.previous().index(), 0);
    }

    #[test]
    fn empty_gallery_transitions_are_noops() {
        let position = GalleryPosition::new(0, Some(3));
        assert!(position.is_empty());
        assert_eq!(position.next(), position);
        assert_eq!(position.previous(), position);
        assert_eq!(position.last().index(), 0);
        assert_eq!(position.jump_to(0), None);
        assert_eq!(position.position(), None);
    }

    #[test]
    fn jump_to_rejects_out_of_range() {
        let position = GalleryPosition::new(3, Some(1));
        assert_eq!(position.jump_to(2).map(GalleryPosition::index), Some(2));
        assert_eq!(position.jump_to(3), None);
    }

    #[test]
    fn position_is_one_based() {
        let position = GalleryPosition::new(4, Some(3));
        assert_eq!(position.position(), Some(4));
        assert!(position.is_last());
        assert!(!position.is_first());
    }

    proptest! {
        #[test]
        fn next_len_times_returns_to_start(len in 1usize..64, start in 0usize..64) {
            let origin = GalleryPosition::new(len, Some((start % len) as isize));
            let mut position = origin;
            for _ in 0..len {
                position = position.next();
            }
            prop_assert_eq!(position, origin);
        }

        #[test]
        fn previous_len_times_returns_to_start(len in 1usize..64, start in 0usize..64) {
            let origin = GalleryPosition::new(len, Some((start % len) as isize));
            let mut position = origin;
            for _ in 0..len {
                position = position.previous();
            }
            prop_assert_eq!(position, origin);
        }

        #[test]
        fn index_stays_in_bounds(
            len in 1usize..32,
            initial in -64isize..64,
            steps in proptest::collection::vec(0u8..4, 0..64),
        ) {
            let mut position = GalleryPosition::new(len, Some(initial));
            prop_assert!(position.index() < len);
            for (i, step) in steps.into_iter().enumerate() {
                position = match step {
                    0 => position.next(),
                    1 => position.previous(),
                    2 => position.jump_to(i % len).unwrap_or(position),
                    _ => position.last(),
                };
                prop_assert!(position.index() < len);
            }
        }
    }
}
