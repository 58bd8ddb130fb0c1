// SPDX-License-Identifier: MPL-2.0
//! Core gallery types.
//!
//! These types represent pure data without any presentation dependencies.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Identifier of an image, unique within one gallery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(String);

impl ImageId {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One image of a gallery.
///
/// # Example
///
/// ```
/// use samiske_gallery::domain::gallery::GalleryImage;
///
/// let image = GalleryImage::new("a1", "https://samiske.no/media/a1.jpg")
///     .with_caption("Sámi nationaldag");
///
/// assert_eq!(image.id().as_str(), "a1");
/// assert_eq!(image.caption(), Some("Sámi nationaldag"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    id: ImageId,
    url: String,
    caption: Option<String>,
}

impl GalleryImage {
    /// Creates an image without caption.
    #[must_use]
    pub fn new(id: impl Into<ImageId>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            caption: None,
        }
    }

    /// Attaches a caption. Blank captions are dropped.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        let caption = caption.into();
        self.caption = if caption.trim().is_empty() {
            None
        } else {
            Some(caption)
        };
        self
    }

    #[must_use]
    pub fn id(&self) -> &ImageId {
        &self.id
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

/// Two images of the same gallery share an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateImageId(pub ImageId);

impl fmt::Display for DuplicateImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate image id '{}'", self.0)
    }
}

impl std::error::Error for DuplicateImageId {}

/// An ordered, immutable image sequence with an optional title.
///
/// Images are stored behind an `Arc` so the viewer can hold the sequence
/// without copying it every time it opens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery {
    title: Option<String>,
    images: Arc<[GalleryImage]>,
}

impl Gallery {
    /// Builds a gallery, rejecting sequences with duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateImageId`] naming the first repeated id.
    pub fn new(
        title: Option<String>,
        images: Vec<GalleryImage>,
    ) -> Result<Self, DuplicateImageId> {
        let mut seen = HashSet::with_capacity(images.len());
        for image in &images {
            if !seen.insert(image.id()) {
                return Err(DuplicateImageId(image.id().clone()));
            }
        }

        Ok(Self {
            title: title.filter(|t| !t.trim().is_empty()),
            images: images.into(),
        })
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// Returns a shared handle to the image sequence.
    #[must_use]
    pub fn shared_images(&self) -> Arc<[GalleryImage]> {
        Arc::clone(&self.images)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the position of the image with the given id.
    #[must_use]
    pub fn index_of(&self, id: &ImageId) -> Option<usize> {
        self.images.iter().position(|image| image.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str) -> GalleryImage {
        GalleryImage::new(id, format!("/media/{id}.jpg"))
    }

    #[test]
    fn blank_caption_is_dropped() {
        let image = image("a").with_caption("   ");
        assert_eq!(image.caption(), None);
    }

    #[test]
    fn gallery_rejects_duplicate_ids() {
        let result = Gallery::new(None, vec![image("a"), image("b"), image("a")]);
        assert_eq!(result, Err(DuplicateImageId(ImageId::new("a"))));
    }

    #[test]
    fn gallery_keeps_order_and_finds_ids() {
        let gallery = Gallery::new(
            Some("Márkomeannu".to_string()),
            vec![image("a"), image("b"), image("c")],
        )
        .unwrap();

        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.title(), Some("Márkomeannu"));
        assert_eq!(gallery.index_of(&ImageId::new("c")), Some(2));
        assert_eq!(gallery.index_of(&ImageId::new("z")), None);
    }

    #[test]
    fn blank_title_is_dropped() {
        let gallery = Gallery::new(Some(String::new()), vec![image("a")]).unwrap();
        assert_eq!(gallery.title(), None);
    }

    #[test]
    fn shared_images_do_not_copy() {
        let gallery = Gallery::new(None, vec![image("a")]).unwrap();
        let shared = gallery.shared_images();
        assert!(std::ptr::eq(shared.as_ptr(), gallery.images().as_ptr()));
    }
}
