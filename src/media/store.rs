// SPDX-License-Identifier: MPL-2.0
//! Image handles for gallery entries.
//!
//! Local files are handed to Iced by path. Remote images are downloaded once
//! and kept in a bounded LRU cache. A remote image nobody asked for yet (or
//! one the cache evicted) reports [`ImageStatus::Idle`]; while a download runs
//! it reports [`ImageStatus::Loading`], and a failed download or a missing
//! file reports [`ImageStatus::Failed`] so the viewer can show its placeholder.

use super::ImageLocation;
use crate::domain::gallery::GalleryImage;
use crate::error::Result;
use iced::widget::image::Handle;
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;

/// What the viewer can draw for an image right now.
#[derive(Debug, Clone)]
pub enum ImageStatus {
    Ready(Handle),
    /// Remote image not requested yet.
    Idle,
    Loading,
    Failed,
}

#[derive(Debug, Clone)]
enum Entry {
    Pending,
    Ready(Handle),
    Failed,
}

pub struct ImageStore {
    entries: LruCache<String, Entry>,
}

impl fmt::Debug for ImageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageStore")
            .field("len", &self.entries.len())
            .field("cap", &self.entries.cap())
            .finish()
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new(crate::app::config::DEFAULT_REMOTE_CACHE_ENTRIES)
    }
}

impl ImageStore {
    /// Creates a store holding at most `capacity` entries (minimum one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Current status of `image`. Never blocks and never starts work.
    #[must_use]
    pub fn status(&self, image: &GalleryImage) -> ImageStatus {
        match self.entries.peek(image.url()) {
            Some(Entry::Ready(handle)) => ImageStatus::Ready(handle.clone()),
            Some(Entry::Failed) => ImageStatus::Failed,
            Some(Entry::Pending) => ImageStatus::Loading,
            None => match ImageLocation::parse(image.url(), None) {
                ImageLocation::Local(path) => ImageStatus::Ready(Handle::from_path(path)),
                ImageLocation::Remote(_) => ImageStatus::Idle,
            },
        }
    }

    /// Makes sure `image` is available, returning the url the caller must
    /// download when it is a remote image not cached or in flight yet.
    pub fn prepare(&mut self, image: &GalleryImage) -> Option<String> {
        if self.entries.get(image.url()).is_some() {
            return None;
        }

        match ImageLocation::parse(image.url(), None) {
            ImageLocation::Local(path) => {
                let entry = if path.is_file() {
                    Entry::Ready(Handle::from_path(path))
                } else {
                    tracing::warn!(path = %path.display(), "image file missing");
                    Entry::Failed
                };
                self.entries.put(image.url().to_string(), entry);
                None
            }
            ImageLocation::Remote(url) => {
                self.entries.put(url.clone(), Entry::Pending);
                Some(url)
            }
        }
    }

    /// Records the outcome of a download started by [`ImageStore::prepare`].
    pub fn complete(&mut self, url: String, result: Result<Vec<u8>>) {
        let entry = match result {
            Ok(bytes) => Entry::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!(%url, %err, "remote image unavailable");
                Entry::Failed
            }
        };
        self.entries.put(url, entry);
    }

    /// Grows the cache so it holds at least `entries` images. Never shrinks.
    pub fn reserve(&mut self, entries: usize) {
        let Some(wanted) = NonZeroUsize::new(entries) else {
            return;
        };
        if wanted > self.entries.cap() {
            tracing::debug!(from = self.entries.cap().get(), to = entries, "growing image cache");
            self.entries.resize(wanted);
        }
    }

    /// Maximum number of cached entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Number of downloads still running.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, entry)| matches!(entry, Entry::Pending))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    const REMOTE: &str = "https://example.org/a.jpg";

    #[test]
    fn remote_image_goes_from_loading_to_ready() {
        let mut store = ImageStore::new(4);
        let image = GalleryImage::new("a", REMOTE);

        assert!(matches!(store.status(&image), ImageStatus::Idle));
        assert_eq!(store.prepare(&image).as_deref(), Some(REMOTE));
        assert!(matches!(store.status(&image), ImageStatus::Loading));
        assert_eq!(store.prepare(&image), None, "download already in flight");
        assert_eq!(store.pending(), 1);

        store.complete(REMOTE.to_string(), Ok(vec![1, 2, 3]));
        assert!(matches!(store.status(&image), ImageStatus::Ready(_)));
        assert_eq!(store.pending(), 0);
    }

    #[test]
    fn failed_download_reports_failed() {
        let mut store = ImageStore::new(4);
        let image = GalleryImage::new("a", REMOTE);
        let _ = store.prepare(&image);

        store.complete(REMOTE.to_string(), Err(Error::Fetch("404".to_string())));
        assert!(matches!(store.status(&image), ImageStatus::Failed));
        assert_eq!(store.prepare(&image), None, "failures are not retried");
    }

    #[test]
    fn missing_local_file_fails_existing_one_is_ready() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let present = temp_dir.path().join("a.png");
        std::fs::write(&present, b"fake").expect("failed to write file");
        let missing = temp_dir.path().join("b.png");

        let mut store = ImageStore::new(4);
        let present = GalleryImage::new("a", present.to_string_lossy().into_owned());
        let missing = GalleryImage::new("b", missing.to_string_lossy().into_owned());

        assert_eq!(store.prepare(&present), None);
        assert_eq!(store.prepare(&missing), None);
        assert!(matches!(store.status(&present), ImageStatus::Ready(_)));
        assert!(matches!(store.status(&missing), ImageStatus::Failed));
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut store = ImageStore::new(1);
        let first = GalleryImage::new("a", "https://example.org/1.jpg");
        let second = GalleryImage::new("b", "https://example.org/2.jpg");

        let _ = store.prepare(&first);
        store.complete("https://example.org/1.jpg".to_string(), Ok(vec![0]));
        let _ = store.prepare(&second);

        assert!(matches!(store.status(&first), ImageStatus::Idle));
        assert!(store.prepare(&first).is_some(), "evicted image is fetched again");
    }

    #[test]
    fn reserve_grows_but_never_shrinks() {
        let mut store = ImageStore::new(2);
        let first = GalleryImage::new("a", "https://example.org/1.jpg");
        let _ = store.prepare(&first);

        store.reserve(8);
        assert_eq!(store.capacity(), 8);
        assert!(matches!(store.status(&first), ImageStatus::Loading), "entries survive growth");

        store.reserve(3);
        store.reserve(0);
        assert_eq!(store.capacity(), 8);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let store = ImageStore::new(0);
        assert_eq!(store.entries.cap().get(), 1);
    }
}
