// SPDX-License-Identifier: MPL-2.0
//! Gallery sources.
//!
//! A source produces an ordered [`Gallery`]. Two are provided: a directory of
//! image files and a TOML manifest listing images by id and url.
//!
//! Manifest format:
//!
//! ```toml
//! title = "Sámi grand prix 2026"
//!
//! [[images]]
//! id = "stage"
//! url = "https://example.org/stage.jpg"
//! caption = "Main stage"
//!
//! [[images]]
//! id = "crowd"
//! url = "photos/crowd.png"
//! ```

use super::{is_manifest, is_supported_image, ImageLocation};
use crate::app::config::SortOrder;
use crate::domain::gallery::{Gallery, GalleryImage};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Anything that can produce a gallery.
pub trait GallerySource {
    /// Loads the gallery. Called off the UI thread.
    fn load(&self) -> Result<Gallery>;
}

// =============================================================================
// Directory
// =============================================================================

/// Every supported image file directly inside a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    directory: PathBuf,
    sort_order: SortOrder,
}

impl DirectorySource {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>, sort_order: SortOrder) -> Self {
        Self {
            directory: directory.into(),
            sort_order,
        }
    }

    fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            }
        }
        sort_image_files(&mut files, self.sort_order);
        Ok(files)
    }
}

impl GallerySource for DirectorySource {
    fn load(&self) -> Result<Gallery> {
        let files = self.scan()?;
        tracing::debug!(
            directory = %self.directory.display(),
            count = files.len(),
            "scanned image directory"
        );

        // File names are unique within a directory, so they make stable ids.
        let images = files
            .iter()
            .map(|path| {
                let id = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                GalleryImage::new(id, path.to_string_lossy().into_owned())
            })
            .collect();

        let title = self
            .directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Ok(Gallery::new(title, images)?)
    }
}

fn file_time(path: &Path, sort_order: SortOrder) -> SystemTime {
    let metadata = path.metadata();
    let time = match sort_order {
        SortOrder::CreatedDate => metadata.and_then(|m| m.created()),
        SortOrder::ModifiedDate | SortOrder::Alphabetical => metadata.and_then(|m| m.modified()),
    };
    time.unwrap_or(SystemTime::UNIX_EPOCH)
}

fn sort_image_files(files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate | SortOrder::CreatedDate => {
            // Ties fall back to the name so the order stays deterministic.
            files.sort_by(|a, b| {
                file_time(a, sort_order)
                    .cmp(&file_time(b, sort_order))
                    .then_with(|| a.file_name().cmp(&b.file_name()))
            });
        }
    }
}

// =============================================================================
// Manifest
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    title: Option<String>,
    #[serde(default)]
    images: Vec<ManifestImage>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestImage {
    id: String,
    url: String,
    caption: Option<String>,
}

/// A TOML manifest listing images explicitly.
///
/// Relative local urls resolve against the manifest's directory.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parses manifest text. `base` resolves relative image paths.
    pub fn parse(content: &str, base: Option<&Path>) -> Result<Gallery> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|err| Error::Manifest(err.to_string()))?;

        let mut images = Vec::with_capacity(manifest.images.len());
        for (position, entry) in manifest.images.into_iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(Error::Manifest(format!("image {} has an empty id", position + 1)));
            }
            if entry.url.trim().is_empty() {
                return Err(Error::Manifest(format!("image '{}' has an empty url", entry.id)));
            }

            let url = match ImageLocation::parse(&entry.url, base) {
                ImageLocation::Remote(url) => url,
                ImageLocation::Local(path) => path.to_string_lossy().into_owned(),
            };
            let image = GalleryImage::new(entry.id, url);
            images.push(match entry.caption {
                Some(caption) => image.with_caption(caption),
                None => image,
            });
        }

        Ok(Gallery::new(manifest.title, images)?)
    }
}

impl GallerySource for ManifestSource {
    fn load(&self) -> Result<Gallery> {
        let content = fs::read_to_string(&self.path)?;
        let gallery = Self::parse(&content, self.path.parent())?;
        tracing::debug!(
            manifest = %self.path.display(),
            count = gallery.len(),
            "loaded gallery manifest"
        );
        Ok(gallery)
    }
}

// =============================================================================
// Path dispatch
// =============================================================================

/// A gallery plus the image the host should highlight first.
#[derive(Debug, Clone)]
pub struct LoadedGallery {
    pub gallery: Gallery,
    /// Set when the user opened a single image file.
    pub start: Option<usize>,
}

/// Opens whatever `path` points at.
///
/// - a directory is scanned,
/// - a `.toml` file is read as a manifest,
/// - an image file opens its directory with that image as the start.
pub fn open_path(path: &Path, sort_order: SortOrder) -> Result<LoadedGallery> {
    if path.is_dir() {
        let gallery = DirectorySource::new(path, sort_order).load()?;
        return Ok(LoadedGallery {
            gallery,
            start: None,
        });
    }

    if is_manifest(path) {
        let gallery = ManifestSource::new(path).load()?;
        return Ok(LoadedGallery {
            gallery,
            start: None,
        });
    }

    if is_supported_image(path) && path.is_file() {
        // A bare file name has an empty parent: the working directory.
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let gallery = DirectorySource::new(fs::canonicalize(parent)?, sort_order).load()?;
        let start = gallery
            .images()
            .iter()
            .position(|image| Path::new(image.url()).file_name() == path.file_name());
        return Ok(LoadedGallery { gallery, start });
    }

    Err(Error::Io(format!(
        "{} is neither an image directory, an image nor a manifest",
        path.display()
    )))
}
