// SPDX-License-Identifier: MPL-2.0
//! Gallery sources and image loading for the host page.
//!
//! Sources turn a directory or a manifest into a [`Gallery`]; the
//! [`ImageStore`] turns gallery entries into image handles, downloading
//! remote ones in the background.
//!
//! [`Gallery`]: crate::domain::gallery::Gallery

pub mod fetch;
pub mod location;
pub mod source;
pub mod store;

use std::path::Path;

pub use extensions::IMAGE_EXTENSIONS;
pub use location::ImageLocation;
pub use source::{open_path, DirectorySource, GallerySource, LoadedGallery, ManifestSource};
pub use store::{ImageStatus, ImageStore};

/// Supported file extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];

    /// Gallery manifest extension
    pub const MANIFEST_EXTENSION: &str = "toml";
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
}

/// Whether `path` names an image the viewer can display.
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    lowercase_extension(path.as_ref())
        .is_some_and(|ext| extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Whether `path` names a gallery manifest.
pub fn is_manifest<P: AsRef<Path>>(path: P) -> bool {
    lowercase_extension(path.as_ref()).is_some_and(|ext| ext == extensions::MANIFEST_EXTENSION)
}
