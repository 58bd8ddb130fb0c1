// SPDX-License-Identifier: MPL-2.0
//! Where an image's bytes live.

use std::path::{Path, PathBuf};

/// Resolved location of a gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageLocation {
    /// A file on disk.
    Local(PathBuf),
    /// An `http(s)` URL.
    Remote(String),
}

impl ImageLocation {
    /// Classifies an image URL.
    ///
    /// `http://` and `https://` are remote, `file://` URLs and bare paths are
    /// local. Relative paths resolve against `base` when one is given.
    #[must_use]
    pub fn parse(url: &str, base: Option<&Path>) -> Self {
        let url = url.trim();
        let lower = url.to_ascii_lowercase();

        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Self::Remote(url.to_string());
        }

        let path = if lower.starts_with("file://") {
            Path::new(&url[7..])
        } else {
            Path::new(url)
        };

        match base {
            Some(base) if path.is_relative() => Self::Local(base.join(path)),
            _ => Self::Local(path.to_path_buf()),
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_urls_are_remote() {
        assert_eq!(
            ImageLocation::parse("https://example.org/a.jpg", None),
            ImageLocation::Remote("https://example.org/a.jpg".to_string())
        );
        assert!(ImageLocation::parse("HTTP://example.org/a.jpg", None).is_remote());
    }

    #[test]
    fn file_urls_and_paths_are_local() {
        assert_eq!(
            ImageLocation::parse("file:///srv/photos/a.png", None),
            ImageLocation::Local(PathBuf::from("/srv/photos/a.png"))
        );
        assert_eq!(
            ImageLocation::parse("/srv/photos/b.png", None),
            ImageLocation::Local(PathBuf::from("/srv/photos/b.png"))
        );
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        assert_eq!(
            ImageLocation::parse("img/c.png", Some(Path::new("/srv/gallery"))),
            ImageLocation::Local(PathBuf::from("/srv/gallery/img/c.png"))
        );
        assert_eq!(
            ImageLocation::parse("/abs/c.png", Some(Path::new("/srv/gallery"))),
            ImageLocation::Local(PathBuf::from("/abs/c.png"))
        );
    }
}
