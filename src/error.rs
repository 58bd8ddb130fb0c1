// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors carry their messages as strings so they can travel inside Iced
//! messages, which must be `Clone`.

use crate::domain::gallery::DuplicateImageId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Settings could not be read or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// A gallery manifest is malformed or inconsistent.
    #[error("invalid gallery manifest: {0}")]
    Manifest(String),

    /// A remote image could not be downloaded.
    #[error("failed to fetch image: {0}")]
    Fetch(String),
}

impl Error {
    /// Returns the i18n message key used when showing this error on the page.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Manifest(_) => "error-manifest",
            Error::Fetch(_) => "error-fetch",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}

impl From<DuplicateImageId> for Error {
    fn from(err: DuplicateImageId) -> Self {
        Error::Manifest(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ImageId;

    #[test]
    fn io_error_converts_with_message() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err, Error::Io("gone".to_string()));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn duplicate_id_is_a_manifest_error() {
        let err: Error = DuplicateImageId(ImageId::new("p1")).into();
        assert_eq!(err.i18n_key(), "error-manifest");
        assert!(err.to_string().contains("p1"));
    }
}
