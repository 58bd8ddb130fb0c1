// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::LoadedGallery;
use crate::ui::{gallery, host};
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Host(host::Message),
    Viewer(gallery::Message),
    /// Result of reading a directory or manifest.
    GalleryLoaded(Result<LoadedGallery, Error>),
    /// A remote image download finished.
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    WindowResized(Size),
    /// A file or directory was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override, e.g. `nb-NO`.
    pub lang: Option<String>,
    /// Optional settings directory (`--config-dir`).
    pub config_dir: Option<String>,
    /// Open the viewer at this index once the gallery is loaded.
    pub start: Option<isize>,
    /// Heading shown in the viewer instead of the gallery's own title.
    pub title: Option<String>,
    /// Image directory, image file or manifest to show.
    pub path: Option<String>,
}
