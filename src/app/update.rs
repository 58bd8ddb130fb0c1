// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{App, Message};
use crate::media::LoadedGallery;
use crate::ui::gallery::{self, Effect as ViewerEffect};
use crate::ui::host::{self, Effect as HostEffect};
use iced::Task;

impl App {
    /// Routes a message to its component and applies the resulting effect.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Host(message) => self.handle_host(message),
            Message::Viewer(message) => self.handle_viewer(message),
            Message::GalleryLoaded(Ok(loaded)) => self.handle_gallery_loaded(loaded),
            Message::GalleryLoaded(Err(error)) => {
                self.host.set_failed(error);
                Task::none()
            }
            Message::ImageFetched { url, result } => {
                self.store.complete(url, result);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                self.host.resize(size);
                self.prefetch_visible()
            }
            Message::FileDropped(path) => {
                if let Some(viewer) = self.viewer.take() {
                    // Releases the scroll lock so the restore below is queued.
                    drop(viewer);
                    tracing::debug!("viewer replaced by dropped gallery");
                }
                let restore = self.host.restore_task();
                Task::batch([restore, self.load_gallery(path)])
            }
        }
    }

    fn handle_host(&mut self, message: host::Message) -> Task<Message> {
        match self.host.handle(message) {
            HostEffect::Open(index) => {
                self.open_viewer(Some(isize::try_from(index).unwrap_or(isize::MAX)))
            }
            HostEffect::Revealed => self.prefetch_visible(),
            HostEffect::None => Task::none(),
        }
    }

    fn handle_viewer(&mut self, message: gallery::Message) -> Task<Message> {
        let Some(viewer) = self.viewer.as_mut() else {
            // Late events from a viewer that already closed.
            return Task::none();
        };

        match viewer.handle(message) {
            ViewerEffect::None => Task::none(),
            ViewerEffect::Navigated(index) => {
                self.host.highlight(index);
                self.prefetch_around(index)
            }
            ViewerEffect::Close => {
                let index = viewer.current_index();
                self.viewer = None;
                self.host.highlight(index);
                // The viewer's prefetches may have evicted grid thumbnails.
                Task::batch([self.host.restore_task(), self.prefetch_visible()])
            }
        }
    }

    fn handle_gallery_loaded(&mut self, loaded: LoadedGallery) -> Task<Message> {
        let LoadedGallery { gallery, start } = loaded;
        self.host.set_gallery(gallery);

        let thumbnails = self.prefetch_visible();

        let start = self
            .pending_start
            .take()
            .or_else(|| start.and_then(|index| isize::try_from(index).ok()));
        match start {
            Some(index) => Task::batch([thumbnails, self.open_viewer(Some(index))]),
            None => thumbnails,
        }
    }
}
