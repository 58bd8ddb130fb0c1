// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The host page always tracks window size and file drops. The viewer's
//! keyboard, touch and resize listeners are only subscribed while a viewer
//! is open, so closing it removes them.

use super::Message;
use crate::ui::gallery;
use iced::{event, window, Event, Subscription};

/// Window events the host page cares about.
pub fn create_host_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}

/// Viewer listeners, present only while `viewer_open`.
pub fn create_viewer_subscription(viewer_open: bool) -> Subscription<Message> {
    if viewer_open {
        gallery::State::subscription().map(Message::Viewer)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::domain::gallery::{Gallery, GalleryImage};
    use crate::media::LoadedGallery;
    use crate::ui::host;
    use iced::advanced::subscription::into_recipes;
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;

    fn listeners(subscription: Subscription<Message>) -> usize {
        into_recipes(subscription).len()
    }

    #[test]
    fn closed_viewer_subscribes_nothing() {
        assert_eq!(listeners(create_viewer_subscription(false)), 0);
        assert_eq!(listeners(create_viewer_subscription(true)), 1);
    }

    #[test]
    fn viewer_listeners_come_and_go_with_the_viewer() {
        let mut app = App::for_tests(8);
        assert_eq!(listeners(app.subscription()), 1, "host listener only");

        let images = (0..3)
            .map(|i| GalleryImage::new(format!("p{i}"), format!("/photos/{i}.jpg")))
            .collect();
        let _ = app.update(Message::GalleryLoaded(Ok(LoadedGallery {
            gallery: Gallery::new(None, images).expect("unique ids"),
            start: None,
        })));
        let _ = app.update(Message::Host(host::Message::ThumbnailPressed(0)));
        assert_eq!(listeners(app.subscription()), 2);

        let _ = app.update(Message::Viewer(gallery::Message::KeyPressed(Key::Named(
            Named::Escape,
        ))));
        assert!(!app.is_viewer_open());
        assert_eq!(listeners(app.subscription()), 1, "viewer listeners removed on close");
    }
}
