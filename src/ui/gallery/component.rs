// SPDX-License-Identifier: MPL-2.0
//! Gallery viewer component encapsulating state and update logic.
//!
//! The viewer composes the navigation state machine, the breakpoint
//! detector, the gesture and keyboard interpreters, and the page scroll
//! lock. It never talks to the host directly: [`State::handle`] returns an
//! [`Effect`] and the host decides what to do with it. A viewer reports
//! [`Effect::Close`] exactly once; after that it ignores all input.

use super::breakpoint::{self, Layout};
use super::gesture::{self, SwipeThresholds};
use super::keyboard as keys;
use super::scroll_lock::{ScrollLock, SharedSurface};
use super::view;
use super::Intent;
use crate::domain::gallery::{Breakpoint, GalleryImage, GalleryPosition, HeightRatio};
use crate::i18n::fluent::I18n;
use crate::media::ImageStore;
use iced::{event, keyboard, touch, window, Element, Event, Size, Subscription};
use std::sync::Arc;

/// Tunables applied to every viewer the host opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerOptions {
    /// Viewport width below which the mobile layout is used.
    pub breakpoint: Breakpoint,
    /// Swipe distances for navigation and dismissal.
    pub swipe: SwipeThresholds,
    /// Maximum image height on desktop, as a share of the viewport.
    pub desktop_max_height: HeightRatio,
    /// Whether the desktop layout shows a thumbnail strip.
    pub show_thumbnails: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            breakpoint: Breakpoint::default(),
            swipe: SwipeThresholds::default(),
            desktop_max_height: HeightRatio::default(),
            show_thumbnails: true,
        }
    }
}

/// What the caller asks the viewer to show.
#[derive(Debug, Clone)]
pub struct OpenRequest {
    /// Images to present, in order.
    pub images: Arc<[GalleryImage]>,
    /// Starting index; clamped into range, `None` starts at the first image.
    pub initial_index: Option<isize>,
    /// Optional heading shown above the image.
    pub title: Option<String>,
}

/// Messages for the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Right arrow control.
    Next,
    /// Left arrow control.
    Previous,
    /// Indicator dot or thumbnail.
    JumpTo(usize),
    /// Close button.
    CloseRequested,
    /// Press on the dimmed area around the image.
    BackdropPressed,
    /// Press on the image itself; swallowed so it never reaches the backdrop.
    ImagePressed,
    /// A key went down anywhere in the window.
    KeyPressed(keyboard::Key),
    /// Touch input anywhere in the window.
    Touch(touch::Event),
    /// The window was resized.
    Resized(Size),
}

/// Effects for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// The current image changed to this index.
    Navigated(usize),
    /// The viewer was dismissed. Emitted once per viewer.
    Close,
}

/// Viewer state, alive from open to close.
#[derive(Debug)]
pub struct State {
    images: Arc<[GalleryImage]>,
    title: Option<String>,
    position: GalleryPosition,
    detector: breakpoint::Detector,
    gestures: gesture::State,
    options: ViewerOptions,
    scroll_lock: Option<ScrollLock>,
    closing: bool,
}

/// Environment the view needs from the host.
#[derive(Clone, Copy)]
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub store: &'a ImageStore,
}

impl State {
    /// Opens a viewer.
    ///
    /// `viewport` is the current window size; `surface`, when given, is the
    /// page pinned for as long as the viewer stays open. Empty galleries do
    /// not pin anything.
    #[must_use]
    pub fn open(
        request: OpenRequest,
        options: ViewerOptions,
        viewport: Size,
        surface: Option<SharedSurface>,
    ) -> Self {
        let position = GalleryPosition::new(request.images.len(), request.initial_index);
        let scroll_lock = if position.is_empty() {
            None
        } else {
            surface.map(ScrollLock::acquire)
        };

        tracing::info!(
            images = position.len(),
            index = position.index(),
            "gallery viewer opened"
        );

        Self {
            images: request.images,
            title: request.title.filter(|t| !t.trim().is_empty()),
            position,
            detector: breakpoint::Detector::new(options.breakpoint, viewport),
            gestures: gesture::State::new(options.swipe),
            options,
            scroll_lock,
            closing: false,
        }
    }

    /// Creates the event subscription. The host only keeps it alive while a
    /// viewer is open, so listeners disappear together with the viewer.
    pub fn subscription() -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                Some(Message::KeyPressed(key))
            }
            Event::Touch(touch_event) => Some(Message::Touch(touch_event)),
            Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
            _ => None,
        })
    }

    /// Handles a viewer message.
    pub fn handle(&mut self, message: Message) -> Effect {
        if self.closing {
            return Effect::None;
        }

        match message {
            Message::Next => self.apply(Intent::Next),
            Message::Previous => self.apply(Intent::Previous),
            Message::JumpTo(index) => self.jump_to(index),
            Message::CloseRequested | Message::BackdropPressed => self.apply(Intent::Close),
            Message::ImagePressed => Effect::None,
            Message::KeyPressed(key) => {
                keys::interpret(&key).map_or(Effect::None, |intent| self.apply(intent))
            }
            Message::Touch(touch_event) => self.handle_touch(touch_event),
            Message::Resized(size) => {
                if self.detector.resize(size) {
                    tracing::debug!(layout = ?self.detector.layout(), "viewer layout changed");
                }
                Effect::None
            }
        }
    }

    fn handle_touch(&mut self, touch_event: touch::Event) -> Effect {
        match touch_event {
            touch::Event::FingerPressed { id, position } => {
                self.gestures.touch_started(id, position);
                Effect::None
            }
            touch::Event::FingerLifted { id, position } => self
                .gestures
                .touch_ended(id, position)
                .map_or(Effect::None, |intent| self.apply(intent)),
            touch::Event::FingerLost { id, .. } => {
                self.gestures.touch_lost(id);
                Effect::None
            }
            touch::Event::FingerMoved { .. } => Effect::None,
        }
    }

    fn apply(&mut self, intent: Intent) -> Effect {
        let target = match intent {
            Intent::Close => {
                self.closing = true;
                self.gestures.reset();
                if let Some(lock) = self.scroll_lock.as_mut() {
                    lock.release();
                }
                tracing::info!(index = self.position.index(), "gallery viewer closed");
                return Effect::Close;
            }
            Intent::Next => self.position.next(),
            Intent::Previous => self.position.previous(),
            Intent::First => self.position.first(),
            Intent::Last => self.position.last(),
        };

        self.move_to(target)
    }

    fn jump_to(&mut self, index: usize) -> Effect {
        match self.position.jump_to(index) {
            Some(target) => self.move_to(target),
            None => {
                tracing::warn!(index, len = self.position.len(), "ignoring out-of-range jump");
                Effect::None
            }
        }
    }

    fn move_to(&mut self, target: GalleryPosition) -> Effect {
        if target == self.position {
            return Effect::None;
        }
        self.position = target;
        tracing::debug!(index = target.index(), "gallery navigated");
        Effect::Navigated(target.index())
    }

    /// Renders the viewer.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        view::view(self, env)
    }

    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&GalleryImage> {
        self.images.get(self.position.index())
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.position.index()
    }

    #[must_use]
    pub fn position(&self) -> GalleryPosition {
        self.position
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.detector.layout()
    }

    #[must_use]
    pub fn is_mobile_layout(&self) -> bool {
        self.detector.is_mobile_layout()
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.detector.viewport()
    }

    #[must_use]
    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// Whether navigation controls are shown.
    #[must_use]
    pub fn shows_controls(&self) -> bool {
        self.position.has_multiple()
    }

    /// Whether a close has already been reported.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Whether this viewer currently pins the page behind it.
    #[must_use]
    pub fn holds_scroll_lock(&self) -> bool {
        self.scroll_lock.as_ref().is_some_and(ScrollLock::is_active)
    }
}
